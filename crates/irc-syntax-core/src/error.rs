//! Error types for tokenizing and dispatching protocol lines.
//!
//! Failures fall into two categories: a line that cannot be split into
//! components at all ([`ErrorCategory::Malformed`]), and a recognized command
//! whose argument count is outside its contract ([`ErrorCategory::Arity`]).
//! Unrecognized commands and numeric codes are not errors; they reach the
//! catch-all operations instead.

use thiserror::Error;

use crate::arity::Arity;
use crate::registry::Operation;

/// Convenience type alias for Results using [`ParseError`].
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Errors raised by [`Parser::parse`](crate::Parser::parse) and the dispatchers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// The line was empty.
    #[error("empty line")]
    EmptyLine,

    /// The line held only a tag block and/or prefix, with no command token.
    #[error("no command in line: {line:?}")]
    MissingCommand {
        /// The offending line.
        line: String,
    },

    /// A recognized command received an argument count outside its contract.
    #[error("{violation} for {operation}: expected {expected}, got {got}")]
    Arity {
        /// The operation whose contract was violated.
        operation: Operation,
        /// Whether there were too few or too many arguments.
        violation: ArityViolation,
        /// The declared contract.
        expected: Arity,
        /// The number of arguments received.
        got: usize,
    },
}

/// The two ways an argument list can break its arity contract.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArityViolation {
    /// Fewer arguments than the contract requires.
    #[error("Too few items")]
    TooFew,
    /// More arguments than the contract allows.
    #[error("Too many items")]
    TooMany,
}

/// Coarse classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Structural failure during tokenization.
    Malformed,
    /// Argument count outside a recognized command's contract.
    Arity,
}

impl ParseError {
    /// The category this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyLine | Self::MissingCommand { .. } => ErrorCategory::Malformed,
            Self::Arity { .. } => ErrorCategory::Arity,
        }
    }

    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyLine => "empty_line",
            Self::MissingCommand { .. } => "missing_command",
            Self::Arity {
                violation: ArityViolation::TooFew,
                ..
            } => "too_few_items",
            Self::Arity {
                violation: ArityViolation::TooMany,
                ..
            } => "too_many_items",
        }
    }

    /// The arity violation, if this is an arity error.
    pub fn violation(&self) -> Option<ArityViolation> {
        match self {
            Self::Arity { violation, .. } => Some(*violation),
            _ => None,
        }
    }

    /// Whether the line could not be tokenized.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        self.category() == ErrorCategory::Malformed
    }
}
