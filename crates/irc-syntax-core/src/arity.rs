//! Argument-count contracts.
//!
//! Every recognized operation declares an [`Arity`]. Validation produces a
//! [`ValidatedArgs`], the only value the
//! [`ArgumentBinder`](crate::bind::ArgumentBinder) can be built from.

use std::fmt;

use crate::error::ArityViolation;

/// How many arguments an operation accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arity {
    /// Exactly this many.
    Exact(usize),
    /// This many or more.
    AtLeast(usize),
    /// Inclusive range; used where trailing parameters are optional.
    Between(usize, usize),
    /// No constraint; arguments pass through verbatim.
    Any,
}

impl Arity {
    /// Smallest accepted count.
    pub const fn min(self) -> usize {
        match self {
            Self::Exact(n) | Self::AtLeast(n) | Self::Between(n, _) => n,
            Self::Any => 0,
        }
    }

    /// Largest accepted count, if bounded.
    pub const fn max(self) -> Option<usize> {
        match self {
            Self::Exact(n) | Self::Between(_, n) => Some(n),
            Self::AtLeast(_) | Self::Any => None,
        }
    }

    /// Check a raw count against the contract.
    pub fn check(self, count: usize) -> Result<(), ArityViolation> {
        if count < self.min() {
            return Err(ArityViolation::TooFew);
        }
        match self.max() {
            Some(max) if count > max => Err(ArityViolation::TooMany),
            _ => Ok(()),
        }
    }

    /// Validate `arguments` and hand back the proof value the binder needs.
    pub fn validate<'a>(
        self,
        arguments: &'a [&'a str],
    ) -> Result<ValidatedArgs<'a>, ArityViolation> {
        self.check(arguments.len())?;
        Ok(ValidatedArgs { arguments })
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "exactly {}", n),
            Self::AtLeast(n) => write!(f, "at least {}", n),
            Self::Between(min, max) => write!(f, "between {} and {}", min, max),
            Self::Any => f.write_str("any number"),
        }
    }
}

/// An argument list that has passed an [`Arity`] check.
///
/// Cannot be constructed outside this module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatedArgs<'a> {
    arguments: &'a [&'a str],
}

impl<'a> ValidatedArgs<'a> {
    /// The validated arguments.
    #[inline]
    pub fn as_slice(&self) -> &'a [&'a str] {
        self.arguments
    }

    /// Number of validated arguments.
    #[inline]
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Whether there are no arguments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}
