//! The parser facade.

use tracing::trace;

use crate::callback::MessageCallback;
use crate::config::ParserConfig;
use crate::dispatch;
use crate::error::Result;
use crate::message::tokenize;

/// Parses lines and dispatches them to one owned callback.
///
/// Reusable across any number of lines; a failed line leaves nothing behind
/// for the next call.
///
/// ```
/// use irc_syntax_core::{MessageBuilder, MessageKind, Parser};
///
/// let mut parser = Parser::new(MessageBuilder);
/// let message = parser.parse(":irc.example.com 366 me #rust :End of /NAMES list")
///     .unwrap()
///     .unwrap();
/// assert_eq!(message.target.as_deref(), Some("me"));
/// assert!(matches!(message.kind, MessageKind::EndOfNames { .. }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser<C> {
    callback: C,
    config: ParserConfig,
}

impl<C: MessageCallback> Parser<C> {
    /// Create a parser with the default configuration.
    pub fn new(callback: C) -> Self {
        Self::with_config(callback, ParserConfig::default())
    }

    /// Create a parser with an explicit configuration.
    pub fn with_config(callback: C, config: ParserConfig) -> Self {
        Self { callback, config }
    }

    /// Tokenize and dispatch one line, returning the callback's result.
    pub fn parse(&mut self, line: &str) -> Result<C::Output> {
        let line = if self.config.trim_line_ending {
            trim_line_ending(line)
        } else {
            line
        };

        let tokens = tokenize(line)?;
        trace!(
            command = %tokens.command,
            arguments = tokens.arguments.len(),
            tags = tokens.tags.len(),
            "tokenized line"
        );

        dispatch::line(&tokens, &mut self.callback, self.config.command_case)
    }

    /// The callback.
    pub fn callback(&self) -> &C {
        &self.callback
    }

    /// The callback, mutably.
    pub fn callback_mut(&mut self) -> &mut C {
        &mut self.callback
    }

    /// Consume the parser and return the callback.
    pub fn into_callback(self) -> C {
        self.callback
    }

    /// Active configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

fn trim_line_ending(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}
