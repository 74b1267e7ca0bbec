use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use smallvec::SmallVec;

use super::tags::{split_tag, unescape_tag_value};

/// Ordered arguments of a line.
pub type Arguments<'a> = SmallVec<[&'a str; 15]>;

/// The command token of a line, classified lexically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandToken<'a> {
    /// Anything that is not exactly three ASCII digits.
    Named(&'a str),
    /// Exactly three ASCII digits.
    Numeric(u16),
}

impl<'a> CommandToken<'a> {
    /// Classify a raw command token.
    pub fn classify(token: &'a str) -> Self {
        let bytes = token.as_bytes();
        if bytes.len() == 3 && bytes.iter().all(u8::is_ascii_digit) {
            let code = bytes
                .iter()
                .fold(0u16, |code, digit| code * 10 + u16::from(digit - b'0'));
            CommandToken::Numeric(code)
        } else {
            CommandToken::Named(token)
        }
    }

    /// Whether this is a numeric reply code.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, CommandToken::Numeric(_))
    }
}

impl Display for CommandToken<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandToken::Named(name) => f.write_str(name),
            CommandToken::Numeric(code) => write!(f, "{:03}", code),
        }
    }
}

/// A tokenized line borrowing from its input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenizedLine<'a> {
    /// Raw tag entries (`key` or `key=value`), empty when there is no tag block.
    pub tags: Vec<&'a str>,
    /// Prefix without its leading `:`.
    pub prefix: Option<&'a str>,
    /// The command token.
    pub command: CommandToken<'a>,
    /// Arguments in order; the trailing argument is the last one.
    pub arguments: Arguments<'a>,
}

impl<'a> TokenizedLine<'a> {
    /// Look up a tag by key, unescaping its value.
    pub fn tag(&self, key: &str) -> Option<Cow<'a, str>> {
        find_tag(&self.tags, key)
    }
}

pub(crate) fn find_tag<'a>(tags: &[&'a str], key: &str) -> Option<Cow<'a, str>> {
    tags.iter()
        .map(|entry| split_tag(*entry))
        .find(|(k, _)| *k == key)
        .map(|(_, value)| unescape_tag_value(value))
}

fn needs_colon(argument: &str) -> bool {
    argument.is_empty() || argument.starts_with(':') || argument.contains(' ')
}

impl Display for TokenizedLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.tags.is_empty() {
            write!(f, "@{} ", self.tags.join(";"))?;
        }

        if let Some(prefix) = self.prefix {
            write!(f, ":{} ", prefix)?;
        }

        write!(f, "{}", self.command)?;

        let count = self.arguments.len();
        for (i, argument) in self.arguments.iter().enumerate() {
            if i + 1 == count && needs_colon(argument) {
                write!(f, " :{}", argument)?;
            } else {
                write!(f, " {}", argument)?;
            }
        }

        Ok(())
    }
}
