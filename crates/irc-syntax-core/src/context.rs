//! Per-line dispatch context.

use std::borrow::Cow;

use crate::bind::Source;
use crate::message::find_tag;

/// Tags, prefix and target of the line being dispatched.
///
/// Built fresh for every line and handed to each callback method by
/// reference, so nothing from one line can leak into the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Context<'a> {
    tags: &'a [&'a str],
    prefix: Option<&'a str>,
    target: Option<&'a str>,
}

impl<'a> Context<'a> {
    /// Create a context.
    pub fn new(tags: &'a [&'a str], prefix: Option<&'a str>, target: Option<&'a str>) -> Self {
        Self {
            tags,
            prefix,
            target,
        }
    }

    /// Raw tag entries.
    #[inline]
    pub fn tags(&self) -> &'a [&'a str] {
        self.tags
    }

    /// Prefix without its leading `:`.
    #[inline]
    pub fn prefix(&self) -> Option<&'a str> {
        self.prefix
    }

    /// First argument of a numeric reply. Always `None` for named commands.
    #[inline]
    pub fn target(&self) -> Option<&'a str> {
        self.target
    }

    /// The prefix split into nick/user/host or a server name.
    pub fn source(&self) -> Option<Source<'a>> {
        self.prefix.map(Source::parse)
    }

    /// Look up a tag by key, unescaping its value.
    ///
    /// A tag present without a value yields an empty string.
    pub fn tag(&self, key: &str) -> Option<Cow<'a, str>> {
        find_tag(self.tags, key)
    }
}
