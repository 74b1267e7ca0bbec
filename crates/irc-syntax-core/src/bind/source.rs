//! Message source, split from a line's prefix.
//!
//! A prefix names either a server (`irc.example.com`) or a user
//! (`nick!user@host`, with `user` and `host` both optional).
//!
//! # Reference
//! - RFC 2812 Section 2.3.1: Message format

use std::fmt;

/// Origin of a message, borrowed from the prefix it was split from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source<'a> {
    /// Server name (e.g., "irc.example.com")
    Server(&'a str),
    /// User mask.
    User {
        /// Nickname; empty when the prefix starts with `!` or `@`.
        nick: &'a str,
        /// Username, if a `!` was present.
        user: Option<&'a str>,
        /// Hostname, if an `@` was present.
        host: Option<&'a str>,
    },
}

impl<'a> Source<'a> {
    /// Split a prefix into its parts.
    ///
    /// This is lenient and never fails. A bare name containing a dot is
    /// treated as a server; anything with `!` or `@` is a user mask.
    pub fn parse(prefix: &'a str) -> Self {
        let (name, host) = match prefix.split_once('@') {
            Some((name, host)) => (name, Some(host)),
            None => (prefix, None),
        };
        let (nick, user) = match name.split_once('!') {
            Some((nick, user)) => (nick, Some(user)),
            None => (name, None),
        };

        if user.is_none() && host.is_none() && nick.contains('.') {
            Source::Server(nick)
        } else {
            Source::User { nick, user, host }
        }
    }

    /// Get the nickname if this is a user source.
    pub fn nick(&self) -> Option<&'a str> {
        match *self {
            Source::User { nick, .. } if !nick.is_empty() => Some(nick),
            _ => None,
        }
    }

    /// Get the username if this is a user source.
    pub fn user(&self) -> Option<&'a str> {
        match *self {
            Source::User { user, .. } => user.filter(|u| !u.is_empty()),
            Source::Server(_) => None,
        }
    }

    /// Get the hostname; a server source is its own host.
    pub fn host(&self) -> Option<&'a str> {
        match *self {
            Source::Server(name) => Some(name),
            Source::User { host, .. } => host.filter(|h| !h.is_empty()),
        }
    }

    /// Whether this names a server.
    #[inline]
    pub fn is_server(&self) -> bool {
        matches!(self, Source::Server(_))
    }
}

impl fmt::Display for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Server(name) => f.write_str(name),
            Source::User { nick, user, host } => {
                f.write_str(nick)?;
                if let Some(user) = user {
                    write!(f, "!{}", user)?;
                }
                if let Some(host) = host {
                    write!(f, "@{}", host)?;
                }
                Ok(())
            }
        }
    }
}
