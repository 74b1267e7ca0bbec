//! Ready-made operation sets.
//!
//! The [`MessageCallback`] trait itself is generated from the registry table.

pub use crate::registry::{MessageCallback, MessageKind};

use crate::bind::Source;
use crate::context::Context;
use crate::registry::Operation;

/// Callback that ignores every operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopCallback;

impl MessageCallback for NoopCallback {
    type Output = ();
}

/// Callback that turns every operation into a plain-data [`Message`].
///
/// Every method returns `Some`; `None` is only the trait-level default.
#[derive(Clone, Copy, Debug, Default)]
pub struct MessageBuilder;

/// Owned, plain-data form of a dispatched line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Raw tag entries.
    pub tags: Vec<String>,
    /// Prefix without its leading `:`.
    pub prefix: Option<String>,
    /// Target of a numeric reply.
    pub target: Option<String>,
    /// Operation-specific fields.
    pub kind: MessageKind,
}

impl Message {
    pub(crate) fn new(ctx: &Context<'_>, kind: MessageKind) -> Self {
        Self {
            tags: ctx.tags().iter().map(|tag| (*tag).to_owned()).collect(),
            prefix: ctx.prefix().map(str::to_owned),
            target: ctx.target().map(str::to_owned),
            kind,
        }
    }

    /// The operation this message was produced by.
    pub fn operation(&self) -> Operation {
        self.kind.operation()
    }

    /// The prefix split into nick/user/host or a server name.
    pub fn source(&self) -> Option<Source<'_>> {
        self.prefix.as_deref().map(Source::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        welcomes: usize,
        unhandled: Vec<Operation>,
    }

    impl MessageCallback for Counter {
        type Output = bool;

        fn unhandled(&mut self, _ctx: &Context<'_>, operation: Operation) -> bool {
            self.unhandled.push(operation);
            false
        }

        fn on_welcome(&mut self, _ctx: &Context<'_>, _message: &str) -> bool {
            self.welcomes += 1;
            true
        }
    }

    #[test]
    fn test_defaults_route_through_unhandled() {
        let mut counter = Counter {
            welcomes: 0,
            unhandled: Vec::new(),
        };
        let ctx = Context::default();

        assert!(counter.on_welcome(&ctx, "hi"));
        assert!(!counter.on_end_of_names(&ctx, "#c", "End"));
        assert!(!counter.on_unknown_code(&ctx, 999, &[]));

        assert_eq!(counter.welcomes, 1);
        assert_eq!(
            counter.unhandled,
            vec![Operation::EndOfNames, Operation::UnknownCode]
        );
    }

    #[test]
    fn test_noop_returns_unit() {
        let ctx = Context::default();
        NoopCallback.on_privmsg(&ctx, &["#c"], "hi");
        NoopCallback.on_unknown_command(&ctx, "FOO", &["a"]);
    }

    #[test]
    fn test_builder_copies_context() {
        let tags = ["time=now"];
        let ctx = Context::new(&tags, Some("irc.example.com"), Some("me"));
        let message = MessageBuilder.on_welcome(&ctx, "Welcome").unwrap();

        assert_eq!(message.tags, vec!["time=now".to_string()]);
        assert_eq!(message.prefix.as_deref(), Some("irc.example.com"));
        assert_eq!(message.target.as_deref(), Some("me"));
        assert_eq!(message.operation(), Operation::Welcome);
        assert_eq!(message.source(), Some(Source::Server("irc.example.com")));
        assert_eq!(
            message.kind,
            MessageKind::Welcome {
                message: "Welcome".to_string()
            }
        );
    }

    #[test]
    fn test_builder_owns_lists() {
        let ctx = Context::default();
        let message = MessageBuilder
            .on_join(&ctx, &["#a", "#b"], Some("account"), None)
            .unwrap();
        assert_eq!(
            message.kind,
            MessageKind::Join {
                channels: vec!["#a".to_string(), "#b".to_string()],
                account: Some("account".to_string()),
                realname: None,
            }
        );
    }
}
