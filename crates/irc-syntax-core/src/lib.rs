//! # irc-syntax-core
//!
//! Tokenizer and arity-checked dispatch for IRC-style protocol lines.
//!
//! ## Features
//!
//! - Single-pass, zero-copy tokenizing of tags, prefix, command and arguments
//! - Lexical classification of three-digit numeric replies
//! - One registry table driving the callback trait, manifest and binding
//! - Arity checked before any argument is bound
//! - Catch-alls for unrecognized codes and commands, never errors
//! - Optional `serde` support for the manifest and plain-data messages
//!
//! ## Quick Start
//!
//! ```rust
//! use irc_syntax_core::{Context, MessageCallback, Parser};
//!
//! #[derive(Default)]
//! struct Names(Vec<String>);
//!
//! impl MessageCallback for Names {
//!     type Output = ();
//!
//!     fn on_nam_reply(&mut self, _ctx: &Context<'_>, arguments: &[&str]) {
//!         if let Some(names) = arguments.last() {
//!             self.0.extend(names.split(' ').map(str::to_owned));
//!         }
//!     }
//! }
//!
//! let mut parser = Parser::new(Names::default());
//! parser.parse(":irc.example.com 353 me = #rust :alice bob").unwrap();
//! parser.parse(":irc.example.com 366 me #rust :End of /NAMES list").unwrap();
//! assert_eq!(parser.callback().0, ["alice", "bob"]);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod arity;
pub mod bind;
pub mod callback;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod parser;
pub mod registry;

pub use self::arity::{Arity, ValidatedArgs};
pub use self::bind::{split_list, ArgumentBinder, Source};
pub use self::callback::{Message, MessageBuilder, NoopCallback};
pub use self::config::{CommandCase, ParserConfig};
pub use self::context::Context;
pub use self::error::{ArityViolation, ErrorCategory, ParseError, Result};
pub use self::message::{tokenize, CommandToken, TokenizedLine};
pub use self::parser::Parser;
pub use self::registry::{
    MessageCallback, MessageKind, Operation, OperationSpec, ParamSpec, ParamType, Trigger,
    OPERATIONS,
};
