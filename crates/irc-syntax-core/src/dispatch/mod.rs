//! Dispatch of tokenized lines to operations.
//!
//! [`line`] routes a [`TokenizedLine`] to the [`numeric`] or [`named`]
//! dispatcher. Both check the registry arity contract before binding, and
//! both forward anything they do not recognize to a catch-all.

mod named;
mod numeric;

pub use self::named::named;
pub use self::numeric::numeric;

use tracing::debug;

use crate::callback::MessageCallback;
use crate::config::CommandCase;
use crate::context::Context;
use crate::error::{ParseError, Result};
use crate::message::{CommandToken, TokenizedLine};
use crate::registry::Operation;

/// Dispatch a tokenized line.
///
/// A numeric reply's first argument becomes the context target and the
/// remaining arguments are dispatched. Named commands dispatch every
/// argument with no target.
pub fn line<C: MessageCallback + ?Sized>(
    tokens: &TokenizedLine<'_>,
    callback: &mut C,
    case: CommandCase,
) -> Result<C::Output> {
    match tokens.command {
        CommandToken::Numeric(code) => {
            let (target, arguments) = match tokens.arguments.split_first() {
                Some((target, rest)) => (Some(*target), rest),
                None => (None, &[][..]),
            };
            let ctx = Context::new(&tokens.tags, tokens.prefix, target);
            numeric(&ctx, code, arguments, callback)
        }
        CommandToken::Named(name) => {
            let ctx = Context::new(&tokens.tags, tokens.prefix, None);
            named(&ctx, name, &tokens.arguments, callback, case)
        }
    }
}

/// Validate, bind and invoke a recognized operation.
fn invoke<C: MessageCallback + ?Sized>(
    operation: Operation,
    ctx: &Context<'_>,
    arguments: &[&str],
    callback: &mut C,
) -> Result<C::Output> {
    let expected = operation.arity();
    let validated = expected.validate(arguments).map_err(|violation| {
        debug!(
            operation = %operation,
            expected = %expected,
            got = arguments.len(),
            "{}",
            violation
        );
        ParseError::Arity {
            operation,
            violation,
            expected,
            got: arguments.len(),
        }
    })?;
    Ok(operation.invoke(ctx, validated, callback))
}
