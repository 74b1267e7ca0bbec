use std::borrow::Cow;

use tracing::debug;

use super::invoke;
use crate::callback::MessageCallback;
use crate::config::CommandCase;
use crate::context::Context;
use crate::error::Result;
use crate::registry::Operation;

/// Dispatch a named command.
///
/// Unrecognized names go to
/// [`on_unknown_command`](MessageCallback::on_unknown_command) with the name
/// as received and the arguments untouched, and never fail.
pub fn named<C: MessageCallback + ?Sized>(
    ctx: &Context<'_>,
    name: &str,
    arguments: &[&str],
    callback: &mut C,
    case: CommandCase,
) -> Result<C::Output> {
    match lookup(name, case) {
        Some(operation) => invoke(operation, ctx, arguments, callback),
        None => {
            debug!(command = name, arguments = arguments.len(), "unrecognized command");
            Ok(callback.on_unknown_command(ctx, name, arguments))
        }
    }
}

fn lookup(name: &str, case: CommandCase) -> Option<Operation> {
    let canonical = match case {
        CommandCase::Insensitive if name.bytes().any(|b| b.is_ascii_lowercase()) => {
            Cow::Owned(name.to_ascii_uppercase())
        }
        _ => Cow::Borrowed(name),
    };
    Operation::from_command(&canonical)
}
