use tracing::debug;

use super::invoke;
use crate::callback::MessageCallback;
use crate::context::Context;
use crate::error::Result;
use crate::registry::Operation;

/// Dispatch a numeric reply code.
///
/// `arguments` excludes the target. Unrecognized codes go to
/// [`on_unknown_code`](MessageCallback::on_unknown_code) with the arguments
/// untouched and never fail.
pub fn numeric<C: MessageCallback + ?Sized>(
    ctx: &Context<'_>,
    code: u16,
    arguments: &[&str],
    callback: &mut C,
) -> Result<C::Output> {
    match Operation::from_code(code) {
        Some(operation) => invoke(operation, ctx, arguments, callback),
        None => {
            debug!(code, arguments = arguments.len(), "unrecognized numeric");
            Ok(callback.on_unknown_code(ctx, code, arguments))
        }
    }
}
