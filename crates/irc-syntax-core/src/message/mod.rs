//! Line tokenizing and serialization.

mod line;
/// IRCv3 tag utilities.
pub mod tags;
mod tokenizer;

pub(crate) use self::line::find_tag;
pub use self::line::{Arguments, CommandToken, TokenizedLine};
pub use self::tokenizer::tokenize;
