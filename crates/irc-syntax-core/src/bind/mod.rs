//! Argument binding.
//!
//! [`ArgumentBinder`] turns a [`ValidatedArgs`] into the typed parameters of
//! one operation. Parameters are taken from the front in declaration order,
//! except `last` parameters, which are taken from the back. The number of
//! `last` parameters is reserved up front so that optional and rest
//! parameters never consume the trailing slot.
//!
//! The binder never checks arity. It can only be built from a value that
//! already passed [`Arity::validate`](crate::Arity::validate), and when asked
//! for more than remains it falls back to empty values instead of panicking.

mod source;

pub use self::source::Source;

use smallvec::SmallVec;

use crate::arity::ValidatedArgs;

/// Items of a comma-separated list argument.
pub type ListItems<'a> = SmallVec<[&'a str; 4]>;

/// Cursor over a validated argument list.
#[derive(Debug)]
pub struct ArgumentBinder<'a> {
    arguments: &'a [&'a str],
    front: usize,
    back: usize,
    reserved: usize,
}

impl<'a> ArgumentBinder<'a> {
    /// Start binding, reserving `trailing` slots at the back for `last()`.
    pub fn new(arguments: ValidatedArgs<'a>, trailing: usize) -> Self {
        let arguments = arguments.as_slice();
        Self {
            arguments,
            front: 0,
            back: arguments.len(),
            reserved: trailing,
        }
    }

    fn limit(&self) -> usize {
        self.back.saturating_sub(self.reserved).max(self.front)
    }

    /// Next leading argument, or `""` if none remains.
    pub fn text(&mut self) -> &'a str {
        self.optional().unwrap_or_default()
    }

    /// Next leading argument if one remains ahead of the reserved slots.
    pub fn optional(&mut self) -> Option<&'a str> {
        if self.front >= self.limit() {
            return None;
        }
        let argument = self.arguments.get(self.front).copied()?;
        self.front += 1;
        Some(argument)
    }

    /// The final unbound argument.
    pub fn last(&mut self) -> &'a str {
        self.reserved = self.reserved.saturating_sub(1);
        if self.back <= self.front {
            return "";
        }
        self.back -= 1;
        self.arguments.get(self.back).copied().unwrap_or_default()
    }

    /// Every leading argument not otherwise taken.
    pub fn rest(&mut self) -> &'a [&'a str] {
        let limit = self.limit();
        let rest = self.arguments.get(self.front..limit).unwrap_or_default();
        self.front = limit;
        rest
    }

    /// Next leading argument split as a comma list.
    pub fn list(&mut self) -> ListItems<'a> {
        split_list(self.text())
    }

    /// Next leading argument split as a comma list, if one remains.
    pub fn optional_list(&mut self) -> Option<ListItems<'a>> {
        self.optional().map(split_list)
    }

    /// Arguments not yet bound.
    pub fn remaining(&self) -> usize {
        self.back - self.front
    }
}

/// Split a comma-separated argument, dropping empty items.
pub fn split_list(argument: &str) -> ListItems<'_> {
    argument.split(',').filter(|item| !item.is_empty()).collect()
}
