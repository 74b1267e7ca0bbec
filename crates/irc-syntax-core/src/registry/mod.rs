//! The operation registry.
//!
//! A single table (see `table.rs`) lists every numeric reply, every named
//! command and the two catch-alls, each with its ordered typed parameters
//! and arity contract. Everything else is generated from it at compile time:
//!
//! - [`Operation`] and the [`OPERATIONS`] manifest
//! - the [`MessageCallback`] trait with no-op defaults
//! - [`MessageKind`], the owned payload built by
//!   [`MessageBuilder`](crate::MessageBuilder)
//! - the binding arms used by the dispatchers
//!
//! With the `serde` feature the manifest serializes for external tooling.

#[macro_use]
mod macros;
mod table;

pub use self::table::{MessageCallback, MessageKind, Operation, OPERATIONS};

use crate::arity::Arity;

/// What a registry row is triggered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Trigger {
    /// A three-digit reply code.
    Numeric(u16),
    /// A command name, in canonical upper case.
    Command(&'static str),
    /// No trigger of its own; reached when nothing else matches.
    Fallback,
}

/// Shape of one callback parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParamType {
    /// `&str`
    Text,
    /// `Option<&str>`
    OptionalText,
    /// `&[&str]`
    TextList,
    /// `Option<&[&str]>`
    OptionalTextList,
    /// `u16`
    Code,
}

/// One named, typed parameter of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParamSpec {
    /// Parameter name.
    pub name: &'static str,
    /// Parameter shape.
    pub ty: ParamType,
}

/// Manifest entry for one operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OperationSpec {
    /// Operation name (e.g. `Welcome`).
    pub name: &'static str,
    /// Callback method name (e.g. `on_welcome`).
    pub method: &'static str,
    /// What selects this operation.
    pub trigger: Trigger,
    /// Argument-count contract.
    pub arity: Arity,
    /// Parameters in callback order.
    pub params: &'static [ParamSpec],
}

pub(crate) fn owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}
