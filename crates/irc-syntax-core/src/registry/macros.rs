//! Code generation for the operation table.
//!
//! Each row kind maps to a borrowed parameter type (what a callback
//! receives), an owned field type (what a [`Message`](crate::Message)
//! stores) and a binder call.
//!
//! | kind      | borrowed           | owned                 | binder             |
//! |-----------|--------------------|-----------------------|--------------------|
//! | `text`    | `&str`             | `String`              | `text()`           |
//! | `opt`     | `Option<&str>`     | `Option<String>`      | `optional()`       |
//! | `last`    | `&str`             | `String`              | `last()`           |
//! | `rest`    | `&[&str]`          | `Vec<String>`         | `rest()`           |
//! | `list`    | `&[&str]`          | `Vec<String>`         | `list()`           |
//! | `optlist` | `Option<&[&str]>`  | `Option<Vec<String>>` | `optional_list()`  |
//! | `code`    | `u16`              | `u16`                 | (catch-all only)   |

macro_rules! borrowed_param {
    (text) => { &str };
    (opt) => { Option<&str> };
    (last) => { &str };
    (rest) => { &[&str] };
    (list) => { &[&str] };
    (optlist) => { Option<&[&str]> };
    (code) => { u16 };
}

macro_rules! owned_param {
    (text) => { String };
    (opt) => { Option<String> };
    (last) => { String };
    (rest) => { Vec<String> };
    (list) => { Vec<String> };
    (optlist) => { Option<Vec<String>> };
    (code) => { u16 };
}

macro_rules! into_owned_param {
    (text, $value:expr) => { $value.to_owned() };
    (opt, $value:expr) => { $value.map(str::to_owned) };
    (last, $value:expr) => { $value.to_owned() };
    (rest, $value:expr) => { $crate::registry::owned_list($value) };
    (list, $value:expr) => { $crate::registry::owned_list($value) };
    (optlist, $value:expr) => { $value.map($crate::registry::owned_list) };
    (code, $value:expr) => { $value };
}

macro_rules! param_type {
    (text) => { $crate::registry::ParamType::Text };
    (opt) => { $crate::registry::ParamType::OptionalText };
    (last) => { $crate::registry::ParamType::Text };
    (rest) => { $crate::registry::ParamType::TextList };
    (list) => { $crate::registry::ParamType::TextList };
    (optlist) => { $crate::registry::ParamType::OptionalTextList };
    (code) => { $crate::registry::ParamType::Code };
}

macro_rules! bind_param {
    ($binder:ident, text) => { $binder.text() };
    ($binder:ident, opt) => { $binder.optional() };
    ($binder:ident, last) => { $binder.last() };
    ($binder:ident, rest) => { $binder.rest() };
    ($binder:ident, list) => { &$binder.list() };
    ($binder:ident, optlist) => { $binder.optional_list().as_deref() };
}

macro_rules! trailing_slot {
    (last) => { 1 };
    ($other:ident) => { 0 };
}

/// Generate the operation set from the registry table.
///
/// Produces [`Operation`](crate::Operation), the
/// [`OPERATIONS`](crate::OPERATIONS) manifest, the
/// [`MessageCallback`](crate::MessageCallback) trait with no-op defaults,
/// [`MessageKind`](crate::MessageKind), the
/// [`MessageBuilder`](crate::MessageBuilder) implementation and the binding
/// arms used by the dispatchers.
macro_rules! declare_operations {
    (
        numeric {
            $(
                $(#[$ndoc:meta])*
                $code:literal => $nvariant:ident, $nmethod:ident, $narity:expr,
                    ($($nparam:ident: $nkind:ident),* $(,)?);
            )*
        }
        named {
            $(
                $(#[$cdoc:meta])*
                $command:literal => $cvariant:ident, $cmethod:ident, $carity:expr,
                    ($($cparam:ident: $ckind:ident),* $(,)?);
            )*
        }
        fallback {
            $(
                $(#[$fdoc:meta])*
                $fvariant:ident, $fmethod:ident,
                    ($($fparam:ident: $fkind:ident),* $(,)?);
            )*
        }
    ) => {
        /// Every operation a line can be dispatched to.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Operation {
            $( $(#[$ndoc])* $nvariant, )*
            $( $(#[$cdoc])* $cvariant, )*
            $( $(#[$fdoc])* $fvariant, )*
        }

        /// Manifest of every operation, in declaration order.
        pub static OPERATIONS: &[$crate::registry::OperationSpec] = &[
            $(
                $crate::registry::OperationSpec {
                    name: stringify!($nvariant),
                    method: stringify!($nmethod),
                    trigger: $crate::registry::Trigger::Numeric($code),
                    arity: $narity,
                    params: &[$(
                        $crate::registry::ParamSpec {
                            name: stringify!($nparam),
                            ty: param_type!($nkind),
                        },
                    )*],
                },
            )*
            $(
                $crate::registry::OperationSpec {
                    name: stringify!($cvariant),
                    method: stringify!($cmethod),
                    trigger: $crate::registry::Trigger::Command($command),
                    arity: $carity,
                    params: &[$(
                        $crate::registry::ParamSpec {
                            name: stringify!($cparam),
                            ty: param_type!($ckind),
                        },
                    )*],
                },
            )*
            $(
                $crate::registry::OperationSpec {
                    name: stringify!($fvariant),
                    method: stringify!($fmethod),
                    trigger: $crate::registry::Trigger::Fallback,
                    arity: $crate::arity::Arity::Any,
                    params: &[$(
                        $crate::registry::ParamSpec {
                            name: stringify!($fparam),
                            ty: param_type!($fkind),
                        },
                    )*],
                },
            )*
        ];

        impl Operation {
            /// Every operation, in declaration order.
            pub const ALL: &'static [Operation] = &[
                $( Operation::$nvariant, )*
                $( Operation::$cvariant, )*
                $( Operation::$fvariant, )*
            ];

            /// The operation bound to a numeric reply code.
            pub fn from_code(code: u16) -> Option<Self> {
                match code {
                    $( $code => Some(Operation::$nvariant), )*
                    _ => None,
                }
            }

            /// The operation bound to a command name, matched exactly.
            pub fn from_command(command: &str) -> Option<Self> {
                match command {
                    $( $command => Some(Operation::$cvariant), )*
                    _ => None,
                }
            }

            /// Manifest entry for this operation.
            pub fn spec(self) -> &'static $crate::registry::OperationSpec {
                &OPERATIONS[self as usize]
            }

            /// Operation name, as written in the registry.
            pub fn name(self) -> &'static str {
                self.spec().name
            }

            /// Declared arity contract.
            pub fn arity(self) -> $crate::arity::Arity {
                self.spec().arity
            }

            /// Bind validated arguments and invoke the matching callback method.
            #[allow(clippy::identity_op)]
            pub(crate) fn invoke<C: MessageCallback + ?Sized>(
                self,
                ctx: &$crate::context::Context<'_>,
                arguments: $crate::arity::ValidatedArgs<'_>,
                callback: &mut C,
            ) -> C::Output {
                match self {
                    $(
                        Operation::$nvariant => {
                            #[allow(unused_mut, unused_variables)]
                            let mut binder = $crate::bind::ArgumentBinder::new(
                                arguments,
                                0 $(+ trailing_slot!($nkind))*,
                            );
                            callback.$nmethod(ctx, $(bind_param!(binder, $nkind)),*)
                        }
                    )*
                    $(
                        Operation::$cvariant => {
                            #[allow(unused_mut, unused_variables)]
                            let mut binder = $crate::bind::ArgumentBinder::new(
                                arguments,
                                0 $(+ trailing_slot!($ckind))*,
                            );
                            callback.$cmethod(ctx, $(bind_param!(binder, $ckind)),*)
                        }
                    )*
                    // Catch-alls carry the raw command, which only the dispatchers hold.
                    $( Operation::$fvariant )|* => callback.unhandled(ctx, self),
                }
            }
        }

        impl std::fmt::Display for Operation {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        /// Handlers for every operation.
        ///
        /// Every method defaults to [`unhandled`](MessageCallback::unhandled),
        /// which defaults to `Self::Output::default()`. Implementors override
        /// only the operations they care about.
        #[allow(clippy::too_many_arguments)]
        pub trait MessageCallback {
            /// Value produced for each dispatched line.
            type Output: Default;

            /// Called by every operation method that is not overridden.
            #[allow(unused_variables)]
            fn unhandled(
                &mut self,
                ctx: &$crate::context::Context<'_>,
                operation: Operation,
            ) -> Self::Output {
                Self::Output::default()
            }

            $(
                $(#[$ndoc])*
                #[allow(unused_variables)]
                fn $nmethod(
                    &mut self,
                    ctx: &$crate::context::Context<'_>,
                    $($nparam: borrowed_param!($nkind)),*
                ) -> Self::Output {
                    self.unhandled(ctx, Operation::$nvariant)
                }
            )*

            $(
                $(#[$cdoc])*
                #[allow(unused_variables)]
                fn $cmethod(
                    &mut self,
                    ctx: &$crate::context::Context<'_>,
                    $($cparam: borrowed_param!($ckind)),*
                ) -> Self::Output {
                    self.unhandled(ctx, Operation::$cvariant)
                }
            )*

            $(
                $(#[$fdoc])*
                #[allow(unused_variables)]
                fn $fmethod(
                    &mut self,
                    ctx: &$crate::context::Context<'_>,
                    $($fparam: borrowed_param!($fkind)),*
                ) -> Self::Output {
                    self.unhandled(ctx, Operation::$fvariant)
                }
            )*
        }

        /// Owned payload of a [`Message`](crate::Message), one variant per operation.
        #[derive(Clone, Debug, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(tag = "operation"))]
        #[allow(missing_docs)]
        pub enum MessageKind {
            $( $(#[$ndoc])* $nvariant { $($nparam: owned_param!($nkind)),* }, )*
            $( $(#[$cdoc])* $cvariant { $($cparam: owned_param!($ckind)),* }, )*
            $( $(#[$fdoc])* $fvariant { $($fparam: owned_param!($fkind)),* }, )*
        }

        impl MessageKind {
            /// The operation this payload was produced by.
            pub fn operation(&self) -> Operation {
                match self {
                    $( MessageKind::$nvariant { .. } => Operation::$nvariant, )*
                    $( MessageKind::$cvariant { .. } => Operation::$cvariant, )*
                    $( MessageKind::$fvariant { .. } => Operation::$fvariant, )*
                }
            }
        }

        #[allow(clippy::redundant_field_names, clippy::too_many_arguments)]
        impl MessageCallback for $crate::callback::MessageBuilder {
            type Output = Option<$crate::callback::Message>;

            $(
                fn $nmethod(
                    &mut self,
                    ctx: &$crate::context::Context<'_>,
                    $($nparam: borrowed_param!($nkind)),*
                ) -> Self::Output {
                    Some($crate::callback::Message::new(ctx, MessageKind::$nvariant {
                        $($nparam: into_owned_param!($nkind, $nparam)),*
                    }))
                }
            )*

            $(
                fn $cmethod(
                    &mut self,
                    ctx: &$crate::context::Context<'_>,
                    $($cparam: borrowed_param!($ckind)),*
                ) -> Self::Output {
                    Some($crate::callback::Message::new(ctx, MessageKind::$cvariant {
                        $($cparam: into_owned_param!($ckind, $cparam)),*
                    }))
                }
            )*

            $(
                fn $fmethod(
                    &mut self,
                    ctx: &$crate::context::Context<'_>,
                    $($fparam: borrowed_param!($fkind)),*
                ) -> Self::Output {
                    Some($crate::callback::Message::new(ctx, MessageKind::$fvariant {
                        $($fparam: into_owned_param!($fkind, $fparam)),*
                    }))
                }
            )*
        }
    };
}
