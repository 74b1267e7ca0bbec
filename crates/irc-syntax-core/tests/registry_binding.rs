//! Every registry row binds every argument its contract admits.
//!
//! Feeds each recognized operation distinct arguments at the edges of its
//! contract and checks that each one surfaces in the built message.

use irc_syntax_core::{
    dispatch, Arity, CommandCase, Context, Message, MessageBuilder, Operation, Trigger,
    OPERATIONS,
};

fn arguments(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("arg{:02}", i)).collect()
}

fn dispatch_spec(trigger: Trigger, args: &[&str]) -> Option<Message> {
    let ctx = Context::default();
    let result = match trigger {
        Trigger::Numeric(code) => dispatch::numeric(&ctx, code, args, &mut MessageBuilder),
        Trigger::Command(name) => {
            dispatch::named(&ctx, name, args, &mut MessageBuilder, CommandCase::Sensitive)
        }
        Trigger::Fallback => return None,
    };
    result.unwrap_or_else(|err| panic!("{:?} rejected {:?}: {}", trigger, args, err))
}

fn counts(arity: Arity) -> Vec<usize> {
    match arity {
        Arity::Exact(n) => vec![n],
        Arity::AtLeast(n) => vec![n, n + 3],
        Arity::Between(min, max) => (min..=max).collect(),
        Arity::Any => vec![0, 1, 4],
    }
}

#[test]
fn every_argument_is_bound() {
    for spec in OPERATIONS {
        for count in counts(spec.arity) {
            let owned = arguments(count);
            let args: Vec<&str> = owned.iter().map(String::as_str).collect();

            let Some(message) = dispatch_spec(spec.trigger, &args) else {
                continue;
            };
            assert_eq!(message.operation().name(), spec.name);

            let rendered = format!("{:?}", message.kind);
            for arg in &args {
                assert!(
                    rendered.contains(arg),
                    "{} with {} arguments dropped {}: {}",
                    spec.name,
                    count,
                    arg,
                    rendered
                );
            }
        }
    }
}

#[test]
fn contracts_reject_counts_outside_their_bounds() {
    for spec in OPERATIONS {
        if spec.trigger == Trigger::Fallback {
            continue;
        }
        let ctx = Context::default();
        let probe = |count: usize| {
            let owned = arguments(count);
            let args: Vec<&str> = owned.iter().map(String::as_str).collect();
            match spec.trigger {
                Trigger::Numeric(code) => {
                    dispatch::numeric(&ctx, code, &args, &mut MessageBuilder).is_ok()
                }
                Trigger::Command(name) => dispatch::named(
                    &ctx,
                    name,
                    &args,
                    &mut MessageBuilder,
                    CommandCase::Sensitive,
                )
                .is_ok(),
                Trigger::Fallback => unreachable!(),
            }
        };

        let min = spec.arity.min();
        if min > 0 {
            assert!(!probe(min - 1), "{} accepted {} arguments", spec.name, min - 1);
        }
        if let Some(max) = spec.arity.max() {
            assert!(!probe(max + 1), "{} accepted {} arguments", spec.name, max + 1);
        }
    }
}

#[test]
fn lookups_agree_with_manifest() {
    for operation in Operation::ALL {
        match operation.spec().trigger {
            Trigger::Numeric(code) => assert_eq!(Operation::from_code(code), Some(*operation)),
            Trigger::Command(name) => {
                assert_eq!(Operation::from_command(name), Some(*operation))
            }
            Trigger::Fallback => {}
        }
    }
}
