//! End-to-end behavior of the parser facade.

use irc_syntax_core::{
    CommandCase, Context, MessageBuilder, MessageCallback, MessageKind, Parser, ParserConfig,
    Source,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn named_commands_get_all_arguments() {
    let mut parser = Parser::new(MessageBuilder);
    let message = parser
        .parse("@msgid=42 :alice!a@example.com PRIVMSG #rust,bob :hello there")
        .unwrap()
        .unwrap();

    assert_eq!(message.tags, strings(&["msgid=42"]));
    assert_eq!(message.target, None);
    assert_eq!(
        message.source(),
        Some(Source::User {
            nick: "alice",
            user: Some("a"),
            host: Some("example.com"),
        })
    );
    assert_eq!(
        message.kind,
        MessageKind::Privmsg {
            targets: strings(&["#rust", "bob"]),
            message: "hello there".to_string(),
        }
    );
}

#[test]
fn case_sensitivity_is_configurable() {
    let mut lenient = Parser::new(MessageBuilder);
    let message = lenient.parse("nick newname").unwrap().unwrap();
    assert_eq!(
        message.kind,
        MessageKind::Nick {
            nickname: "newname".to_string()
        }
    );

    let mut strict = Parser::with_config(
        MessageBuilder,
        ParserConfig {
            command_case: CommandCase::Sensitive,
            ..ParserConfig::default()
        },
    );
    let message = strict.parse("nick newname").unwrap().unwrap();
    assert_eq!(
        message.kind,
        MessageKind::UnknownCommand {
            command: "nick".to_string(),
            arguments: strings(&["newname"]),
        }
    );
}

#[test]
fn parsing_is_idempotent() {
    let mut parser = Parser::new(MessageBuilder);
    let line = "@batch=x;time=t :irc.example.com 353 me = #chan :@op +v plain";
    let first = parser.parse(line).unwrap();
    let second = parser.parse(line).unwrap();
    assert_eq!(first, second);
}

#[test]
fn context_is_fresh_per_line() {
    struct Tags(Vec<Option<String>>);

    impl MessageCallback for Tags {
        type Output = ();

        fn unhandled(&mut self, ctx: &Context<'_>, _operation: irc_syntax_core::Operation) {
            self.0.push(ctx.tag("label").map(|v| v.into_owned()));
        }
    }

    let mut parser = Parser::new(Tags(Vec::new()));
    parser.parse("@label=a\\sb PING x").unwrap();
    parser.parse("PING y").unwrap();
    parser.parse("@label PING z").unwrap();

    assert_eq!(
        parser.into_callback().0,
        vec![Some("a b".to_string()), None, Some(String::new())]
    );
}

#[test]
fn standard_replies_and_batches() {
    let mut parser = Parser::new(MessageBuilder);

    let message = parser
        .parse(":srv FAIL ACCOUNT REG_INVALID_CALLBACK mailto :Email required")
        .unwrap()
        .unwrap();
    assert_eq!(
        message.kind,
        MessageKind::Fail {
            command: "ACCOUNT".to_string(),
            code: "REG_INVALID_CALLBACK".to_string(),
            context: strings(&["mailto"]),
            description: "Email required".to_string(),
        }
    );

    let message = parser
        .parse(":srv BATCH +abc chathistory #rust")
        .unwrap()
        .unwrap();
    assert_eq!(
        message.kind,
        MessageKind::Batch {
            reference: "+abc".to_string(),
            arguments: strings(&["chathistory", "#rust"]),
        }
    );
}

#[test]
fn optional_numeric_fields() {
    let mut parser = Parser::new(MessageBuilder);

    let message = parser
        .parse(":srv 265 me :Current local users: 3, max: 5")
        .unwrap()
        .unwrap();
    assert_eq!(
        message.kind,
        MessageKind::LocalUsers {
            current: None,
            max: None,
            message: "Current local users: 3, max: 5".to_string(),
        }
    );

    let message = parser
        .parse(":srv 265 me 3 5 :Current local users: 3, max: 5")
        .unwrap()
        .unwrap();
    assert_eq!(
        message.kind,
        MessageKind::LocalUsers {
            current: Some("3".to_string()),
            max: Some("5".to_string()),
            message: "Current local users: 3, max: 5".to_string(),
        }
    );
}

#[test]
fn list_numerics_split_targets() {
    let mut parser = Parser::new(MessageBuilder);
    let message = parser
        .parse(":srv 730 me :alice!a@h,bob!b@h")
        .unwrap()
        .unwrap();
    assert_eq!(
        message.kind,
        MessageKind::MonOnline {
            targets: strings(&["alice!a@h", "bob!b@h"]),
        }
    );
}
