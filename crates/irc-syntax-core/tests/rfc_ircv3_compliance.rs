//! RFC 1459/2812 and IRCv3 compliance tests.
//!
//! This module tests specific edge cases and requirements from:
//! - RFC 1459: Internet Relay Chat Protocol
//! - RFC 2812: Internet Relay Chat: Client Protocol
//! - IRCv3 Message Tags: https://ircv3.net/specs/extensions/message-tags
//!
//! Run with: `cargo test --test rfc_ircv3_compliance`

use irc_syntax_core::{tokenize, CommandToken, Message, MessageBuilder, MessageKind, Parser, Source};

fn parse(line: &str) -> Message {
    Parser::new(MessageBuilder)
        .parse(line)
        .unwrap_or_else(|e| panic!("{:?} failed: {}", line, e))
        .expect("message builder always returns a message")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// RFC 1459/2812 MESSAGE FORMAT
// =============================================================================

mod message_format {
    use super::*;

    #[test]
    fn test_crlf_line_ending() {
        let msg = parse("PING :server\r\n");
        assert!(matches!(msg.kind, MessageKind::Ping { ref token, .. } if token == "server"));
    }

    #[test]
    fn test_lf_only_line_ending() {
        // Be lenient: accept LF-only line endings
        let msg = parse("PING :server\n");
        assert!(matches!(msg.kind, MessageKind::Ping { ref token, .. } if token == "server"));
    }

    #[test]
    fn test_no_line_ending() {
        let msg = parse("PING :server");
        assert!(matches!(msg.kind, MessageKind::Ping { ref token, .. } if token == "server"));
    }

    #[test]
    fn test_long_line_is_not_truncated() {
        // Length limits belong to the transport, not the tokenizer
        let long_text = "a".repeat(1000);
        let line = format!("PRIVMSG #ch :{}", long_text);
        let tokens = tokenize(&line).unwrap();
        assert_eq!(tokens.arguments[1], long_text);
    }

    #[test]
    fn test_empty_trailing_parameter() {
        let tokens = tokenize("PRIVMSG #channel :").unwrap();
        assert_eq!(tokens.arguments.as_slice(), &["#channel", ""]);
    }

    #[test]
    fn test_trailing_with_spaces() {
        let tokens = tokenize(":nick PRIVMSG #ch :hello world with spaces").unwrap();
        assert_eq!(tokens.arguments[1], "hello world with spaces");
    }

    #[test]
    fn test_trailing_preserves_leading_colon() {
        // Only the first colon is the trailing marker
        let tokens = tokenize("PRIVMSG #ch ::starts with colon").unwrap();
        assert_eq!(tokens.arguments[1], ":starts with colon");
    }

    #[test]
    fn test_trailing_only_colon() {
        let tokens = tokenize("PRIVMSG #ch ::").unwrap();
        assert_eq!(tokens.arguments[1], ":");
    }

    #[test]
    fn test_numeric_command() {
        let tokens = tokenize(":server 001 nick :Welcome to the network").unwrap();
        assert_eq!(tokens.command, CommandToken::Numeric(1));
        assert!(tokens.command.is_numeric());
    }

    #[test]
    fn test_more_than_fifteen_params() {
        // No argument limit is imposed
        let raw = "CMD 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 :17th trailing";
        let tokens = tokenize(raw).unwrap();
        assert_eq!(tokens.arguments.len(), 17);
        assert_eq!(tokens.arguments[16], "17th trailing");
    }

    #[test]
    fn test_multiple_consecutive_spaces() {
        let tokens = tokenize(":nick  PRIVMSG  #ch  :hello").unwrap();
        assert_eq!(tokens.prefix, Some("nick"));
        assert_eq!(tokens.command, CommandToken::Named("PRIVMSG"));
        assert_eq!(tokens.arguments.as_slice(), &["#ch", "hello"]);
    }

    #[test]
    fn test_empty_message_fails() {
        assert!(tokenize("").is_err());
    }

    #[test]
    fn test_whitespace_only_fails() {
        assert!(tokenize("   ").is_err());
    }
}

// =============================================================================
// PREFIX FORMATS
// =============================================================================

mod prefix_formats {
    use super::*;

    #[test]
    fn test_full_user_prefix() {
        let msg = parse(":nick!user@host.example.com PRIVMSG #ch :hi");
        assert_eq!(
            msg.source(),
            Some(Source::User {
                nick: "nick",
                user: Some("user"),
                host: Some("host.example.com"),
            })
        );
    }

    #[test]
    fn test_nick_at_host_prefix() {
        let msg = parse(":nick@host.example.com PRIVMSG #ch :hi");
        let source = msg.source().unwrap();
        assert_eq!(source.nick(), Some("nick"));
        assert_eq!(source.user(), None);
        assert_eq!(source.host(), Some("host.example.com"));
    }

    #[test]
    fn test_nick_only_prefix() {
        let msg = parse(":nick PRIVMSG #ch :hi");
        assert_eq!(msg.source().unwrap().nick(), Some("nick"));
    }

    #[test]
    fn test_server_prefix() {
        let msg = parse(":irc.example.com 001 nick :Welcome");
        let source = msg.source().unwrap();
        assert!(source.is_server());
        assert_eq!(source.nick(), None);
    }

    #[test]
    fn test_ipv6_host() {
        let msg = parse(":nick!user@2001:db8::1 PRIVMSG #ch :hi");
        assert_eq!(msg.source().unwrap().host(), Some("2001:db8::1"));
    }

    #[test]
    fn test_cloaked_host() {
        let msg = parse(":nick!user@user/nick/cloaked PRIVMSG #ch :hi");
        assert_eq!(msg.source().unwrap().host(), Some("user/nick/cloaked"));
    }

    #[test]
    fn test_very_long_nick() {
        let long_nick = "n".repeat(100);
        let msg = parse(&format!(":{}!user@host PRIVMSG #ch :hi", long_nick));
        assert_eq!(msg.source().unwrap().nick(), Some(long_nick.as_str()));
    }
}

// =============================================================================
// CHANNEL AND TARGET LISTS
// =============================================================================

mod target_lists {
    use super::*;

    #[test]
    fn test_standard_channel() {
        let msg = parse("JOIN #channel");
        assert_eq!(
            msg.kind,
            MessageKind::Join {
                channels: strings(&["#channel"]),
                account: None,
                realname: None,
            }
        );
    }

    #[test]
    fn test_local_channel() {
        let msg = parse("JOIN &localchan");
        assert!(matches!(msg.kind, MessageKind::Join { ref channels, .. } if channels == &["&localchan"]));
    }

    #[test]
    fn test_multiple_channels_join() {
        let msg = parse("JOIN #chan1,#chan2,#chan3");
        assert!(matches!(
            msg.kind,
            MessageKind::Join { ref channels, .. } if channels == &["#chan1", "#chan2", "#chan3"]
        ));
    }

    #[test]
    fn test_extended_join() {
        let msg = parse(":nick!u@h JOIN #chan account :Real Name");
        assert_eq!(
            msg.kind,
            MessageKind::Join {
                channels: strings(&["#chan"]),
                account: Some("account".to_string()),
                realname: Some("Real Name".to_string()),
            }
        );
    }

    #[test]
    fn test_notice_similar_to_privmsg() {
        let msg = parse(":srv NOTICE * :*** Looking up your hostname");
        assert_eq!(
            msg.kind,
            MessageKind::Notice {
                targets: strings(&["*"]),
                message: "*** Looking up your hostname".to_string(),
            }
        );
    }

    #[test]
    fn test_part_with_message() {
        let msg = parse(":nick!u@h PART #a,#b :Goodbye");
        assert_eq!(
            msg.kind,
            MessageKind::Part {
                channels: strings(&["#a", "#b"]),
                message: Some("Goodbye".to_string()),
            }
        );
    }

    #[test]
    fn test_quit_with_and_without_message() {
        assert_eq!(
            parse(":nick!u@h QUIT :Leaving").kind,
            MessageKind::Quit {
                message: Some("Leaving".to_string())
            }
        );
        assert_eq!(parse(":nick!u@h QUIT").kind, MessageKind::Quit { message: None });
    }

    #[test]
    fn test_kick_with_reason() {
        let msg = parse(":op!u@h KICK #chan victim :Behave");
        assert_eq!(
            msg.kind,
            MessageKind::Kick {
                channels: strings(&["#chan"]),
                users: strings(&["victim"]),
                comment: Some("Behave".to_string()),
            }
        );
    }

    #[test]
    fn test_mode_channel() {
        let msg = parse(":op!u@h MODE #chan +ov alice bob");
        assert_eq!(
            msg.kind,
            MessageKind::Mode {
                target: "#chan".to_string(),
                modes: Some("+ov".to_string()),
                arguments: strings(&["alice", "bob"]),
            }
        );
    }

    #[test]
    fn test_mode_query() {
        // RFC 2812 3.2.3: a channel mode query carries only the target
        let msg = parse("MODE #chan");
        assert_eq!(
            msg.kind,
            MessageKind::Mode {
                target: "#chan".to_string(),
                modes: None,
                arguments: Vec::new(),
            }
        );
    }
}

// =============================================================================
// UTF-8 AND CONTENT
// =============================================================================

mod utf8 {
    use super::*;

    #[test]
    fn test_utf8_in_message() {
        let tokens = tokenize(":nick PRIVMSG #ch :Hello 世界 🌍").unwrap();
        assert_eq!(tokens.arguments[1], "Hello 世界 🌍");
    }

    #[test]
    fn test_utf8_in_nick() {
        let msg = parse(":Ñoño!user@host PRIVMSG #ch :hi");
        assert_eq!(msg.source().unwrap().nick(), Some("Ñoño"));
    }

    #[test]
    fn test_utf8_in_tag_value() {
        let msg = parse("@label=föö :nick PRIVMSG #ch :hi");
        assert_eq!(msg.tags, strings(&["label=föö"]));
    }

    #[test]
    fn test_format_codes_pass_through() {
        let text = "\x02bold\x02 \x034,5color\x03 \x01ACTION waves\x01";
        let line = format!("PRIVMSG #ch :{}", text);
        let tokens = tokenize(&line).unwrap();
        assert_eq!(tokens.arguments[1], text);
    }
}

// =============================================================================
// ROUNDTRIP SERIALIZATION
// =============================================================================

mod roundtrip {
    use super::*;

    fn assert_roundtrip(line: &str) {
        let tokens = tokenize(line).unwrap();
        assert_eq!(tokens.to_string(), line);
    }

    #[test]
    fn test_roundtrip_simple() {
        assert_roundtrip("PING :irc.example.com");
    }

    #[test]
    fn test_roundtrip_with_prefix() {
        assert_roundtrip(":nick!user@host PRIVMSG #channel :Hello, world!");
    }

    #[test]
    fn test_roundtrip_with_tags() {
        assert_roundtrip("@time=2023-01-01T00:00:00Z;msgid=abc :nick PRIVMSG #ch :hi there");
    }

    #[test]
    fn test_roundtrip_empty_trailing() {
        assert_roundtrip("PRIVMSG #channel :");
    }

    #[test]
    fn test_roundtrip_numeric() {
        assert_roundtrip(":server 005 nick CHANTYPES=# :are supported by this server");
    }

    #[test]
    fn test_roundtrip_with_escaped_tags() {
        assert_roundtrip("@key=hello\\sworld\\:x :nick PRIVMSG #ch :hi there");
    }

    #[test]
    fn test_middle_argument_normalized() {
        // A trailing without spaces serializes as a middle argument
        let tokens = tokenize("PRIVMSG #ch :hi").unwrap();
        assert_eq!(tokens.to_string(), "PRIVMSG #ch hi");
    }
}

// =============================================================================
// IRCv3 EXTENSIONS
// =============================================================================

mod ircv3 {
    use super::*;

    #[test]
    fn test_cap_ls() {
        let msg = parse(":irc.example.com CAP * LS :multi-prefix sasl message-tags");
        assert_eq!(
            msg.kind,
            MessageKind::Cap {
                target: "*".to_string(),
                subcommand: "LS".to_string(),
                arguments: strings(&["multi-prefix sasl message-tags"]),
            }
        );
    }

    #[test]
    fn test_batch_messages() {
        let start = parse(":srv BATCH +ref netsplit irc.a irc.b");
        assert_eq!(
            start.kind,
            MessageKind::Batch {
                reference: "+ref".to_string(),
                arguments: strings(&["netsplit", "irc.a", "irc.b"]),
            }
        );

        let inner = parse("@batch=ref :nick!u@h QUIT :irc.a irc.b");
        assert_eq!(inner.tags, strings(&["batch=ref"]));

        let end = parse(":srv BATCH -ref");
        assert_eq!(
            end.kind,
            MessageKind::Batch {
                reference: "-ref".to_string(),
                arguments: Vec::new(),
            }
        );
    }

    #[test]
    fn test_tagmsg() {
        let msg = parse("@+typing=active :nick!u@h TAGMSG #chan");
        assert_eq!(
            msg.kind,
            MessageKind::TagMsg {
                target: "#chan".to_string()
            }
        );
    }
}
