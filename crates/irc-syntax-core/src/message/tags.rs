//! IRCv3 message tag helpers.
//!
//! Tags are carried raw through the tokenizer and dispatchers; these helpers
//! split an entry and unescape its value on demand.

use std::borrow::Cow;

/// Split a raw tag entry into key and raw value.
///
/// `key` and `key=` both yield an empty value.
pub fn split_tag(entry: &str) -> (&str, &str) {
    entry.split_once('=').unwrap_or((entry, ""))
}

/// Unescape a tag value from wire format.
///
/// Borrows when the value holds no escapes.
pub fn unescape_tag_value(value: &str) -> Cow<'_, str> {
    if !value.contains('\\') {
        return Cow::Borrowed(value);
    }

    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        let r = if c == '\\' {
            match iter.next() {
                Some(':') => ';',
                Some('s') => ' ',
                Some('\\') => '\\',
                Some('r') => '\r',
                Some('n') => '\n',
                Some(c) => c,
                None => break,
            }
        } else {
            c
        };
        unescaped.push(r);
    }
    Cow::Owned(unescaped)
}
