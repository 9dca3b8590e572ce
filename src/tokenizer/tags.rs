//! Opt-in interpretation of raw IRCv3 tags.
//!
//! The tokenizer hands tags over exactly as they appeared on the wire. Callers
//! that want `key=value` pairs with escapes resolved use [`split_tag`].

use std::borrow::Cow;

/// A tag split into key and (unescaped) value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Tag key, including any `+` client prefix or vendor namespace.
    pub key: &'a str,
    /// Value with IRCv3 escapes resolved. `None` when there was no `=`.
    pub value: Option<Cow<'a, str>>,
}

impl Tag<'_> {
    /// Whether this is a client-only tag (`+` prefix).
    pub fn is_client_only(&self) -> bool {
        self.key.starts_with('+')
    }
}

/// Split a raw tag into key and value, resolving value escapes.
///
/// An empty value after `=` is treated like a missing value.
pub fn split_tag(raw: &str) -> Tag<'_> {
    match raw.split_once('=') {
        Some((key, "")) => Tag { key, value: None },
        Some((key, value)) => Tag {
            key,
            value: Some(unescape_tag_value(value)),
        },
        None => Tag {
            key: raw,
            value: None,
        },
    }
}

/// Unescape a tag value from wire format.
///
/// Borrows when the value has no escapes.
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
