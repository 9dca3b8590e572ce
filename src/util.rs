//! Small helpers shared by the argument parsers.

/// `args[index]` if present.
#[inline]
pub(crate) fn get_or_none<'a>(args: &[&'a str], index: usize) -> Option<&'a str> {
    args.get(index).copied()
}

/// Nickname part of a message prefix: everything before the first `!` or `@`.
pub(crate) fn nick_of(prefix: &str) -> &str {
    let end = prefix.find(['!', '@']).unwrap_or(prefix.len());
    &prefix[..end]
}

/// Split a space-joined list argument (capabilities, NAMES members) into tokens.
///
/// Unlike a plain split on single spaces, empty tokens are dropped: runs of
/// spaces and a trailing space, which servers commonly send, add nothing, so
/// `"a  b "` yields `["a", "b"]` and an empty or all-space string yields an
/// empty list.
pub fn split_tokens(list: &str) -> Vec<&str> {
    list.split(' ').filter(|token| !token.is_empty()).collect()
}
