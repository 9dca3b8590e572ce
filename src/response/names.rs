//! `RPL_NAMREPLY` (353) body parsing.
//!
//! RFC 1459 and RFC 2812 disagree on the shape of this reply. RFC 1459 sends
//! `<channel> :<names>`, RFC 2812 puts a one-character channel type in front:
//! `<type> <channel> :<names>`. A one-character first argument selects the
//! marked form, and only `#` and `$` are accepted there. The status
//! characters `=`, `*` and `@` are rejected with `MalformedTypeMarker`.

use crate::arity::Arity;
use crate::callback::{Callback, Origin};
use crate::error::{ArgContext, MessageParseError, Result};
use crate::util::split_tokens;

/// Channel-type markers accepted in front of the channel name.
pub const CHANNEL_TYPE_MARKERS: &[char] = &['#', '$'];

const PLAIN_ARITY: Arity = Arity::Exactly(2);
const MARKED_ARITY: Arity = Arity::Exactly(3);

/// Parse the arguments of an `RPL_NAMREPLY` (target excluded) and dispatch
/// them to [`Callback::on_names`].
pub fn parse<C>(
    origin: &Origin<'_>,
    target: &str,
    args: &[&str],
    callback: &mut C,
) -> Result<C::Output>
where
    C: Callback + ?Sized,
{
    let first = match args {
        [first, _, ..] => *first,
        _ => {
            return Err(MessageParseError::TooFewArguments {
                context: ArgContext::Names,
                expected: PLAIN_ARITY,
                got: args.len(),
            })
        }
    };

    let mut chars = first.chars();
    let (marker, channel, names) = match (chars.next(), chars.next()) {
        (Some(marker), None) => {
            MARKED_ARITY.check(args, || ArgContext::Names)?;
            if !CHANNEL_TYPE_MARKERS.contains(&marker) {
                return Err(MessageParseError::MalformedTypeMarker(first.to_owned()));
            }
            (Some(marker), args[1], args[2])
        }
        _ => {
            PLAIN_ARITY.check(args, || ArgContext::Names)?;
            (None, args[0], args[1])
        }
    };

    let names = split_tokens(names);
    Ok(callback.on_names(origin, target, marker, channel, &names))
}
