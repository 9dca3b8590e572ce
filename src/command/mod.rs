//! Command argument parsing.
//!
//! [`parse`] is the second stage of the cascade: it takes the command
//! selector and arguments produced by the tokenizer, checks the argument
//! count against the command's contract and invokes the matching
//! [`Callback`] method. Numeric selectors are handed to
//! [`crate::response::parse`] and `CAP` to [`crate::cap::parse`].

mod parse;

use tracing::trace;

use crate::arity::Arity;
use crate::callback::{Callback, Origin};
use crate::error::{ArgContext, Result};
use crate::tokenizer::numeric_code;

/// Commands with a dedicated callback method.
pub const KNOWN_COMMANDS: &[&str] = &[
    "NICK",
    "QUIT",
    "JOIN",
    "PART",
    "TOPIC",
    "INVITE",
    "KICK",
    "MODE",
    "PRIVMSG",
    "NOTICE",
    "PING",
    "PONG",
    "ERROR",
    "AWAY",
    "CAP",
    "AUTHENTICATE",
    "ACCOUNT",
    "BATCH",
    "CHGHOST",
    "SETNAME",
];

/// A numeric reply needs at least its target.
const REPLY_ARITY: Arity = Arity::AtLeast(1);

/// Parse the arguments of `command` and dispatch them to `callback`.
///
/// Matching is case-sensitive. A selector of exactly three ASCII digits is a
/// numeric reply: its first argument is split off as the target and the rest
/// goes to the reply parser. Anything unrecognized reaches
/// [`Callback::on_unknown_command`] untouched.
pub fn parse<C>(
    origin: &Origin<'_>,
    command: &str,
    args: &[&str],
    callback: &mut C,
) -> Result<C::Output>
where
    C: Callback + ?Sized,
{
    match command {
        "NICK" | "QUIT" => parse::connection::parse(origin, command, args, callback),

        "JOIN" | "PART" | "TOPIC" | "INVITE" | "KICK" | "MODE" => {
            parse::channel::parse(origin, command, args, callback)
        }

        "PRIVMSG" | "NOTICE" | "PING" | "PONG" | "ERROR" | "AWAY" => {
            parse::messaging::parse(origin, command, args, callback)
        }

        "CAP" | "AUTHENTICATE" | "ACCOUNT" | "BATCH" | "CHGHOST" | "SETNAME" => {
            parse::ircv3::parse(origin, command, args, callback)
        }

        _ => match numeric_code(command) {
            Some(code) => {
                REPLY_ARITY.check(args, || ArgContext::Reply(code))?;
                crate::response::parse(origin, code, args[0], &args[1..], callback)
            }
            None => {
                trace!(command, "unrecognized command");
                Ok(callback.on_unknown_command(origin, command, args))
            }
        },
    }
}

/// Whether `command` has a dedicated callback method.
pub fn is_known(command: &str) -> bool {
    KNOWN_COMMANDS.contains(&command)
}
