//! IRC numeric replies.
//!
//! [`Response`] enumerates the numerics that have a dedicated callback
//! method. [`parse`] validates the arguments of a numeric reply and
//! dispatches it; any other code goes to
//! [`Callback::on_unknown_code`](crate::Callback::on_unknown_code).
//!
//! # Reference
//! - RFC 2812: Internet Relay Chat: Client Protocol
//! - Modern IRC documentation: <https://modern.ircdocs.horse/>

#![allow(non_camel_case_types)]

mod helpers;
pub mod names;

pub use self::helpers::ParseResponseError;

use tracing::trace;

use crate::arity::Arity;
use crate::callback::{Callback, Origin};
use crate::error::{ArgContext, Result};

/// IRC server response code with a dedicated callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
#[non_exhaustive]
pub enum Response {
    // === Connection Registration (001-099) ===
    /// 001 - Welcome to the IRC network
    RPL_WELCOME = 1,
    /// 002 - Your host is running version
    RPL_YOURHOST = 2,
    /// 003 - Server creation date
    RPL_CREATED = 3,
    /// 005 - Server supported features (ISUPPORT)
    RPL_ISUPPORT = 5,

    // === Channel replies ===
    /// 332 - Channel topic
    RPL_TOPIC = 332,
    /// 353 - Names list
    RPL_NAMREPLY = 353,
    /// 366 - End of names list
    RPL_ENDOFNAMES = 366,

    // === MOTD ===
    /// 372 - MOTD line
    RPL_MOTD = 372,
    /// 375 - Start of MOTD
    RPL_MOTDSTART = 375,
    /// 376 - End of MOTD
    RPL_ENDOFMOTD = 376,

    // === Errors ===
    /// 433 - Nickname is already in use
    ERR_NICKNAMEINUSE = 433,
}

impl Response {
    /// Argument contract for this reply, not counting the target.
    ///
    /// `None` for replies whose body is validated by a sub-parser.
    pub fn arity(self) -> Option<Arity> {
        use self::Response::*;
        match self {
            RPL_WELCOME | RPL_YOURHOST | RPL_CREATED | RPL_MOTD | RPL_MOTDSTART
            | RPL_ENDOFMOTD => Some(Arity::Exactly(1)),
            RPL_ISUPPORT => Some(Arity::AtLeast(2)),
            RPL_TOPIC | RPL_ENDOFNAMES | ERR_NICKNAMEINUSE => Some(Arity::Exactly(2)),
            RPL_NAMREPLY => None,
        }
    }
}

/// Parse the arguments of numeric reply `code` and dispatch it.
///
/// `target` is the reply's first argument, already split off by the caller;
/// `args` holds everything after it.
pub fn parse<C>(
    origin: &Origin<'_>,
    code: u16,
    target: &str,
    args: &[&str],
    callback: &mut C,
) -> Result<C::Output>
where
    C: Callback + ?Sized,
{
    let response = match Response::from_code(code) {
        Some(response) => response,
        None => {
            trace!(code, "numeric without dedicated handler");
            return Ok(callback.on_unknown_code(origin, target, code, args));
        }
    };

    if let Some(arity) = response.arity() {
        arity.check(args, || ArgContext::Reply(code))?;
    }

    use self::Response::*;
    let output = match response {
        RPL_WELCOME => callback.on_welcome(origin, target, args[0]),
        RPL_YOURHOST => callback.on_your_host(origin, target, args[0]),
        RPL_CREATED => callback.on_created(origin, target, args[0]),
        RPL_ISUPPORT => {
            let (message, tokens) = match args.split_last() {
                Some((message, tokens)) => (*message, tokens),
                None => unreachable!("RPL_ISUPPORT arity guarantees a message"),
            };
            callback.on_isupport(origin, target, message, tokens)
        }
        RPL_TOPIC => callback.on_topic_reply(origin, target, args[0], args[1]),
        RPL_NAMREPLY => return names::parse(origin, target, args, callback),
        RPL_ENDOFNAMES => callback.on_end_of_names(origin, target, args[0], args[1]),
        RPL_MOTD => callback.on_motd(origin, target, args[0]),
        RPL_MOTDSTART => callback.on_motd_start(origin, target, args[0]),
        RPL_ENDOFMOTD => callback.on_end_of_motd(origin, target, args[0]),
        ERR_NICKNAMEINUSE => callback.on_nickname_in_use(origin, target, args[0], args[1]),
    };
    Ok(output)
}
