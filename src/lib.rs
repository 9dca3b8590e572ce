//! # slirc-syntax
//!
//! A client-side IRC line parser built around a typed visitor.
//!
//! A raw line goes through a fixed cascade:
//!
//! 1. the [tokenizer] splits it into tags, prefix, command and parameters;
//! 2. the [command] parser validates the argument count of the command;
//! 3. numeric replies continue into the [response] parser, `RPL_NAMREPLY`
//!    into [`response::names`], and `CAP` into the [cap] parser.
//!
//! Each stage either invokes exactly one [`Callback`] method and returns its
//! result, or returns a [`MessageParseError`] before any callback runs.
//! Parsing keeps no state between lines, so one parser can be shared freely
//! across threads.
//!
//! ## Features
//!
//! - Borrowing tokenizer for IRCv3 tags, prefixes and trailing parameters
//! - Arity checks for every recognized command and numeric
//! - RFC 1459 and marked (`#`/`$`) forms of `RPL_NAMREPLY`
//! - IRCv3 capability negotiation, including multi-line `LS`/`LIST`
//! - Owned [`Message`] values through [`MessageBuilder`]
//! - Optional `serde` support for the owned types

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Parsing into owned messages
//!
//! ```rust
//! use slirc_syntax::{Command, Message, Reply};
//!
//! let raw = "@time=2023-01-01T12:00:00Z :irc.example.com 001 nick :Welcome!";
//! let message: Message = raw.parse().expect("Valid IRC line");
//!
//! assert_eq!(message.tag_value("time"), Some("2023-01-01T12:00:00Z"));
//! assert_eq!(
//!     message.command,
//!     Command::Response("nick".to_owned(), Reply::Welcome("Welcome!".to_owned()))
//! );
//! ```
//!
//! ### Implementing a callback
//!
//! Implementing [`Callback`] directly avoids allocating a [`Message`]. Only
//! [`Callback::on_unhandled`] is required; every event method defaults to it,
//! so an implementation overrides just the events it handles. [`Delegating`]
//! fans each event out to several callbacks.

pub mod arity;
pub mod callback;
pub mod cap;
pub mod command;
pub mod error;
pub mod message;
pub mod response;
pub mod tokenizer;
pub mod util;

pub use self::arity::Arity;
pub use self::callback::{Callback, Delegating, Origin};
pub use self::error::{ArgContext, MessageParseError, Result};
pub use self::message::{CapSubCommand, Command, Message, MessageBuilder, Reply};
pub use self::response::Response;
pub use self::tokenizer::{tokenize, Line};

use tracing::debug;

/// Parse one raw IRC line and dispatch it to `callback`.
///
/// Returns whatever the single invoked callback method returned, or the
/// first validation error. On error no callback method has been called.
pub fn parse<C>(line: &str, callback: &mut C) -> Result<C::Output>
where
    C: Callback + ?Sized,
{
    let result = Line::parse(line)
        .and_then(|line| command::parse(&line.origin(), line.command, &line.params, callback));

    if let Err(ref e) = result {
        debug!(error = %e, "rejected IRC line");
    }
    result
}
