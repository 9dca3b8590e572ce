//! Owned message values.
//!
//! The parsing cascade borrows from the input line and reports through a
//! [`Callback`](crate::Callback). [`MessageBuilder`] is the callback that
//! copies every event into an owned [`Message`], for callers that want a
//! value to store or send across threads rather than a visitor.
//!
//! ```
//! use slirc_syntax::{Command, Message};
//!
//! let msg: Message = ":nick!user@host PRIVMSG #rust :hello".parse().unwrap();
//! assert_eq!(msg.source_nickname(), Some("nick"));
//! assert_eq!(
//!     msg.command,
//!     Command::PRIVMSG("#rust".to_owned(), "hello".to_owned())
//! );
//! ```

mod builder;
mod types;

pub use self::builder::MessageBuilder;
pub use self::types::{CapSubCommand, Command, Message, Reply};
