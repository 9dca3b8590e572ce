//! The visitor surface the parsing cascade dispatches into.
//!
//! Each recognized command, numeric reply and CAP subcommand has exactly one
//! method on [`Callback`]. A successful parse invokes exactly one of them and
//! hands back whatever it returns. Per-line metadata travels in an
//! [`Origin`] passed by reference to every method, and numeric replies also
//! receive the reply target, so implementations never need to stash state
//! between calls.
//!
//! Every event method has a default body that forwards to
//! [`Callback::on_unhandled`], so an implementation only overrides the events
//! it cares about:
//!
//! ```
//! use slirc_syntax::{Callback, Origin};
//!
//! #[derive(Default)]
//! struct Privmsgs(Vec<String>);
//!
//! impl Callback for Privmsgs {
//!     type Output = bool;
//!
//!     fn on_unhandled(&mut self, _origin: &Origin<'_>, _event: &'static str) -> bool {
//!         false
//!     }
//!
//!     fn on_privmsg(&mut self, _origin: &Origin<'_>, _target: &str, message: &str) -> bool {
//!         self.0.push(message.to_owned());
//!         true
//!     }
//! }
//!
//! let mut privmsgs = Privmsgs::default();
//! assert!(slirc_syntax::parse(":n!u@h PRIVMSG #rust :hi", &mut privmsgs).unwrap());
//! assert!(!slirc_syntax::parse("PING", &mut privmsgs).unwrap());
//! assert_eq!(privmsgs.0, vec!["hi"]);
//! ```
//!
//! [`Delegating`] fans each event out to several callbacks.

mod delegating;

pub use self::delegating::Delegating;

use crate::util::nick_of;

/// Per-line metadata shared by every event parsed from one line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Origin<'a> {
    /// Raw IRCv3 tags, unsplit on `=`. `None` when the line had no `@` section.
    pub tags: Option<&'a [&'a str]>,
    /// Message prefix without the leading `:`.
    pub prefix: Option<&'a str>,
}

impl<'a> Origin<'a> {
    /// Origin with neither tags nor prefix.
    pub const fn none() -> Self {
        Origin {
            tags: None,
            prefix: None,
        }
    }

    /// The nickname part of the prefix (everything before `!` or `@`).
    pub fn nick(&self) -> Option<&'a str> {
        self.prefix.map(nick_of)
    }
}

/// Receives one typed event per parsed line.
///
/// The associated `Output` is whatever the caller wants a parse to produce;
/// [`crate::message::MessageBuilder`] uses an owned [`crate::Message`], a
/// dispatcher might use `()`.
pub trait Callback {
    /// Result type of every callback method.
    type Output;

    /// Fallback for every event method that is not overridden.
    ///
    /// `event` names the event: the command word (`"PRIVMSG"`), the CAP
    /// subcommand (`"CAP LS"`), the reply name (`"RPL_WELCOME"`), or
    /// `"unknown command"`, `"unknown CAP subcommand"` and `"unknown reply"`
    /// for the fallbacks.
    fn on_unhandled(&mut self, origin: &Origin<'_>, event: &'static str) -> Self::Output;

    // === Commands ===

    /// `PING [server]`
    fn on_ping(&mut self, origin: &Origin<'_>, _server: Option<&str>) -> Self::Output {
        self.on_unhandled(origin, "PING")
    }

    /// `PONG server [token]`
    fn on_pong(
        &mut self,
        origin: &Origin<'_>,
        _server: &str,
        _token: Option<&str>,
    ) -> Self::Output {
        self.on_unhandled(origin, "PONG")
    }

    /// `QUIT [reason]`
    fn on_quit(&mut self, origin: &Origin<'_>, _reason: Option<&str>) -> Self::Output {
        self.on_unhandled(origin, "QUIT")
    }

    /// `NICK nick`
    fn on_nick(&mut self, origin: &Origin<'_>, _nick: &str) -> Self::Output {
        self.on_unhandled(origin, "NICK")
    }

    /// `INVITE target channel`
    fn on_invite(&mut self, origin: &Origin<'_>, _target: &str, _channel: &str) -> Self::Output {
        self.on_unhandled(origin, "INVITE")
    }

    /// `ACCOUNT account`
    fn on_account(&mut self, origin: &Origin<'_>, _account: &str) -> Self::Output {
        self.on_unhandled(origin, "ACCOUNT")
    }

    /// `AUTHENTICATE data`
    fn on_authenticate(&mut self, origin: &Origin<'_>, _data: &str) -> Self::Output {
        self.on_unhandled(origin, "AUTHENTICATE")
    }

    /// `PART channel [reason]`
    fn on_part(
        &mut self,
        origin: &Origin<'_>,
        _channel: &str,
        _reason: Option<&str>,
    ) -> Self::Output {
        self.on_unhandled(origin, "PART")
    }

    /// `PRIVMSG target message`
    fn on_privmsg(&mut self, origin: &Origin<'_>, _target: &str, _message: &str) -> Self::Output {
        self.on_unhandled(origin, "PRIVMSG")
    }

    /// `NOTICE target message`
    fn on_notice(&mut self, origin: &Origin<'_>, _target: &str, _message: &str) -> Self::Output {
        self.on_unhandled(origin, "NOTICE")
    }

    /// `JOIN channel [args...]`, where extended-join puts account and realname in `args`
    fn on_join(&mut self, origin: &Origin<'_>, _channel: &str, _args: &[&str]) -> Self::Output {
        self.on_unhandled(origin, "JOIN")
    }

    /// `MODE target modes...`
    fn on_mode(&mut self, origin: &Origin<'_>, _target: &str, _args: &[&str]) -> Self::Output {
        self.on_unhandled(origin, "MODE")
    }

    /// `KICK channel user [reason]`
    fn on_kick(
        &mut self,
        origin: &Origin<'_>,
        _channel: &str,
        _user: &str,
        _reason: Option<&str>,
    ) -> Self::Output {
        self.on_unhandled(origin, "KICK")
    }

    /// `CHGHOST user host`
    fn on_chghost(
        &mut self,
        origin: &Origin<'_>,
        _new_user: &str,
        _new_host: &str,
    ) -> Self::Output {
        self.on_unhandled(origin, "CHGHOST")
    }

    /// `AWAY [message]`
    fn on_away(&mut self, origin: &Origin<'_>, _message: Option<&str>) -> Self::Output {
        self.on_unhandled(origin, "AWAY")
    }

    /// `BATCH (+|-)reference type [args...]`
    fn on_batch(
        &mut self,
        origin: &Origin<'_>,
        _reference: &str,
        _kind: &str,
        _args: &[&str],
    ) -> Self::Output {
        self.on_unhandled(origin, "BATCH")
    }

    /// `TOPIC channel [topic]`
    fn on_topic(
        &mut self,
        origin: &Origin<'_>,
        _channel: &str,
        _topic: Option<&str>,
    ) -> Self::Output {
        self.on_unhandled(origin, "TOPIC")
    }

    /// `ERROR message`
    fn on_error(&mut self, origin: &Origin<'_>, _message: &str) -> Self::Output {
        self.on_unhandled(origin, "ERROR")
    }

    /// `SETNAME realname`
    fn on_setname(&mut self, origin: &Origin<'_>, _realname: &str) -> Self::Output {
        self.on_unhandled(origin, "SETNAME")
    }

    /// Any command that is neither recognized nor numeric.
    fn on_unknown_command(
        &mut self,
        origin: &Origin<'_>,
        _command: &str,
        _args: &[&str],
    ) -> Self::Output {
        self.on_unhandled(origin, "unknown command")
    }

    // === CAP subcommands ===

    /// `CAP mask LS [*] [caps]`. `final_line` is false when the `*` continuation
    /// marker was present.
    fn on_cap_ls(
        &mut self,
        origin: &Origin<'_>,
        _mask: &str,
        _final_line: bool,
        _caps: Option<&[&str]>,
    ) -> Self::Output {
        self.on_unhandled(origin, "CAP LS")
    }

    /// `CAP mask LIST [*] [caps]`
    fn on_cap_list(
        &mut self,
        origin: &Origin<'_>,
        _mask: &str,
        _final_line: bool,
        _caps: Option<&[&str]>,
    ) -> Self::Output {
        self.on_unhandled(origin, "CAP LIST")
    }

    /// `CAP mask ACK [caps]`
    fn on_cap_ack(
        &mut self,
        origin: &Origin<'_>,
        _mask: &str,
        _caps: Option<&[&str]>,
    ) -> Self::Output {
        self.on_unhandled(origin, "CAP ACK")
    }

    /// `CAP mask NAK [caps]`
    fn on_cap_nak(
        &mut self,
        origin: &Origin<'_>,
        _mask: &str,
        _caps: Option<&[&str]>,
    ) -> Self::Output {
        self.on_unhandled(origin, "CAP NAK")
    }

    /// `CAP mask NEW [caps]`
    fn on_cap_new(
        &mut self,
        origin: &Origin<'_>,
        _mask: &str,
        _caps: Option<&[&str]>,
    ) -> Self::Output {
        self.on_unhandled(origin, "CAP NEW")
    }

    /// `CAP mask DEL [caps]`
    fn on_cap_del(
        &mut self,
        origin: &Origin<'_>,
        _mask: &str,
        _caps: Option<&[&str]>,
    ) -> Self::Output {
        self.on_unhandled(origin, "CAP DEL")
    }

    /// Any other CAP subcommand, with the arguments following it.
    fn on_unknown_cap(
        &mut self,
        origin: &Origin<'_>,
        _mask: &str,
        _subcommand: &str,
        _args: &[&str],
    ) -> Self::Output {
        self.on_unhandled(origin, "unknown CAP subcommand")
    }

    // === Numeric replies ===

    /// 001 RPL_WELCOME
    fn on_welcome(&mut self, origin: &Origin<'_>, _target: &str, _message: &str) -> Self::Output {
        self.on_unhandled(origin, "RPL_WELCOME")
    }

    /// 002 RPL_YOURHOST
    fn on_your_host(&mut self, origin: &Origin<'_>, _target: &str, _message: &str) -> Self::Output {
        self.on_unhandled(origin, "RPL_YOURHOST")
    }

    /// 003 RPL_CREATED
    fn on_created(&mut self, origin: &Origin<'_>, _target: &str, _message: &str) -> Self::Output {
        self.on_unhandled(origin, "RPL_CREATED")
    }

    /// 005 RPL_ISUPPORT. `message` is the last argument, `tokens` everything before it.
    fn on_isupport(
        &mut self,
        origin: &Origin<'_>,
        _target: &str,
        _message: &str,
        _tokens: &[&str],
    ) -> Self::Output {
        self.on_unhandled(origin, "RPL_ISUPPORT")
    }

    /// 332 RPL_TOPIC
    fn on_topic_reply(
        &mut self,
        origin: &Origin<'_>,
        _target: &str,
        _channel: &str,
        _topic: &str,
    ) -> Self::Output {
        self.on_unhandled(origin, "RPL_TOPIC")
    }

    /// 353 RPL_NAMREPLY
    fn on_names(
        &mut self,
        origin: &Origin<'_>,
        _target: &str,
        _marker: Option<char>,
        _channel: &str,
        _names: &[&str],
    ) -> Self::Output {
        self.on_unhandled(origin, "RPL_NAMREPLY")
    }

    /// 366 RPL_ENDOFNAMES
    fn on_end_of_names(
        &mut self,
        origin: &Origin<'_>,
        _target: &str,
        _channel: &str,
        _message: &str,
    ) -> Self::Output {
        self.on_unhandled(origin, "RPL_ENDOFNAMES")
    }

    /// 372 RPL_MOTD
    fn on_motd(&mut self, origin: &Origin<'_>, _target: &str, _message: &str) -> Self::Output {
        self.on_unhandled(origin, "RPL_MOTD")
    }

    /// 375 RPL_MOTDSTART
    fn on_motd_start(
        &mut self,
        origin: &Origin<'_>,
        _target: &str,
        _message: &str,
    ) -> Self::Output {
        self.on_unhandled(origin, "RPL_MOTDSTART")
    }

    /// 376 RPL_ENDOFMOTD
    fn on_end_of_motd(
        &mut self,
        origin: &Origin<'_>,
        _target: &str,
        _message: &str,
    ) -> Self::Output {
        self.on_unhandled(origin, "RPL_ENDOFMOTD")
    }

    /// 433 ERR_NICKNAMEINUSE
    fn on_nickname_in_use(
        &mut self,
        origin: &Origin<'_>,
        _target: &str,
        _nick: &str,
        _message: &str,
    ) -> Self::Output {
        self.on_unhandled(origin, "ERR_NICKNAMEINUSE")
    }

    /// Any numeric without a dedicated method.
    fn on_unknown_code(
        &mut self,
        origin: &Origin<'_>,
        _target: &str,
        _code: u16,
        _args: &[&str],
    ) -> Self::Output {
        self.on_unhandled(origin, "unknown reply")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts privmsgs and everything else separately.
    #[derive(Default)]
    struct PrivmsgOnly {
        privmsgs: Vec<(String, String)>,
        unhandled: Vec<&'static str>,
    }

    impl Callback for PrivmsgOnly {
        type Output = ();

        fn on_unhandled(&mut self, _origin: &Origin<'_>, event: &'static str) {
            self.unhandled.push(event);
        }

        fn on_privmsg(&mut self, _origin: &Origin<'_>, target: &str, message: &str) {
            self.privmsgs.push((target.to_owned(), message.to_owned()));
        }
    }

    #[test]
    fn test_origin_nick() {
        let origin = Origin {
            tags: None,
            prefix: Some("nick!user@host"),
        };
        assert_eq!(origin.nick(), Some("nick"));

        let origin = Origin {
            tags: None,
            prefix: Some("irc.example.com"),
        };
        assert_eq!(origin.nick(), Some("irc.example.com"));

        assert_eq!(Origin::none().nick(), None);
    }

    #[test]
    fn test_overriding_one_event() {
        let mut callback = PrivmsgOnly::default();
        for line in [
            ":a!b@c PRIVMSG #rust :hello",
            "PING :server",
            ":srv 001 nick :Welcome",
            ":srv CAP * LS :sasl",
            ":srv 353 nick # #rust :a b",
            "WALLOPS :hi",
            ":srv 999 nick",
            ":srv CAP * FOO bar",
        ] {
            crate::parse(line, &mut callback).unwrap();
        }
        assert_eq!(
            callback.privmsgs,
            vec![("#rust".to_owned(), "hello".to_owned())]
        );
        assert_eq!(
            callback.unhandled,
            vec![
                "PING",
                "RPL_WELCOME",
                "CAP LS",
                "RPL_NAMREPLY",
                "unknown command",
                "unknown reply",
                "unknown CAP subcommand",
            ]
        );
    }

    #[test]
    fn test_unhandled_receives_origin() {
        struct Prefix(Option<String>);

        impl Callback for Prefix {
            type Output = ();

            fn on_unhandled(&mut self, origin: &Origin<'_>, _event: &'static str) {
                self.0 = origin.prefix.map(str::to_owned);
            }
        }

        let mut callback = Prefix(None);
        crate::parse(":nick!u@h NICK other", &mut callback).unwrap();
        assert_eq!(callback.0.as_deref(), Some("nick!u@h"));
    }
}
