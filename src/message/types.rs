use std::str::FromStr;

use crate::error::MessageParseError;
use crate::util::nick_of;

/// A fully parsed IRC line, detached from its input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Raw IRCv3 tags, unsplit on `=`.
    pub tags: Option<Vec<String>>,
    /// Message prefix without the leading `:`.
    pub prefix: Option<String>,
    /// The command and its validated arguments.
    pub command: Command,
}

impl Message {
    /// The nickname part of the prefix, if any.
    pub fn source_nickname(&self) -> Option<&str> {
        self.prefix.as_deref().map(nick_of)
    }

    /// Value of the tag named `key`, if present. A tag without `=` yields `Some("")`.
    ///
    /// Values are returned raw; see [`crate::tokenizer::tags`] for unescaping.
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags.as_ref()?.iter().find_map(|tag| match tag.split_once('=') {
            Some((k, v)) if k == key => Some(v),
            None if tag == key => Some(""),
            _ => None,
        })
    }
}

impl FromStr for Message {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s, &mut super::MessageBuilder)
    }
}

/// IRC command with its validated parameters.
///
/// Unrecognized commands are kept verbatim in [`Command::Raw`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Command {
    // === Connection ===
    /// `NICK nickname`
    NICK(String),
    /// `QUIT [message]`
    QUIT(Option<String>),

    // === Channel operations ===
    /// `JOIN channel [args...]`
    JOIN(String, Vec<String>),
    /// `PART channel [reason]`
    PART(String, Option<String>),
    /// `TOPIC channel [topic]`
    TOPIC(String, Option<String>),
    /// `INVITE nickname channel`
    INVITE(String, String),
    /// `KICK channel user [reason]`
    KICK(String, String, Option<String>),
    /// `MODE target modes...`
    MODE(String, Vec<String>),

    // === Messaging ===
    /// `PRIVMSG target text`
    PRIVMSG(String, String),
    /// `NOTICE target text`
    NOTICE(String, String),
    /// `PING [server]`
    PING(Option<String>),
    /// `PONG server [token]`
    PONG(String, Option<String>),
    /// `ERROR message`
    ERROR(String),
    /// `AWAY [message]`
    AWAY(Option<String>),

    // === IRCv3 ===
    /// `CAP mask subcommand ...`
    CAP(String, CapSubCommand),
    /// `AUTHENTICATE data`
    AUTHENTICATE(String),
    /// `ACCOUNT accountname`
    ACCOUNT(String),
    /// `BATCH (+|-)reference type [args...]`
    BATCH(String, String, Vec<String>),
    /// `CHGHOST user host`
    CHGHOST(String, String),
    /// `SETNAME realname`
    SETNAME(String),

    /// Numeric reply: target and body.
    Response(String, Reply),

    /// Unrecognized command with its arguments.
    Raw(String, Vec<String>),
}

/// A `CAP` subcommand as seen by a client.
///
/// Capability lists are `None` when the line carried no list at all.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum CapSubCommand {
    /// `LS [*] [caps]`
    LS {
        /// False when more LS lines follow.
        final_line: bool,
        /// Advertised capabilities.
        caps: Option<Vec<String>>,
    },
    /// `LIST [*] [caps]`
    LIST {
        /// False when more LIST lines follow.
        final_line: bool,
        /// Enabled capabilities.
        caps: Option<Vec<String>>,
    },
    /// `ACK [caps]`
    ACK(Option<Vec<String>>),
    /// `NAK [caps]`
    NAK(Option<Vec<String>>),
    /// `NEW [caps]`
    NEW(Option<Vec<String>>),
    /// `DEL [caps]`
    DEL(Option<Vec<String>>),
    /// Any other subcommand with its raw arguments.
    Unknown(String, Vec<String>),
}

/// Body of a numeric reply, target excluded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Reply {
    /// 001
    Welcome(String),
    /// 002
    YourHost(String),
    /// 003
    Created(String),
    /// 005
    Isupport {
        /// Trailing human-readable text.
        message: String,
        /// `KEY=value` tokens preceding it.
        tokens: Vec<String>,
    },
    /// 332
    Topic {
        channel: String,
        topic: String,
    },
    /// 353
    Names {
        /// Channel-type marker, present in the RFC 2812 form.
        marker: Option<char>,
        channel: String,
        names: Vec<String>,
    },
    /// 366
    EndOfNames {
        channel: String,
        message: String,
    },
    /// 372
    Motd(String),
    /// 375
    MotdStart(String),
    /// 376
    EndOfMotd(String),
    /// 433
    NicknameInUse {
        nick: String,
        message: String,
    },
    /// Any numeric without a dedicated variant: code and raw arguments.
    Unknown(u16, Vec<String>),
}

impl Reply {
    /// Numeric code of this reply.
    pub fn code(&self) -> u16 {
        use crate::response::Response::*;
        let response = match self {
            Reply::Welcome(_) => RPL_WELCOME,
            Reply::YourHost(_) => RPL_YOURHOST,
            Reply::Created(_) => RPL_CREATED,
            Reply::Isupport { .. } => RPL_ISUPPORT,
            Reply::Topic { .. } => RPL_TOPIC,
            Reply::Names { .. } => RPL_NAMREPLY,
            Reply::EndOfNames { .. } => RPL_ENDOFNAMES,
            Reply::Motd(_) => RPL_MOTD,
            Reply::MotdStart(_) => RPL_MOTDSTART,
            Reply::EndOfMotd(_) => RPL_ENDOFMOTD,
            Reply::NicknameInUse { .. } => ERR_NICKNAMEINUSE,
            Reply::Unknown(code, _) => return *code,
        };
        response.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let msg: Message = "@time=12:00;draft/x :nick!u@h QUIT :bye".parse().unwrap();
        assert_eq!(
            msg,
            Message {
                tags: Some(vec!["time=12:00".to_owned(), "draft/x".to_owned()]),
                prefix: Some("nick!u@h".to_owned()),
                command: Command::QUIT(Some("bye".to_owned())),
            }
        );
        assert_eq!("".parse::<Message>(), Err(MessageParseError::EmptyLine));
    }

    #[test]
    fn test_source_nickname() {
        let msg: Message = ":nick!user@host NICK other".parse().unwrap();
        assert_eq!(msg.source_nickname(), Some("nick"));
        let msg: Message = "NICK other".parse().unwrap();
        assert_eq!(msg.source_nickname(), None);

        let line = ":nick@host NICK other";
        let msg: Message = line.parse().unwrap();
        let tokenized = crate::Line::parse(line).unwrap();
        assert_eq!(msg.source_nickname(), tokenized.origin().nick());
    }

    #[test]
    fn test_tag_value() {
        let msg: Message = "@time=12:00;draft/x;a= PING".parse().unwrap();
        assert_eq!(msg.tag_value("time"), Some("12:00"));
        assert_eq!(msg.tag_value("draft/x"), Some(""));
        assert_eq!(msg.tag_value("a"), Some(""));
        assert_eq!(msg.tag_value("missing"), None);

        let msg: Message = "PING".parse().unwrap();
        assert_eq!(msg.tag_value("time"), None);
    }

    #[test]
    fn test_reply_code() {
        assert_eq!(Reply::Welcome(String::new()).code(), 1);
        assert_eq!(
            Reply::NicknameInUse {
                nick: String::new(),
                message: String::new(),
            }
            .code(),
            433
        );
        assert_eq!(Reply::Unknown(42, vec![]).code(), 42);
    }
}
