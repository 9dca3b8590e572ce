//! IRCv3 capability negotiation (`CAP`) parsing.
//!
//! Interprets the argument list of a `CAP` line as seen by a client:
//!
//! ```text
//! CAP <mask> LS|LIST [*] [:caps]
//! CAP <mask> ACK|NAK|NEW|DEL [:caps]
//! ```
//!
//! A `*` before the capability list marks a multi-line listing that has more
//! lines to come. A missing list and an empty list are reported differently:
//! `None` versus `Some` of an empty list.
//!
//! # Reference
//! - IRCv3 Capability Negotiation: <https://ircv3.net/specs/extensions/capability-negotiation>

use tracing::trace;

use crate::arity::Arity;
use crate::callback::{Callback, Origin};
use crate::error::{ArgContext, MessageParseError, Result};
use crate::util::split_tokens;

/// Continuation marker preceding a non-final LS/LIST line.
pub const CONTINUATION_MARKER: &str = "*";

/// Mask, subcommand and up to two more arguments.
const CAP_ARITY: Arity = Arity::Between(2, 4);

/// Parse `CAP` arguments and dispatch the subcommand to `callback`.
///
/// `args` is the whole argument list of the line: `[mask, subcommand, ...]`.
pub fn parse<C>(origin: &Origin<'_>, args: &[&str], callback: &mut C) -> Result<C::Output>
where
    C: Callback + ?Sized,
{
    CAP_ARITY.check(args, || ArgContext::Cap)?;

    let (mask, subcommand, rest) = (args[0], args[1], &args[2..]);
    match subcommand {
        "LS" | "LIST" => {
            let (final_line, caps) = listing(subcommand, rest)?;
            let caps = caps.map(split_tokens);
            if subcommand == "LS" {
                Ok(callback.on_cap_ls(origin, mask, final_line, caps.as_deref()))
            } else {
                Ok(callback.on_cap_list(origin, mask, final_line, caps.as_deref()))
            }
        }
        "ACK" | "NAK" | "NEW" | "DEL" => {
            let caps = match rest {
                [] => None,
                [caps] => Some(split_tokens(caps)),
                _ => return Err(malformed(subcommand, rest.len())),
            };
            let caps = caps.as_deref();
            Ok(match subcommand {
                "ACK" => callback.on_cap_ack(origin, mask, caps),
                "NAK" => callback.on_cap_nak(origin, mask, caps),
                "NEW" => callback.on_cap_new(origin, mask, caps),
                _ => callback.on_cap_del(origin, mask, caps),
            })
        }
        _ => {
            trace!(subcommand = %subcommand, "unrecognized CAP subcommand");
            Ok(callback.on_unknown_cap(origin, mask, subcommand, rest))
        }
    }
}

/// Split LS/LIST trailing arguments into (final_line, raw caps).
fn listing<'a>(subcommand: &str, rest: &[&'a str]) -> Result<(bool, Option<&'a str>)> {
    match *rest {
        [] => Ok((true, None)),
        // A lone marker promises a list that never arrives.
        [marker] if marker == CONTINUATION_MARKER => Err(malformed(subcommand, 1)),
        [caps] => Ok((true, Some(caps))),
        [marker, caps] if marker == CONTINUATION_MARKER => Ok((false, Some(caps))),
        _ => Err(malformed(subcommand, rest.len())),
    }
}

fn malformed(subcommand: &str, got: usize) -> MessageParseError {
    MessageParseError::MalformedCapabilityArguments {
        subcommand: subcommand.to_owned(),
        got,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{CapSubCommand, Command, MessageBuilder};

    fn cap(args: &[&str]) -> Result<Command> {
        parse(&Origin::none(), args, &mut MessageBuilder).map(|m| m.command)
    }

    fn ls(mask: &str, final_line: bool, caps: Option<Vec<&str>>) -> Command {
        Command::CAP(
            mask.to_owned(),
            CapSubCommand::LS {
                final_line,
                caps: caps.map(|c| c.into_iter().map(String::from).collect()),
            },
        )
    }

    fn is_malformed(result: Result<Command>) -> bool {
        matches!(result, Err(MessageParseError::MalformedCapabilityArguments { .. }))
    }

    #[test]
    fn test_bad_arity() {
        assert!(matches!(
            cap(&[]),
            Err(MessageParseError::TooFewArguments { context: ArgContext::Cap, .. })
        ));
        assert!(matches!(
            cap(&["first"]),
            Err(MessageParseError::TooFewArguments { .. })
        ));
        assert!(matches!(
            cap(&["first", "second", "third", "fourth", "fifth"]),
            Err(MessageParseError::TooManyArguments { .. })
        ));
    }

    #[test]
    fn test_unknown_subcommand() {
        assert_eq!(
            cap(&["*", "OTHER"]).unwrap(),
            Command::CAP("*".to_owned(), CapSubCommand::Unknown("OTHER".to_owned(), vec![]))
        );
        assert_eq!(
            cap(&["*", "OTHER", "first"]).unwrap(),
            Command::CAP(
                "*".to_owned(),
                CapSubCommand::Unknown("OTHER".to_owned(), vec!["first".to_owned()])
            )
        );
    }

    #[test]
    fn test_ls() {
        assert_eq!(cap(&["*", "LS"]).unwrap(), ls("*", true, None));
        assert_eq!(
            cap(&["*", "LS", "first second third"]).unwrap(),
            ls("*", true, Some(vec!["first", "second", "third"]))
        );
        assert_eq!(
            cap(&["*", "LS", "*", "first"]).unwrap(),
            ls("*", false, Some(vec!["first"]))
        );
        assert_eq!(
            cap(&["*", "LS", "*", "first second third"]).unwrap(),
            ls("*", false, Some(vec!["first", "second", "third"]))
        );
    }

    #[test]
    fn test_ls_malformed() {
        assert!(is_malformed(cap(&["*", "LS", "*"])));
        assert!(is_malformed(cap(&["*", "LS", "f", "second"])));
        assert!(is_malformed(cap(&["*", "LS", "first", "second"])));
    }

    #[test]
    fn test_ls_empty_list_is_not_absent() {
        assert_eq!(cap(&["*", "LS", ""]).unwrap(), ls("*", true, Some(vec![])));
        assert_ne!(cap(&["*", "LS", ""]).unwrap(), cap(&["*", "LS"]).unwrap());
    }

    #[test]
    fn test_list() {
        let list = |final_line, caps: Option<Vec<&str>>| {
            Command::CAP(
                "*".to_owned(),
                CapSubCommand::LIST {
                    final_line,
                    caps: caps.map(|c| c.into_iter().map(String::from).collect()),
                },
            )
        };
        assert_eq!(cap(&["*", "LIST"]).unwrap(), list(true, None));
        assert_eq!(
            cap(&["*", "LIST", "first second third"]).unwrap(),
            list(true, Some(vec!["first", "second", "third"]))
        );
        assert_eq!(
            cap(&["*", "LIST", "*", "first"]).unwrap(),
            list(false, Some(vec!["first"]))
        );
        assert!(is_malformed(cap(&["*", "LIST", "*"])));
        assert!(is_malformed(cap(&["*", "LIST", "first", "second"])));
    }

    #[test]
    fn test_ack_nak_new_del() {
        let caps = Some(vec!["first".to_owned(), "second".to_owned(), "third".to_owned()]);
        let cases: [(&str, fn(Option<Vec<String>>) -> CapSubCommand); 4] = [
            ("ACK", CapSubCommand::ACK),
            ("NAK", CapSubCommand::NAK),
            ("NEW", CapSubCommand::NEW),
            ("DEL", CapSubCommand::DEL),
        ];
        for (sub, variant) in cases {
            assert_eq!(
                cap(&["*", sub]).unwrap(),
                Command::CAP("*".to_owned(), variant(None))
            );
            assert_eq!(
                cap(&["*", sub, "first second third"]).unwrap(),
                Command::CAP("*".to_owned(), variant(caps.clone()))
            );
            assert!(is_malformed(cap(&["first", sub, "second", "third"])));
        }
    }
}
