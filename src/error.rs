//! Error types for the IRC line parser.
//!
//! Every stage of the parsing cascade reports failures through
//! [`MessageParseError`]. Errors are always returned before any callback
//! method runs, so a rejected line never produces a partial dispatch.

use std::fmt;

use thiserror::Error;

use crate::arity::Arity;

/// Convenience type alias for Results using [`MessageParseError`].
pub type Result<T, E = MessageParseError> = std::result::Result<T, E>;

/// Errors encountered when parsing IRC lines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// Line was empty (or only whitespace).
    #[error("empty line")]
    EmptyLine,

    /// Line shape is broken: tags or prefix with no command after them.
    #[error("malformed line: {0}")]
    MalformedLine(&'static str),

    /// Not enough arguments for the command, reply or sub-body.
    #[error("{context}: too few arguments: expected {expected}, got {got}")]
    TooFewArguments {
        /// What was being parsed.
        context: ArgContext,
        /// The arity contract that was violated.
        expected: Arity,
        /// Actual number of arguments.
        got: usize,
    },

    /// More arguments than the command, reply or sub-body accepts.
    #[error("{context}: too many arguments: expected {expected}, got {got}")]
    TooManyArguments {
        /// What was being parsed.
        context: ArgContext,
        /// The arity contract that was violated.
        expected: Arity,
        /// Actual number of arguments.
        got: usize,
    },

    /// A NAMES reply carried a one-character channel type that is not recognized.
    #[error("malformed channel type marker: {0:?}")]
    MalformedTypeMarker(String),

    /// A CAP LS/LIST/ACK/NAK/NEW/DEL body had the wrong shape.
    #[error("malformed CAP {subcommand} arguments ({got} after subcommand)")]
    MalformedCapabilityArguments {
        /// The CAP subcommand being parsed.
        subcommand: String,
        /// Number of arguments following the subcommand.
        got: usize,
    },
}

/// Where an arity failure happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgContext {
    /// A textual command such as `JOIN`.
    Command(String),
    /// A numeric reply, by code.
    Reply(u16),
    /// The body of an `RPL_NAMREPLY`.
    Names,
    /// The body of a `CAP` command.
    Cap,
}

impl fmt::Display for ArgContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgContext::Command(cmd) => write!(f, "command {}", cmd),
            ArgContext::Reply(code) => write!(f, "reply {:03}", code),
            ArgContext::Names => f.write_str("RPL_NAMREPLY"),
            ArgContext::Cap => f.write_str("CAP"),
        }
    }
}

impl MessageParseError {
    /// Returns the context of an arity failure, if this is one.
    pub fn arg_context(&self) -> Option<&ArgContext> {
        match self {
            MessageParseError::TooFewArguments { context, .. }
            | MessageParseError::TooManyArguments { context, .. } => Some(context),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(MessageParseError::EmptyLine.to_string(), "empty line");

        let err = MessageParseError::TooFewArguments {
            context: ArgContext::Command("NICK".to_string()),
            expected: Arity::Exactly(1),
            got: 0,
        };
        assert_eq!(
            err.to_string(),
            "command NICK: too few arguments: expected exactly 1, got 0"
        );

        let err = MessageParseError::TooManyArguments {
            context: ArgContext::Reply(1),
            expected: Arity::Exactly(1),
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "reply 001: too many arguments: expected exactly 1, got 2"
        );
    }

    #[test]
    fn test_cap_error_display() {
        let err = MessageParseError::MalformedCapabilityArguments {
            subcommand: "LS".to_string(),
            got: 1,
        };
        assert_eq!(err.to_string(), "malformed CAP LS arguments (1 after subcommand)");
    }

    #[test]
    fn test_arg_context_accessor() {
        let err = MessageParseError::TooManyArguments {
            context: ArgContext::Names,
            expected: Arity::Exactly(3),
            got: 4,
        };
        assert_eq!(err.arg_context(), Some(&ArgContext::Names));
        assert_eq!(MessageParseError::EmptyLine.arg_context(), None);
    }
}
