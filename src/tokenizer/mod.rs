//! Nom-based IRC line tokenizer.
//!
//! Splits one raw line into its syntactic fields without interpreting them:
//!
//! ```text
//! [@tags SP] [:prefix SP] <command> [SP params...] [SP :trailing]
//! ```
//!
//! The tokenizer borrows from the input; nothing is allocated except the
//! tag and parameter vectors.

pub mod tags;

use nom::{
    bytes::complete::{take_till, take_till1},
    character::complete::char,
    error::{context, VerboseError},
    sequence::{preceded, terminated},
    IResult,
};

use crate::callback::Origin;
use crate::error::{MessageParseError, Result};

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

/// Tags region: `@` up to and including the separating space.
fn tags_section(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing IRCv3 message tags",
        terminated(preceded(char('@'), take_till(|c: char| c == ' ')), char(' ')),
    )(input)
}

/// Prefix region: `:` up to and including the separating space.
fn prefix_section(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message prefix",
        terminated(preceded(char(':'), take_till(|c: char| c == ' ')), char(' ')),
    )(input)
}

/// Command word or numeric code.
fn command_selector(input: &str) -> ParseResult<&str, &str> {
    context("parsing command", take_till1(|c: char| c == ' '))(input)
}

/// Split the parameter section. A token starting with `:` swallows the rest
/// of the line, spaces included.
fn split_params(mut rest: &str) -> Vec<&str> {
    let mut params = Vec::new();
    loop {
        if let Some(trailing) = rest.strip_prefix(':') {
            params.push(trailing);
            break;
        }
        match rest.split_once(' ') {
            Some((middle, tail)) => {
                params.push(middle);
                rest = tail;
            }
            None => {
                params.push(rest);
                break;
            }
        }
    }
    params
}

/// A tokenized IRC line with borrowed string slices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    /// Raw tags split on `;`, or `None` when the line had no `@` section.
    pub tags: Option<Vec<&'a str>>,
    /// Prefix without the leading `:`.
    pub prefix: Option<&'a str>,
    /// Command word or 3-digit numeric.
    pub command: &'a str,
    /// Parameters, with the trailing parameter's `:` stripped.
    pub params: Vec<&'a str>,
}

impl<'a> Line<'a> {
    /// Tokenize a raw IRC line.
    ///
    /// Surrounding whitespace, including a CRLF terminator, is ignored.
    pub fn parse(input: &'a str) -> Result<Self> {
        let line = input.trim_matches(|c: char| c.is_ascii_whitespace());
        if line.is_empty() {
            return Err(MessageParseError::EmptyLine);
        }

        let (rest, tags) = if line.starts_with('@') {
            let (rest, raw) = tags_section(line)
                .map_err(|_| MessageParseError::MalformedLine("tags without command"))?;
            (rest, Some(raw.split(';').collect::<Vec<_>>()))
        } else {
            (line, None)
        };

        let (rest, prefix) = if rest.starts_with(':') {
            let (rest, raw) = prefix_section(rest)
                .map_err(|_| MessageParseError::MalformedLine("prefix without command"))?;
            (rest, Some(raw))
        } else {
            (rest, None)
        };

        let (rest, command) = command_selector(rest)
            .map_err(|_| MessageParseError::MalformedLine("missing command"))?;

        let params = match rest.strip_prefix(' ') {
            Some(params) => split_params(params),
            None => Vec::new(),
        };

        Ok(Line {
            tags,
            prefix,
            command,
            params,
        })
    }

    /// Tags and prefix of this line, for threading through the cascade.
    pub fn origin(&self) -> Origin<'_> {
        Origin {
            tags: self.tags.as_deref(),
            prefix: self.prefix,
        }
    }

    /// Whether the command selector is a 3-digit numeric reply code.
    pub fn is_numeric(&self) -> bool {
        numeric_code(self.command).is_some()
    }
}

/// Parse a selector of exactly three ASCII digits into a reply code.
pub(crate) fn numeric_code(selector: &str) -> Option<u16> {
    let bytes = selector.as_bytes();
    if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(
        bytes
            .iter()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0')),
    )
}

/// Tokenize `input` and hand the pieces to `on_tokenized`, returning its result.
pub fn tokenize<'a, T>(input: &'a str, on_tokenized: impl FnOnce(&Line<'a>) -> T) -> Result<T> {
    let line = Line::parse(input)?;
    Ok(on_tokenized(&line))
}
