//! Code conversion and trait implementations for [`Response`].

use super::Response;
use std::str::FromStr;

impl Response {
    /// Returns the numeric code as u16
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Creates a Response from a numeric code
    pub fn from_code(code: u16) -> Option<Response> {
        use self::Response::*;
        Some(match code {
            1 => RPL_WELCOME,
            2 => RPL_YOURHOST,
            3 => RPL_CREATED,
            5 => RPL_ISUPPORT,
            332 => RPL_TOPIC,
            353 => RPL_NAMREPLY,
            366 => RPL_ENDOFNAMES,
            372 => RPL_MOTD,
            375 => RPL_MOTDSTART,
            376 => RPL_ENDOFMOTD,
            433 => ERR_NICKNAMEINUSE,
            _ => return None,
        })
    }

    /// Check if this is an error response (4xx or 5xx)
    #[inline]
    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.code())
    }
}

impl FromStr for Response {
    type Err = ParseResponseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = crate::tokenizer::numeric_code(s).ok_or(ParseResponseError::InvalidFormat)?;
        Response::from_code(code).ok_or(ParseResponseError::UnknownCode(code))
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.code())
    }
}

/// Error when parsing a response code
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseResponseError {
    /// The string was not exactly three digits
    InvalidFormat,
    /// The numeric code has no dedicated handler
    UnknownCode(u16),
}

impl std::fmt::Display for ParseResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "invalid response code format"),
            Self::UnknownCode(code) => write!(f, "unknown response code: {}", code),
        }
    }
}

impl std::error::Error for ParseResponseError {}
