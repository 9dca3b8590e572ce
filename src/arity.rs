//! Argument-count contracts.
//!
//! Every recognized command and reply declares how many arguments it takes.
//! [`Arity::check`] validates a list against that contract and produces the
//! matching [`MessageParseError`] before anything is dispatched.

use std::fmt;

use crate::error::{ArgContext, MessageParseError, Result};

/// An argument-count contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// Exactly `n` arguments.
    Exactly(usize),
    /// Between `min` and `max` arguments, inclusive.
    Between(usize, usize),
    /// At least `n` arguments, no upper bound.
    AtLeast(usize),
}

impl Arity {
    /// Smallest accepted count.
    pub fn min(self) -> usize {
        match self {
            Arity::Exactly(n) | Arity::AtLeast(n) => n,
            Arity::Between(min, _) => min,
        }
    }

    /// Largest accepted count, if bounded.
    pub fn max(self) -> Option<usize> {
        match self {
            Arity::Exactly(n) => Some(n),
            Arity::Between(_, max) => Some(max),
            Arity::AtLeast(_) => None,
        }
    }

    /// Whether `count` satisfies this contract.
    pub fn accepts(self, count: usize) -> bool {
        count >= self.min() && !matches!(self.max(), Some(max) if count > max)
    }

    /// Validate `args` against this contract.
    ///
    /// The context is only built on failure.
    pub fn check<T>(self, args: &[T], context: impl FnOnce() -> ArgContext) -> Result<()> {
        let got = args.len();
        if got < self.min() {
            return Err(MessageParseError::TooFewArguments {
                context: context(),
                expected: self,
                got,
            });
        }
        if let Some(max) = self.max() {
            if got > max {
                return Err(MessageParseError::TooManyArguments {
                    context: context(),
                    expected: self,
                    got,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {}", n),
            Arity::Between(min, max) => write!(f, "{} to {}", min, max),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}
