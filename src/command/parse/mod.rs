//! Per-family argument parsers, grouped the way RFC 2812 groups commands.

pub(super) mod channel;
pub(super) mod connection;
pub(super) mod ircv3;
pub(super) mod messaging;

use crate::arity::Arity;
use crate::error::{ArgContext, Result};

/// Check `args` against `arity`, naming `cmd` on failure.
fn check(cmd: &str, args: &[&str], arity: Arity) -> Result<()> {
    arity.check(args, || ArgContext::Command(cmd.to_owned()))
}
