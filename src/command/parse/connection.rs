use super::check;
use crate::arity::Arity;
use crate::callback::{Callback, Origin};
use crate::error::Result;
use crate::util::get_or_none;

pub(in crate::command) fn parse<C>(
    origin: &Origin<'_>,
    cmd: &str,
    args: &[&str],
    callback: &mut C,
) -> Result<C::Output>
where
    C: Callback + ?Sized,
{
    let output = match cmd {
        "NICK" => {
            check(cmd, args, Arity::Exactly(1))?;
            callback.on_nick(origin, args[0])
        }
        "QUIT" => {
            check(cmd, args, Arity::Between(0, 1))?;
            callback.on_quit(origin, get_or_none(args, 0))
        }
        _ => unreachable!("connection::parse called with non-connection command: {}", cmd),
    };

    Ok(output)
}
