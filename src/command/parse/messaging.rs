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
        "PRIVMSG" => {
            check(cmd, args, Arity::Exactly(2))?;
            callback.on_privmsg(origin, args[0], args[1])
        }
        "NOTICE" => {
            check(cmd, args, Arity::Exactly(2))?;
            callback.on_notice(origin, args[0], args[1])
        }
        "PING" => {
            check(cmd, args, Arity::Between(0, 1))?;
            callback.on_ping(origin, get_or_none(args, 0))
        }
        "PONG" => {
            check(cmd, args, Arity::Between(1, 2))?;
            callback.on_pong(origin, args[0], get_or_none(args, 1))
        }
        "ERROR" => {
            check(cmd, args, Arity::Exactly(1))?;
            callback.on_error(origin, args[0])
        }
        "AWAY" => {
            check(cmd, args, Arity::Between(0, 1))?;
            callback.on_away(origin, get_or_none(args, 0))
        }
        _ => unreachable!("messaging::parse called with non-messaging command: {}", cmd),
    };

    Ok(output)
}
