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
        "JOIN" => {
            check(cmd, args, Arity::AtLeast(1))?;
            callback.on_join(origin, args[0], &args[1..])
        }
        "PART" => {
            check(cmd, args, Arity::Between(1, 2))?;
            callback.on_part(origin, args[0], get_or_none(args, 1))
        }
        "TOPIC" => {
            check(cmd, args, Arity::Between(1, 2))?;
            callback.on_topic(origin, args[0], get_or_none(args, 1))
        }
        "INVITE" => {
            check(cmd, args, Arity::Exactly(2))?;
            callback.on_invite(origin, args[0], args[1])
        }
        "KICK" => {
            check(cmd, args, Arity::Between(2, 3))?;
            callback.on_kick(origin, args[0], args[1], get_or_none(args, 2))
        }
        "MODE" => {
            check(cmd, args, Arity::AtLeast(2))?;
            callback.on_mode(origin, args[0], &args[1..])
        }
        _ => unreachable!("channel::parse called with non-channel command: {}", cmd),
    };

    Ok(output)
}
