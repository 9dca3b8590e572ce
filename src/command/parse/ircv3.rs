use super::check;
use crate::arity::Arity;
use crate::callback::{Callback, Origin};
use crate::error::Result;

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
        "CAP" => {
            check(cmd, args, Arity::AtLeast(3))?;
            return crate::cap::parse(origin, args, callback);
        }
        "AUTHENTICATE" => {
            check(cmd, args, Arity::Exactly(1))?;
            callback.on_authenticate(origin, args[0])
        }
        "ACCOUNT" => {
            check(cmd, args, Arity::Exactly(1))?;
            callback.on_account(origin, args[0])
        }
        "BATCH" => {
            check(cmd, args, Arity::AtLeast(2))?;
            callback.on_batch(origin, args[0], args[1], &args[2..])
        }
        "CHGHOST" => {
            check(cmd, args, Arity::Exactly(2))?;
            callback.on_chghost(origin, args[0], args[1])
        }
        "SETNAME" => {
            check(cmd, args, Arity::Exactly(1))?;
            callback.on_setname(origin, args[0])
        }
        _ => unreachable!("ircv3::parse called with non-IRCv3 command: {}", cmd),
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use crate::command::parse as dispatch;
    use crate::error::{ArgContext, MessageParseError, Result};
    use crate::message::{CapSubCommand, Command, MessageBuilder};
    use crate::Origin;

    fn command(cmd: &str, args: &[&str]) -> Result<Command> {
        dispatch(&Origin::none(), cmd, args, &mut MessageBuilder).map(|m| m.command)
    }

    fn too_few(result: Result<Command>) -> bool {
        matches!(result, Err(MessageParseError::TooFewArguments { .. }))
    }

    fn too_many(result: Result<Command>) -> bool {
        matches!(result, Err(MessageParseError::TooManyArguments { .. }))
    }

    #[test]
    fn test_cap_needs_three_arguments() {
        assert!(matches!(
            command("CAP", &["*", "LS"]),
            Err(MessageParseError::TooFewArguments { context: ArgContext::Command(ref c), .. }) if c == "CAP"
        ));
        assert_eq!(
            command("CAP", &["*", "ACK", "sasl"]).unwrap(),
            Command::CAP("*".to_owned(), CapSubCommand::ACK(Some(vec!["sasl".to_owned()])))
        );
    }

    #[test]
    fn test_cap_forwards_whole_list() {
        assert_eq!(
            command("CAP", &["nick", "LS", "*", "multi-prefix sasl"]).unwrap(),
            Command::CAP(
                "nick".to_owned(),
                CapSubCommand::LS {
                    final_line: false,
                    caps: Some(vec!["multi-prefix".to_owned(), "sasl".to_owned()]),
                }
            )
        );
        assert!(matches!(
            command("CAP", &["a", "b", "c", "d", "e"]),
            Err(MessageParseError::TooManyArguments { context: ArgContext::Cap, .. })
        ));
    }

    #[test]
    fn test_authenticate_and_account() {
        assert_eq!(
            command("AUTHENTICATE", &["+"]).unwrap(),
            Command::AUTHENTICATE("+".to_owned())
        );
        assert!(too_few(command("AUTHENTICATE", &[])));
        assert_eq!(
            command("ACCOUNT", &["accountname"]).unwrap(),
            Command::ACCOUNT("accountname".to_owned())
        );
        assert!(too_many(command("ACCOUNT", &["a", "b"])));
    }

    #[test]
    fn test_batch() {
        assert!(too_few(command("BATCH", &["+ref"])));
        assert_eq!(
            command("BATCH", &["+ref", "netsplit", "irc.a", "irc.b"]).unwrap(),
            Command::BATCH(
                "+ref".to_owned(),
                "netsplit".to_owned(),
                vec!["irc.a".to_owned(), "irc.b".to_owned()]
            )
        );
        assert_eq!(
            command("BATCH", &["-ref", "netsplit"]).unwrap(),
            Command::BATCH("-ref".to_owned(), "netsplit".to_owned(), vec![])
        );
    }

    #[test]
    fn test_chghost_and_setname() {
        assert_eq!(
            command("CHGHOST", &["user", "new.host"]).unwrap(),
            Command::CHGHOST("user".to_owned(), "new.host".to_owned())
        );
        assert!(too_few(command("CHGHOST", &["user"])));
        assert!(too_many(command("CHGHOST", &["a", "b", "c"])));
        assert_eq!(
            command("SETNAME", &["New Name"]).unwrap(),
            Command::SETNAME("New Name".to_owned())
        );
        assert!(too_few(command("SETNAME", &[])));
    }
}
