use super::types::{CapSubCommand, Command, Message, Reply};
use crate::callback::{Callback, Origin};

/// [`Callback`] that materializes every event into an owned [`Message`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MessageBuilder;

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn owned_opt(value: Option<&str>) -> Option<String> {
    value.map(str::to_owned)
}

fn owned_caps(caps: Option<&[&str]>) -> Option<Vec<String>> {
    caps.map(owned)
}

impl MessageBuilder {
    fn message(origin: &Origin<'_>, command: Command) -> Message {
        Message {
            tags: origin.tags.map(owned),
            prefix: owned_opt(origin.prefix),
            command,
        }
    }

    fn reply(origin: &Origin<'_>, target: &str, reply: Reply) -> Message {
        Self::message(origin, Command::Response(target.to_owned(), reply))
    }

    fn cap(origin: &Origin<'_>, mask: &str, sub: CapSubCommand) -> Message {
        Self::message(origin, Command::CAP(mask.to_owned(), sub))
    }
}

impl Callback for MessageBuilder {
    type Output = Message;

    /// Every event has a dedicated override, so this only runs for events
    /// added to [`Callback`] without one; the event name becomes a raw command.
    fn on_unhandled(&mut self, origin: &Origin<'_>, event: &'static str) -> Message {
        Self::message(origin, Command::Raw(event.to_owned(), Vec::new()))
    }

    fn on_ping(&mut self, origin: &Origin<'_>, server: Option<&str>) -> Message {
        Self::message(origin, Command::PING(owned_opt(server)))
    }

    fn on_pong(&mut self, origin: &Origin<'_>, server: &str, token: Option<&str>) -> Message {
        Self::message(origin, Command::PONG(server.to_owned(), owned_opt(token)))
    }

    fn on_quit(&mut self, origin: &Origin<'_>, reason: Option<&str>) -> Message {
        Self::message(origin, Command::QUIT(owned_opt(reason)))
    }

    fn on_nick(&mut self, origin: &Origin<'_>, nick: &str) -> Message {
        Self::message(origin, Command::NICK(nick.to_owned()))
    }

    fn on_invite(&mut self, origin: &Origin<'_>, target: &str, channel: &str) -> Message {
        Self::message(origin, Command::INVITE(target.to_owned(), channel.to_owned()))
    }

    fn on_account(&mut self, origin: &Origin<'_>, account: &str) -> Message {
        Self::message(origin, Command::ACCOUNT(account.to_owned()))
    }

    fn on_authenticate(&mut self, origin: &Origin<'_>, data: &str) -> Message {
        Self::message(origin, Command::AUTHENTICATE(data.to_owned()))
    }

    fn on_part(&mut self, origin: &Origin<'_>, channel: &str, reason: Option<&str>) -> Message {
        Self::message(origin, Command::PART(channel.to_owned(), owned_opt(reason)))
    }

    fn on_privmsg(&mut self, origin: &Origin<'_>, target: &str, message: &str) -> Message {
        Self::message(origin, Command::PRIVMSG(target.to_owned(), message.to_owned()))
    }

    fn on_notice(&mut self, origin: &Origin<'_>, target: &str, message: &str) -> Message {
        Self::message(origin, Command::NOTICE(target.to_owned(), message.to_owned()))
    }

    fn on_join(&mut self, origin: &Origin<'_>, channel: &str, args: &[&str]) -> Message {
        Self::message(origin, Command::JOIN(channel.to_owned(), owned(args)))
    }

    fn on_mode(&mut self, origin: &Origin<'_>, target: &str, args: &[&str]) -> Message {
        Self::message(origin, Command::MODE(target.to_owned(), owned(args)))
    }

    fn on_kick(
        &mut self,
        origin: &Origin<'_>,
        channel: &str,
        user: &str,
        reason: Option<&str>,
    ) -> Message {
        Self::message(
            origin,
            Command::KICK(channel.to_owned(), user.to_owned(), owned_opt(reason)),
        )
    }

    fn on_chghost(&mut self, origin: &Origin<'_>, new_user: &str, new_host: &str) -> Message {
        Self::message(origin, Command::CHGHOST(new_user.to_owned(), new_host.to_owned()))
    }

    fn on_away(&mut self, origin: &Origin<'_>, message: Option<&str>) -> Message {
        Self::message(origin, Command::AWAY(owned_opt(message)))
    }

    fn on_batch(
        &mut self,
        origin: &Origin<'_>,
        reference: &str,
        kind: &str,
        args: &[&str],
    ) -> Message {
        Self::message(
            origin,
            Command::BATCH(reference.to_owned(), kind.to_owned(), owned(args)),
        )
    }

    fn on_topic(&mut self, origin: &Origin<'_>, channel: &str, topic: Option<&str>) -> Message {
        Self::message(origin, Command::TOPIC(channel.to_owned(), owned_opt(topic)))
    }

    fn on_error(&mut self, origin: &Origin<'_>, message: &str) -> Message {
        Self::message(origin, Command::ERROR(message.to_owned()))
    }

    fn on_setname(&mut self, origin: &Origin<'_>, realname: &str) -> Message {
        Self::message(origin, Command::SETNAME(realname.to_owned()))
    }

    fn on_unknown_command(&mut self, origin: &Origin<'_>, command: &str, args: &[&str]) -> Message {
        Self::message(origin, Command::Raw(command.to_owned(), owned(args)))
    }

    fn on_cap_ls(
        &mut self,
        origin: &Origin<'_>,
        mask: &str,
        final_line: bool,
        caps: Option<&[&str]>,
    ) -> Message {
        let caps = owned_caps(caps);
        Self::cap(origin, mask, CapSubCommand::LS { final_line, caps })
    }

    fn on_cap_list(
        &mut self,
        origin: &Origin<'_>,
        mask: &str,
        final_line: bool,
        caps: Option<&[&str]>,
    ) -> Message {
        let caps = owned_caps(caps);
        Self::cap(origin, mask, CapSubCommand::LIST { final_line, caps })
    }

    fn on_cap_ack(&mut self, origin: &Origin<'_>, mask: &str, caps: Option<&[&str]>) -> Message {
        Self::cap(origin, mask, CapSubCommand::ACK(owned_caps(caps)))
    }

    fn on_cap_nak(&mut self, origin: &Origin<'_>, mask: &str, caps: Option<&[&str]>) -> Message {
        Self::cap(origin, mask, CapSubCommand::NAK(owned_caps(caps)))
    }

    fn on_cap_new(&mut self, origin: &Origin<'_>, mask: &str, caps: Option<&[&str]>) -> Message {
        Self::cap(origin, mask, CapSubCommand::NEW(owned_caps(caps)))
    }

    fn on_cap_del(&mut self, origin: &Origin<'_>, mask: &str, caps: Option<&[&str]>) -> Message {
        Self::cap(origin, mask, CapSubCommand::DEL(owned_caps(caps)))
    }

    fn on_unknown_cap(
        &mut self,
        origin: &Origin<'_>,
        mask: &str,
        subcommand: &str,
        args: &[&str],
    ) -> Message {
        Self::cap(
            origin,
            mask,
            CapSubCommand::Unknown(subcommand.to_owned(), owned(args)),
        )
    }

    fn on_welcome(&mut self, origin: &Origin<'_>, target: &str, message: &str) -> Message {
        Self::reply(origin, target, Reply::Welcome(message.to_owned()))
    }

    fn on_your_host(&mut self, origin: &Origin<'_>, target: &str, message: &str) -> Message {
        Self::reply(origin, target, Reply::YourHost(message.to_owned()))
    }

    fn on_created(&mut self, origin: &Origin<'_>, target: &str, message: &str) -> Message {
        Self::reply(origin, target, Reply::Created(message.to_owned()))
    }

    fn on_isupport(
        &mut self,
        origin: &Origin<'_>,
        target: &str,
        message: &str,
        tokens: &[&str],
    ) -> Message {
        let reply = Reply::Isupport {
            message: message.to_owned(),
            tokens: owned(tokens),
        };
        Self::reply(origin, target, reply)
    }

    fn on_topic_reply(
        &mut self,
        origin: &Origin<'_>,
        target: &str,
        channel: &str,
        topic: &str,
    ) -> Message {
        let reply = Reply::Topic {
            channel: channel.to_owned(),
            topic: topic.to_owned(),
        };
        Self::reply(origin, target, reply)
    }

    fn on_names(
        &mut self,
        origin: &Origin<'_>,
        target: &str,
        marker: Option<char>,
        channel: &str,
        names: &[&str],
    ) -> Message {
        let reply = Reply::Names {
            marker,
            channel: channel.to_owned(),
            names: owned(names),
        };
        Self::reply(origin, target, reply)
    }

    fn on_end_of_names(
        &mut self,
        origin: &Origin<'_>,
        target: &str,
        channel: &str,
        message: &str,
    ) -> Message {
        let reply = Reply::EndOfNames {
            channel: channel.to_owned(),
            message: message.to_owned(),
        };
        Self::reply(origin, target, reply)
    }

    fn on_motd(&mut self, origin: &Origin<'_>, target: &str, message: &str) -> Message {
        Self::reply(origin, target, Reply::Motd(message.to_owned()))
    }

    fn on_motd_start(&mut self, origin: &Origin<'_>, target: &str, message: &str) -> Message {
        Self::reply(origin, target, Reply::MotdStart(message.to_owned()))
    }

    fn on_end_of_motd(&mut self, origin: &Origin<'_>, target: &str, message: &str) -> Message {
        Self::reply(origin, target, Reply::EndOfMotd(message.to_owned()))
    }

    fn on_nickname_in_use(
        &mut self,
        origin: &Origin<'_>,
        target: &str,
        nick: &str,
        message: &str,
    ) -> Message {
        let reply = Reply::NicknameInUse {
            nick: nick.to_owned(),
            message: message.to_owned(),
        };
        Self::reply(origin, target, reply)
    }

    fn on_unknown_code(
        &mut self,
        origin: &Origin<'_>,
        target: &str,
        code: u16,
        args: &[&str],
    ) -> Message {
        Self::reply(origin, target, Reply::Unknown(code, owned(args)))
    }
}
