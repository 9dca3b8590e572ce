//! Fan-out of one event to several callbacks.

use super::{Callback, Origin};

/// Invokes every registered callback, in registration order, for each event.
///
/// Registered callbacks produce `()`; wrap a callback with another `Output`
/// in one that discards it.
#[derive(Default)]
pub struct Delegating<'a> {
    callbacks: Vec<Box<dyn Callback<Output = ()> + 'a>>,
}

impl<'a> Delegating<'a> {
    /// An empty fan-out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` after the ones already present.
    pub fn push(&mut self, callback: impl Callback<Output = ()> + 'a) {
        self.callbacks.push(Box::new(callback));
    }

    /// Register `callback` and return `self`, for chaining.
    pub fn with(mut self, callback: impl Callback<Output = ()> + 'a) -> Self {
        self.push(callback);
        self
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether no callback is registered.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl std::fmt::Debug for Delegating<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Delegating")
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

macro_rules! fan_out {
    ($($name:ident($($arg:ident: $ty:ty),*);)*) => {
        $(
            fn $name(&mut self, origin: &Origin<'_>, $($arg: $ty),*) {
                for callback in &mut self.callbacks {
                    callback.$name(origin, $($arg),*);
                }
            }
        )*
    };
}

impl Callback for Delegating<'_> {
    type Output = ();

    fan_out! {
        on_unhandled(event: &'static str);
        on_ping(server: Option<&str>);
        on_pong(server: &str, token: Option<&str>);
        on_quit(reason: Option<&str>);
        on_nick(nick: &str);
        on_invite(target: &str, channel: &str);
        on_account(account: &str);
        on_authenticate(data: &str);
        on_part(channel: &str, reason: Option<&str>);
        on_privmsg(target: &str, message: &str);
        on_notice(target: &str, message: &str);
        on_join(channel: &str, args: &[&str]);
        on_mode(target: &str, args: &[&str]);
        on_kick(channel: &str, user: &str, reason: Option<&str>);
        on_chghost(new_user: &str, new_host: &str);
        on_away(message: Option<&str>);
        on_batch(reference: &str, kind: &str, args: &[&str]);
        on_topic(channel: &str, topic: Option<&str>);
        on_error(message: &str);
        on_setname(realname: &str);
        on_unknown_command(command: &str, args: &[&str]);
        on_cap_ls(mask: &str, final_line: bool, caps: Option<&[&str]>);
        on_cap_list(mask: &str, final_line: bool, caps: Option<&[&str]>);
        on_cap_ack(mask: &str, caps: Option<&[&str]>);
        on_cap_nak(mask: &str, caps: Option<&[&str]>);
        on_cap_new(mask: &str, caps: Option<&[&str]>);
        on_cap_del(mask: &str, caps: Option<&[&str]>);
        on_unknown_cap(mask: &str, subcommand: &str, args: &[&str]);
        on_welcome(target: &str, message: &str);
        on_your_host(target: &str, message: &str);
        on_created(target: &str, message: &str);
        on_isupport(target: &str, message: &str, tokens: &[&str]);
        on_topic_reply(target: &str, channel: &str, topic: &str);
        on_names(target: &str, marker: Option<char>, channel: &str, names: &[&str]);
        on_end_of_names(target: &str, channel: &str, message: &str);
        on_motd(target: &str, message: &str);
        on_motd_start(target: &str, message: &str);
        on_end_of_motd(target: &str, message: &str);
        on_nickname_in_use(target: &str, nick: &str, message: &str);
        on_unknown_code(target: &str, code: u16, args: &[&str]);
    }
}
