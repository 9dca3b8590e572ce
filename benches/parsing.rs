//! Benchmarks for IRC line tokenizing and dispatch.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slirc_syntax::{Callback, Line, Message, Origin};

/// Simple PING message
const SIMPLE_MESSAGE: &str = "PING :irc.example.com";

/// Message with prefix
const PREFIX_MESSAGE: &str = ":nick!user@host PRIVMSG #channel :Hello, world!";

/// Message with IRCv3 tags
const TAGGED_MESSAGE: &str = "@time=2023-01-01T00:00:00.000Z;msgid=abc123;+example/tag=value :nick!user@host PRIVMSG #channel :Hello with tags!";

/// Numeric response
const NUMERIC_RESPONSE: &str = ":irc.server.net 001 nickname :Welcome to the IRC Network nickname!user@host";

/// ISUPPORT with many tokens
const ISUPPORT: &str = ":irc.server.net 005 nickname CHANTYPES=# EXCEPTS INVEX CHANMODES=eIbq,k,flj,CFLMPQScgimnprstz CHANLIMIT=#:120 PREFIX=(ov)@+ MAXLIST=bqeI:100 MODES=4 NETWORK=example KNOCK STATUSMSG=@+ CALLERID=g :are supported by this server";

/// Long NAMES reply
const NAMES_REPLY: &str = ":irc.server.net 353 nickname # #channel :@op1 @op2 +voice1 +voice2 user1 user2 user3 user4 user5 user6 user7 user8 user9 user10";

/// Multi-line CAP LS
const CAP_LS: &str = ":irc.server.net CAP * LS * :account-notify away-notify chghost extended-join multi-prefix sasl=PLAIN,EXTERNAL server-time";

/// Counts events without allocating.
struct Counter(usize);

impl Callback for Counter {
    type Output = usize;

    fn on_unhandled(&mut self, _origin: &Origin<'_>, _event: &'static str) -> usize {
        self.0 += 1;
        self.0
    }
}

const LINES: [(&str, &str); 7] = [
    ("simple_ping", SIMPLE_MESSAGE),
    ("with_prefix", PREFIX_MESSAGE),
    ("with_tags", TAGGED_MESSAGE),
    ("numeric_response", NUMERIC_RESPONSE),
    ("isupport", ISUPPORT),
    ("names_reply", NAMES_REPLY),
    ("cap_ls", CAP_LS),
];

fn benchmark_tokenizing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tokenizing");

    for (name, line) in LINES {
        group.bench_with_input(BenchmarkId::new("line", name), line, |b, s| {
            b.iter(|| {
                let line = Line::parse(black_box(s)).unwrap();
                black_box(line)
            })
        });
    }

    group.finish();
}

fn benchmark_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dispatch");

    for (name, line) in LINES {
        group.bench_with_input(BenchmarkId::new("callback", name), line, |b, s| {
            let mut counter = Counter(0);
            b.iter(|| {
                let n = slirc_syntax::parse(black_box(s), &mut counter).unwrap();
                black_box(n)
            })
        });
    }

    group.finish();
}

fn benchmark_owned(c: &mut Criterion) {
    let mut group = c.benchmark_group("Owned Message");

    for (name, line) in LINES {
        group.bench_with_input(BenchmarkId::new("from_str", name), line, |b, s| {
            b.iter(|| {
                let msg: Message = black_box(s).parse().unwrap();
                black_box(msg)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_tokenizing,
    benchmark_dispatch,
    benchmark_owned,
);

criterion_main!(benches);
