//! Fuzz target for IRC line parsing
//!
//! Feeds arbitrary input through the tokenizer and the full dispatch cascade
//! and checks that neither panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    // Only fuzz valid UTF-8 strings to focus on protocol-level issues
    if let Ok(input) = str::from_utf8(data) {
        // Lines over 8191 bytes exceed even the tagged-message limit
        if input.len() > 8191 {
            return;
        }

        let tokenized = slirc_syntax::Line::parse(input);
        let parsed = input.parse::<slirc_syntax::Message>();

        // A line the tokenizer rejects can never dispatch
        if tokenized.is_err() {
            assert!(parsed.is_err());
        }
    }
});
