//! Fuzz target for the CSV parser.
//!
//! The parser must never panic on malformed input, whatever the bytes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scrub::Parser;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let _ = Parser::new().parse_bytes(data);
});
