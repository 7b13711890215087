//! Fuzz target for date parsing.
//!
//! Exercises the format list and the ordinal-suffix regex on arbitrary text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scrub::transform::{normalize_text, parse_datetime};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    if let Ok(content) = std::str::from_utf8(data) {
        let _ = parse_datetime(content);
        // Values reach the date stage already title-cased.
        let _ = parse_datetime(&normalize_text(content));
    }
});
