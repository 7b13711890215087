//! Fuzz target for the full cleaning pass.
//!
//! Any table the parser accepts must clean without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scrub::{NullSink, Parser, Pipeline};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    if let Ok(table) = Parser::new().parse_bytes(data) {
        let _ = Pipeline::new().clean(table, &mut NullSink);
    }
});
