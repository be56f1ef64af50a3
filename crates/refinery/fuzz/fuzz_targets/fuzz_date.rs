//! Fuzz target for date parsing and formatting.
//!
//! This fuzzer tests that the date transformer:
//! 1. Never panics on any input values
//! 2. Always yields a column of the input's length
//! 3. chrono format matching doesn't crash on pathological input

#![no_main]

use libfuzzer_sys::fuzz_target;
use refinery::{Column, DateMode, fix_date_values};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs
    if data.len() > 10_000 {
        return;
    }

    if let Ok(content) = std::str::from_utf8(data) {
        // One value per line, so a single input exercises several rows
        let column = Column::from_strings("fuzz", content.lines());

        for mode in DateMode::ALL {
            let out = fix_date_values(&column, mode.as_str()).into_output();
            assert_eq!(out.len(), column.len());
        }
    }
});
