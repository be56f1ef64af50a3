//! Fuzz target for numeric extraction.
//!
//! This fuzzer tests that the numeric normalizer:
//! 1. Never panics on malformed numbers
//! 2. Never emits non-finite floats
//! 3. Handles every presentation mode

#![no_main]

use libfuzzer_sys::fuzz_target;
use refinery::{Column, NumericMode, Value, fix_numeric_values};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    if let Ok(content) = std::str::from_utf8(data) {
        let column = Column::from_strings("fuzz", content.lines());

        for mode in NumericMode::ALL {
            let out = fix_numeric_values(&column, mode.as_str()).into_output();
            assert_eq!(out.len(), column.len());
            for value in out.iter() {
                if let Value::Float(x) = value {
                    assert!(x.is_finite());
                }
            }
        }
    }
});
