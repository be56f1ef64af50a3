//! Fuzz target for column label and state normalization.

#![no_main]

use libfuzzer_sys::fuzz_target;
use refinery::{Column, StateMode, fix_column_names, fix_state_values};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    if let Ok(content) = std::str::from_utf8(data) {
        let labels: Vec<&str> = content.lines().collect();
        let names = fix_column_names(&labels).into_output();
        assert_eq!(names.len(), labels.len());

        let column = Column::from_strings("fuzz", labels);
        for mode in StateMode::ALL {
            let _ = fix_state_values(&column, mode.as_str());
        }
    }
});
