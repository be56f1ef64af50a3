//! Property-based tests for Refinery transformers.
//!
//! These tests use proptest to generate random inputs and verify that
//! transformers maintain their invariants under all conditions.
//!
//! # Testing Philosophy
//!
//! Property-based tests verify:
//! 1. **No panics**: Transformers never crash on any input
//! 2. **Determinism**: Same input always produces same output
//! 3. **Shape**: Output columns keep the input's length and name
//! 4. **Invariants**: Label charset, idempotence, null placement
//!
//! # Running Property Tests
//!
//! ```bash
//! # Run all property tests
//! cargo test -p refinery --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p refinery --test property_tests
//! ```

use proptest::prelude::*;

use refinery::{
    CaseMode, Column, DateMode, ElementKind, NumericMode, StateMode, Value, fix_column_names,
    fix_date_values, fix_name_values, fix_numeric_values, fix_state_values,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Generate arbitrary ASCII strings (common case)
fn ascii_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_\\-\\.\\s]{0,40}"
}

/// Generate labels from alphanumerics, whitespace and replaced punctuation
fn label_like() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \\t_!@#$%^&*+=<>?;:|\\\\/\"'`~]{0,30}"
}

/// Generate strings that look like decorated numbers
fn number_like() -> impl Strategy<Value = String> {
    prop_oneof![
        // Currency
        "[$€£]?-?[0-9]{1,3}(,[0-9]{3}){0,3}(\\.[0-9]{1,2})?",
        // Percentages
        "-?[0-9]{1,3}(\\.[0-9]{1,2})? ?%",
        // Embedded in text
        "[a-z]{0,5} ?[0-9]{1,6} ?[a-z]{0,5}",
        // Null tokens
        "(nan|None|NULL|)",
        // Random text
        "[a-zA-Z0-9 .,%$-]{0,15}",
    ]
}

/// Generate strings that look like dates
fn date_like() -> impl Strategy<Value = String> {
    prop_oneof![
        // ISO format
        "[12][0-9]{3}-[01][0-9]-[0-3][0-9]",
        // US format
        "[01][0-9]/[0-3][0-9]/[12][0-9]{3}",
        // European format
        "[0-3][0-9]-[01][0-9]-[12][0-9]{3}",
        // Month name
        "(January|March|July|December) [0-3]?[0-9], [12][0-9]{3}",
        // Random text
        "[a-zA-Z0-9\\-/]{0,15}",
    ]
}

/// Generate strings that look like state references
fn state_like() -> impl Strategy<Value = String> {
    prop_oneof![
        "(ny|NY|Ca|tx|dc|Wa)",
        "(new york|CALIFORNIA|District Of Columbia|west virginia)",
        " ?[a-zA-Z ]{0,12} ?",
    ]
}

/// Generate completely random bytes (edge cases)
fn random_bytes() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 0..100)
        .prop_filter_map("valid UTF-8", |bytes| String::from_utf8(bytes).ok())
}

/// Wrap values in a text column, with some values missing.
fn text_column(values: Vec<Option<String>>) -> Column {
    Column::text("col", values)
}

fn optional(strategy: impl Strategy<Value = String>) -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(prop::option::weighted(0.9, strategy), 0..20)
}

// =============================================================================
// Name Normalizer Properties
// =============================================================================

mod name_tests {
    use super::*;

    proptest! {
        /// Output keeps length and order, and every label is plain snake_case.
        #[test]
        fn labels_are_snake_case(labels in prop::collection::vec(label_like(), 0..10)) {
            let names = fix_column_names(&labels).into_output();
            prop_assert_eq!(names.len(), labels.len());

            for name in &names {
                prop_assert!(
                    name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                    "unexpected character in {:?}", name
                );
                prop_assert!(!name.starts_with('_') && !name.ends_with('_'));
                prop_assert!(!name.contains("__"));
            }
        }

        /// Normalizing twice changes nothing.
        #[test]
        fn labels_are_idempotent(labels in prop::collection::vec(label_like(), 0..10)) {
            let once = fix_column_names(&labels).into_output();
            let twice = fix_column_names(&once).into_output();
            prop_assert_eq!(once, twice);
        }

        /// Never panics on random UTF-8.
        #[test]
        fn labels_never_panic(labels in prop::collection::vec(random_bytes(), 0..5)) {
            let names = fix_column_names(&labels).into_output();
            prop_assert_eq!(names.len(), labels.len());
        }
    }
}

// =============================================================================
// String Value Properties
// =============================================================================

mod case_tests {
    use super::*;

    proptest! {
        /// Every mode keeps shape and null positions.
        #[test]
        fn case_modes_keep_shape(values in optional(ascii_string())) {
            let column = text_column(values);
            for mode in CaseMode::ALL {
                let out = fix_name_values(&column, mode.as_str()).into_output();
                prop_assert_eq!(out.len(), column.len());
                prop_assert_eq!(out.name(), column.name());
                for i in 0..column.len() {
                    prop_assert_eq!(out.is_null(i), column.is_null(i));
                }
            }
        }

        /// Applying a case mode twice is the same as applying it once.
        #[test]
        fn case_modes_are_idempotent(values in optional(ascii_string())) {
            let column = text_column(values);
            for mode in CaseMode::ALL {
                let once = fix_name_values(&column, mode.as_str()).into_output();
                let twice = fix_name_values(&once, mode.as_str()).into_output();
                prop_assert_eq!(once, twice);
            }
        }

        /// Unknown modes hand the column back untouched.
        #[test]
        fn unknown_case_mode_is_identity(values in optional(random_bytes()), mode in "[a-z]{6,10}") {
            prop_assume!(mode.parse::<CaseMode>().is_err());
            let column = text_column(values);
            let result = fix_name_values(&column, &mode);
            prop_assert!(!result.is_applied());
            prop_assert_eq!(result.into_output(), column);
        }
    }
}

// =============================================================================
// Date Properties
// =============================================================================

mod date_tests {
    use super::*;

    proptest! {
        /// Date parsing never panics and always yields timestamps.
        #[test]
        fn standardize_never_panics(values in optional(date_like())) {
            let column = text_column(values);
            let out = fix_date_values(&column, "standardize").into_output();
            prop_assert_eq!(out.kind(), ElementKind::Timestamp);
            prop_assert_eq!(out.len(), column.len());
        }

        /// Never panics on random UTF-8.
        #[test]
        fn standardize_never_panics_on_random_utf8(values in optional(random_bytes())) {
            let column = text_column(values);
            let out = fix_date_values(&column, "standardize").into_output();
            prop_assert_eq!(out.len(), column.len());
        }

        /// Layouts render text, with nulls exactly where parsing failed.
        #[test]
        fn layouts_preserve_nulls(values in optional(date_like())) {
            let column = text_column(values);
            let parsed = fix_date_values(&column, "standardize").into_output();

            for mode in DateMode::ALL.into_iter().skip(1) {
                let out = fix_date_values(&column, mode.as_str()).into_output();
                prop_assert_eq!(out.kind(), ElementKind::Text);
                for i in 0..column.len() {
                    prop_assert_eq!(out.is_null(i), parsed.is_null(i));
                }
            }
        }

        /// ISO rendering parses back to the same timestamp.
        #[test]
        fn iso_layout_round_trips(values in optional(date_like())) {
            let column = text_column(values);
            let parsed = fix_date_values(&column, "standardize").into_output();
            let iso = fix_date_values(&parsed, "yyyy-mm-dd").into_output();
            let reparsed = fix_date_values(&iso, "standardize").into_output();

            for (a, b) in parsed.iter().zip(reparsed.iter()) {
                let a = a.as_timestamp().map(|ts| ts.date());
                let b = b.as_timestamp().map(|ts| ts.date());
                prop_assert_eq!(a, b);
            }
        }
    }
}

// =============================================================================
// State Properties
// =============================================================================

mod state_tests {
    use super::*;

    proptest! {
        /// No mode ever nulls a present value.
        #[test]
        fn states_never_null_values(values in optional(state_like())) {
            let column = text_column(values);
            for mode in StateMode::ALL {
                let out = fix_state_values(&column, mode.as_str()).into_output();
                prop_assert_eq!(out.len(), column.len());
                for i in 0..column.len() {
                    prop_assert_eq!(out.is_null(i), column.is_null(i));
                }
            }
        }

        /// State resolution is deterministic.
        #[test]
        fn states_are_deterministic(values in optional(state_like()), mode in "(standardize|state_code|bogus)") {
            let column = text_column(values);
            let a = fix_state_values(&column, &mode);
            let b = fix_state_values(&column, &mode);
            prop_assert_eq!(a, b);
        }

        /// Code mode is idempotent.
        #[test]
        fn state_code_is_idempotent(values in optional(state_like())) {
            let column = text_column(values);
            let once = fix_state_values(&column, "state_code").into_output();
            let twice = fix_state_values(&once, "state_code").into_output();
            prop_assert_eq!(once, twice);
        }
    }
}

// =============================================================================
// Numeric Properties
// =============================================================================

mod numeric_tests {
    use super::*;

    proptest! {
        /// Every mode keeps length and never panics.
        #[test]
        fn numeric_modes_keep_shape(values in optional(number_like())) {
            let column = text_column(values);
            for mode in NumericMode::ALL {
                let out = fix_numeric_values(&column, mode.as_str()).into_output();
                prop_assert_eq!(out.len(), column.len());
                prop_assert_eq!(out.name(), column.name());
            }
        }

        /// Never panics on random UTF-8.
        #[test]
        fn numeric_never_panics_on_random_utf8(values in optional(random_bytes())) {
            let column = text_column(values);
            let out = fix_numeric_values(&column, "standardize").into_output();
            prop_assert_eq!(out.len(), column.len());
        }

        /// Standardize output is finite floats or nulls, and is idempotent.
        #[test]
        fn standardize_is_idempotent(values in optional(number_like())) {
            let column = text_column(values);
            let once = fix_numeric_values(&column, "standardize").into_output();

            prop_assert_eq!(once.kind(), ElementKind::Float);
            for value in once.iter() {
                match value {
                    Value::Float(x) => prop_assert!(x.is_finite()),
                    Value::Null => {}
                    other => prop_assert!(false, "unexpected value {:?}", other),
                }
            }

            let twice = fix_numeric_values(&once, "standardize").into_output();
            prop_assert_eq!(once, twice);
        }

        /// Whole numbers always come back as nullable integers under `id`.
        #[test]
        fn id_of_whole_numbers_is_integer(values in prop::collection::vec(prop::option::of(-1_000_000i64..1_000_000), 0..20)) {
            let column = Column::nullable_integers("id", values.clone());
            let out = fix_numeric_values(&column, "id").into_output();

            prop_assert_eq!(out.kind(), ElementKind::NullableInteger);
            let expected: Vec<Value> = values.into_iter().map(Value::from).collect();
            prop_assert_eq!(out.values(), expected.as_slice());
        }

        /// Money text always starts with a dollar sign and has two decimals.
        #[test]
        fn money_shape(x in -1e12f64..1e12) {
            let column = Column::floats("amount", [Some(x)]);
            let out = fix_numeric_values(&column, "money").into_output();
            let text = out.get(0).and_then(Value::as_str).unwrap_or_default().to_string();

            prop_assert!(text.starts_with('$'));
            let (_, cents) = text.rsplit_once('.').expect("decimal point");
            prop_assert_eq!(cents.len(), 2);
        }
    }
}
