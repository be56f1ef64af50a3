//! Column value transformers.
//!
//! Each transformer takes a column and a mode and returns a new column of
//! the same length and name. Bad data never produces an error: values that
//! cannot be handled become null or pass through, and column-level problems
//! (wrong kind, unknown mode) hand back the input as [`Transformed::Unchanged`].

pub mod dates;
pub mod numeric;
mod outcome;
pub mod states;
pub mod strings;

pub use dates::{DateConfig, DateLayout, DateMode, fix_date_values};
pub use numeric::{NumericConfig, NumericMode, fix_numeric_values};
pub use outcome::{ParseModeError, Transformed};
pub use states::{StateMode, fix_state_values};
pub use strings::{CaseMode, fix_name_values};
