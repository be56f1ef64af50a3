//! Refinery: column value normalization for messy tabular data.
//!
//! Refinery turns inconsistent column values into canonical forms and back
//! into presentation forms: names into consistent casing, free-text dates
//! into timestamps and fixed layouts, US state references into names or
//! codes, and decorated numbers (`"$1,000"`, `"50%"`) into typed values.
//!
//! # Core Principles
//!
//! - **Never abort on data**: malformed values become null or pass through;
//!   column-level problems return the input unchanged with a diagnostic
//! - **Non-destructive**: every transformation builds a new column
//! - **Host-agnostic**: no file I/O; hosts hand in columns and get columns back
//!
//! # Example
//!
//! ```
//! use refinery::{Column, ElementKind, Refinery, Value};
//!
//! let refinery = Refinery::new();
//! let prices = Column::from_strings("price", ["$1,000", "50%", "bogus"]);
//!
//! let result = refinery.apply("fix_numeric_values", &prices, Some("standardize")).unwrap();
//! let column = result.output();
//!
//! assert_eq!(column.kind(), ElementKind::Float);
//! assert_eq!(column.values(), &[Value::Float(1000.0), Value::Float(0.5), Value::Null]);
//! ```

pub mod column;
pub mod directory;
pub mod error;
pub mod names;
pub mod registry;
pub mod transform;

mod refinery;

pub use crate::refinery::{Refinery, RefineryConfig};
pub use column::{Column, ColumnStatistics, ElementKind, NumericSummary, Value};
pub use directory::StateDirectory;
pub use error::{RefineryError, Result};
pub use names::{fix_column_names, normalize_label};
pub use registry::{Registry, TransformationSpec, Transformer};
pub use transform::{
    CaseMode, DateConfig, DateLayout, DateMode, NumericConfig, NumericMode, ParseModeError,
    StateMode, Transformed, fix_date_values, fix_name_values, fix_numeric_values,
    fix_state_values,
};
