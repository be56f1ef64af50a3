//! Column model: element kinds, values, and the column container.

mod cast;
mod column;
mod statistics;
mod types;

pub use column::Column;
pub use statistics::{ColumnStatistics, NumericSummary};
pub use types::{ElementKind, TIMESTAMP_DISPLAY_FORMAT, Value};
