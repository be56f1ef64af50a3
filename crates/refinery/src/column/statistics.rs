//! Column summaries for hosts that describe a column to an operator.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::column::Column;
use super::types::ElementKind;

/// Number of leading values kept as samples.
const SAMPLE_SIZE: usize = 10;

/// Statistics computed for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    /// Declared element kind.
    pub kind: ElementKind,
    /// Total number of values (including nulls).
    pub count: usize,
    /// Number of null/missing values.
    pub null_count: usize,
    /// Number of unique non-null values.
    pub unique_count: usize,
    /// First values rendered as text, nulls skipped.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sample_values: Vec<String>,
    /// Numeric statistics (for numeric columns).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
}

/// Range and mean of a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl ColumnStatistics {
    /// Compute statistics for a column.
    pub fn compute(column: &Column) -> Self {
        let mut seen = HashSet::new();
        let mut sample_values = Vec::new();

        for value in column.iter().filter(|v| !v.is_null()) {
            let rendered = value.to_string();
            if sample_values.len() < SAMPLE_SIZE {
                sample_values.push(rendered.clone());
            }
            seen.insert(rendered);
        }

        let numeric = if column.kind().is_numeric() {
            numeric_summary(column.iter().filter_map(|v| v.as_f64()))
        } else {
            None
        };

        Self {
            kind: column.kind(),
            count: column.len(),
            null_count: column.null_count(),
            unique_count: seen.len(),
            sample_values,
            numeric,
        }
    }

    /// Number of non-null values.
    pub fn non_null_count(&self) -> usize {
        self.count - self.null_count
    }

    /// Get the null percentage.
    pub fn null_percentage(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.null_count as f64 / self.count as f64) * 100.0
        }
    }
}

fn numeric_summary(values: impl Iterator<Item = f64>) -> Option<NumericSummary> {
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for value in values {
        count += 1;
        sum += value;
        min = min.min(value);
        max = max.max(value);
    }

    if count == 0 {
        return None;
    }

    Some(NumericSummary {
        min,
        max,
        mean: sum / count as f64,
    })
}

impl Column {
    /// Summarize this column.
    pub fn statistics(&self) -> ColumnStatistics {
        ColumnStatistics::compute(self)
    }
}
