//! Numeric extraction and presentation.
//!
//! Every value is first coerced to an optional finite `f64` (the coercion
//! stage), then rendered in one of six representations (the presentation
//! stage). Strings such as `"$1,000"`, `"50%"` or `"approx. 12 units"` are
//! understood by the coercion stage.

mod coerce;
mod present;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::column::Column;

use super::outcome::{ParseModeError, Transformed};

pub use coerce::coerce_text;
pub use present::{format_money, format_percentage, format_phone, group_thousands};

/// Output representation of the presentation stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericMode {
    /// Plain floating-point values.
    Standardize,
    /// Floating-point values rounded to two decimals.
    Format,
    /// Text such as `"50.00%"`.
    Percentage,
    /// Text such as `"$1,000.00"`.
    Money,
    /// Text such as `"+1234567890"`.
    Phone,
    /// Integers when every value is whole, floats otherwise.
    Id,
}

impl NumericMode {
    /// All modes, in menu order.
    pub const ALL: [NumericMode; 6] = [
        NumericMode::Standardize,
        NumericMode::Format,
        NumericMode::Percentage,
        NumericMode::Money,
        NumericMode::Phone,
        NumericMode::Id,
    ];

    /// Stable parameter key.
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericMode::Standardize => "standardize",
            NumericMode::Format => "format",
            NumericMode::Percentage => "percentage",
            NumericMode::Money => "money",
            NumericMode::Phone => "phone",
            NumericMode::Id => "id",
        }
    }

    /// Menu description shown to operators.
    pub fn description(&self) -> &'static str {
        match self {
            NumericMode::Standardize => {
                "Standardize - Convert to pure numeric values, removing currency symbols, commas and percent signs (e.g., '$1,000' -> 1000.0)"
            }
            NumericMode::Format => "Format - Round to 2 decimal places (e.g., 100000.456 -> 100000.46)",
            NumericMode::Percentage => "Percentage - Format as percentage text (e.g., 0.5 -> '50.00%')",
            NumericMode::Money => "Money - Format as currency text (e.g., 100000 -> '$100,000.00')",
            NumericMode::Phone => "Phone - Keep digits with a plus prefix (e.g., '1234567890' -> '+1234567890')",
            NumericMode::Id => {
                "ID - Convert to whole numbers, keeping decimals for inspection (e.g., 123456.0 -> 123456, 1234.56 -> 1234.56)"
            }
        }
    }
}

impl fmt::Display for NumericMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumericMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        NumericMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == lower)
            .ok_or_else(|| ParseModeError::new(s, NumericMode::ALL.map(|m| m.as_str())))
    }
}

/// Tunables of the coercion stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericConfig {
    /// Case-insensitive tokens read as missing values.
    pub null_tokens: Vec<String>,
    /// Currency glyphs stripped before parsing.
    pub currency_symbols: Vec<char>,
    /// Largest distance from the nearest integer still treated as whole by `id`.
    pub integral_tolerance: f64,
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self {
            null_tokens: ["nan", "none", "null", ""].iter().map(|t| t.to_string()).collect(),
            currency_symbols: vec!['$', '€', '£', '¥', '₹'],
            integral_tolerance: 1e-10,
        }
    }
}

/// Extract numbers and render them using a mode name such as `"money"`.
pub fn fix_numeric_values(column: &Column, mode: &str) -> Transformed {
    fix_numeric_values_with(column, mode, &NumericConfig::default())
}

/// [`fix_numeric_values`] with custom coercion settings.
pub fn fix_numeric_values_with(column: &Column, mode: &str, config: &NumericConfig) -> Transformed {
    match mode.parse::<NumericMode>() {
        Ok(mode) => apply_numeric(column, mode, config),
        Err(err) => {
            tracing::warn!(column = %column.name(), mode, "Unknown numeric mode");
            Transformed::unchanged(column.clone(), format!("Warning: {}", err))
        }
    }
}

/// Coerce every value to a number, then render per `mode`.
pub fn apply_numeric(column: &Column, mode: NumericMode, config: &NumericConfig) -> Transformed {
    let numbers = coerce::coerce_column(column, config);
    let extracted = numbers.iter().filter(|n| n.is_some()).count();
    let output = present::present(column, &numbers, mode, config);

    tracing::debug!(
        column = %column.name(),
        %mode,
        extracted,
        nulled = column.len() - extracted,
        kind = %output.kind(),
        "Applied numeric transform"
    );

    let message = format!(
        "Applied {} to column '{}': extracted {} of {} numeric value(s); result is {}",
        mode,
        column.name(),
        extracted,
        column.len(),
        output.kind()
    );
    Transformed::applied(output, message)
}
