//! Date parsing and formatting.
//!
//! Text columns are first parsed value by value into timestamps; anything
//! that does not look like a date becomes null. The timestamp column is then
//! either kept as-is (`standardize`) or rendered into one of five fixed
//! layouts.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::column::{Column, ElementKind, Value};

use super::outcome::{ParseModeError, Transformed};

/// Formats tried when inferring dates from text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    /// chrono patterns carrying both a date and a time, tried first.
    pub datetime_formats: Vec<String>,
    /// chrono patterns carrying only a date, tried in order. Month-first
    /// layouts precede day-first ones, so ambiguous values read as US dates.
    pub date_formats: Vec<String>,
}

impl Default for DateConfig {
    fn default() -> Self {
        let datetime_formats = [
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%d %H:%M",
            "%Y-%m-%dT%H:%M",
            "%Y/%m/%d %H:%M:%S",
            "%m/%d/%Y %H:%M:%S",
            "%m/%d/%Y %H:%M",
            "%m/%d/%Y %I:%M %p",
        ];
        let date_formats = [
            "%Y-%m-%d",
            "%Y/%m/%d",
            "%m/%d/%y",
            "%m/%d/%Y",
            "%m-%d-%y",
            "%m-%d-%Y",
            "%d/%m/%y",
            "%d/%m/%Y",
            "%d-%m-%y",
            "%d-%m-%Y",
            "%d.%m.%Y",
            "%Y%m%d",
            "%B %d, %Y",
            "%B %d %Y",
            "%d %B %Y",
            "%d %B, %Y",
            "%A, %B %d, %Y",
        ];

        Self {
            datetime_formats: datetime_formats.iter().map(|f| f.to_string()).collect(),
            date_formats: date_formats.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Parse a free-text date or date-time.
///
/// RFC 3339 values with an offset are converted to UTC before the offset is
/// dropped. Returns `None` when no known layout matches.
pub fn parse_timestamp(value: &str, config: &DateConfig) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    // chrono's `%Y` takes one to four digits, which would read `1/2/24` as year 1
    let full_year = has_four_digit_run(trimmed);
    let usable = |format: &&String| full_year || !format.contains("%Y");

    for format in config.datetime_formats.iter().filter(usable) {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    for format in config.date_formats.iter().filter(usable) {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

fn has_four_digit_run(value: &str) -> bool {
    value
        .split(|c: char| !c.is_ascii_digit())
        .any(|run| run.len() >= 4)
}

/// Fixed textual layout for rendering timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateLayout {
    /// `2024-12-25`
    YearMonthDayDash,
    /// `12/25/2024`
    MonthDayYearSlash,
    /// `25/12/2024`
    DayMonthYearSlash,
    /// `2024/12/25`
    YearMonthDaySlash,
    /// `25-12-2024`
    DayMonthYearDash,
}

impl DateLayout {
    /// Stable parameter key.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateLayout::YearMonthDayDash => "yyyy-mm-dd",
            DateLayout::MonthDayYearSlash => "mm/dd/yyyy",
            DateLayout::DayMonthYearSlash => "dd/mm/yyyy",
            DateLayout::YearMonthDaySlash => "yyyy/mm/dd",
            DateLayout::DayMonthYearDash => "dd-mm-yyyy",
        }
    }

    /// chrono pattern producing the layout.
    pub fn pattern(&self) -> &'static str {
        match self {
            DateLayout::YearMonthDayDash => "%Y-%m-%d",
            DateLayout::MonthDayYearSlash => "%m/%d/%Y",
            DateLayout::DayMonthYearSlash => "%d/%m/%Y",
            DateLayout::YearMonthDaySlash => "%Y/%m/%d",
            DateLayout::DayMonthYearDash => "%d-%m-%Y",
        }
    }

    /// Render a timestamp.
    pub fn render(&self, ts: &NaiveDateTime) -> String {
        ts.format(self.pattern()).to_string()
    }
}

/// What the date transformer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateMode {
    /// Keep parsed timestamps.
    Standardize,
    /// Render timestamps as text.
    Layout(DateLayout),
}

impl DateMode {
    /// All modes, in menu order.
    pub const ALL: [DateMode; 6] = [
        DateMode::Standardize,
        DateMode::Layout(DateLayout::YearMonthDayDash),
        DateMode::Layout(DateLayout::MonthDayYearSlash),
        DateMode::Layout(DateLayout::DayMonthYearSlash),
        DateMode::Layout(DateLayout::YearMonthDaySlash),
        DateMode::Layout(DateLayout::DayMonthYearDash),
    ];

    /// Stable parameter key.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateMode::Standardize => "standardize",
            DateMode::Layout(layout) => layout.as_str(),
        }
    }

    /// Menu description shown to operators.
    pub fn description(&self) -> &'static str {
        match self {
            DateMode::Standardize => "Standardize - Parse dates and keep them as timestamps (default)",
            DateMode::Layout(DateLayout::YearMonthDayDash) => {
                "YYYY-MM-DD - Format dates as 'YYYY-MM-DD' string (e.g., '2024-12-25')"
            }
            DateMode::Layout(DateLayout::MonthDayYearSlash) => {
                "MM/DD/YYYY - Format dates as 'MM/DD/YYYY' string (e.g., '12/25/2024')"
            }
            DateMode::Layout(DateLayout::DayMonthYearSlash) => {
                "DD/MM/YYYY - Format dates as 'DD/MM/YYYY' string (e.g., '25/12/2024')"
            }
            DateMode::Layout(DateLayout::YearMonthDaySlash) => {
                "YYYY/MM/DD - Format dates as 'YYYY/MM/DD' string (e.g., '2024/12/25')"
            }
            DateMode::Layout(DateLayout::DayMonthYearDash) => {
                "DD-MM-YYYY - Format dates as 'DD-MM-YYYY' string (e.g., '25-12-2024')"
            }
        }
    }
}

impl fmt::Display for DateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        DateMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == lower)
            .ok_or_else(|| ParseModeError::new(s, DateMode::ALL.map(|m| m.as_str())))
    }
}

/// Parse and/or format a date column using a mode name such as `"mm/dd/yyyy"`.
pub fn fix_date_values(column: &Column, mode: &str) -> Transformed {
    fix_date_values_with(column, mode, &DateConfig::default())
}

/// [`fix_date_values`] with custom input formats.
pub fn fix_date_values_with(column: &Column, mode: &str, config: &DateConfig) -> Transformed {
    match mode.parse::<DateMode>() {
        Ok(mode) => apply_dates(column, mode, config),
        Err(err) => {
            tracing::warn!(column = %column.name(), mode, "Unknown date mode");
            Transformed::unchanged(column.clone(), format!("Warning: {}", err))
        }
    }
}

/// Parse text into timestamps, then render per `mode`.
///
/// Soft-fails when the column is neither text nor timestamp.
pub fn apply_dates(column: &Column, mode: DateMode, config: &DateConfig) -> Transformed {
    let parsed = match column.kind() {
        ElementKind::Text => parse_column(column, config),
        ElementKind::Timestamp => column.clone(),
        other => {
            tracing::warn!(column = %column.name(), kind = %other, "Cannot parse dates");
            return Transformed::unchanged(
                column.clone(),
                format!(
                    "Warning: Could not parse dates from column '{}' (kind: {})",
                    column.name(),
                    other
                ),
            );
        }
    };

    let parsed_count = parsed.len() - parsed.null_count();
    let output = match mode {
        DateMode::Standardize => parsed,
        DateMode::Layout(layout) => {
            let values = parsed
                .iter()
                .map(|value| match value.as_timestamp() {
                    Some(ts) => Value::Text(layout.render(&ts)),
                    None => Value::Null,
                })
                .collect();
            parsed.derive(ElementKind::Text, values)
        }
    };

    tracing::debug!(column = %column.name(), %mode, parsed_count, "Applied date transform");

    Transformed::applied(
        output,
        format!(
            "Converted column '{}' to {}: {} of {} value(s) are valid dates",
            column.name(),
            mode,
            parsed_count,
            column.len()
        ),
    )
}

/// Parse every text value; failures become null.
fn parse_column(column: &Column, config: &DateConfig) -> Column {
    let values: Vec<Value> = column
        .iter()
        .map(|value| {
            value
                .as_str()
                .and_then(|s| parse_timestamp(s, config))
                .map_or(Value::Null, Value::Timestamp)
        })
        .collect();

    let failed = values.iter().filter(|v| v.is_null()).count() - column.null_count();
    if failed > 0 {
        tracing::debug!(column = %column.name(), failed, "Unparsable dates set to null");
    }

    column.derive(ElementKind::Timestamp, values)
}
