//! Case transformations for text columns.

use std::fmt;
use std::str::FromStr;

use crate::column::{Column, ElementKind, Value};

use super::outcome::{ParseModeError, Transformed};

/// How text values are re-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseMode {
    /// Upper-case the first letter of every word, lower-case the rest.
    Title,
    /// All upper case.
    Upper,
    /// All lower case.
    Lower,
    /// Upper-case the first character only, lower-case the rest.
    Capitalize,
    /// Trim surrounding whitespace without re-casing.
    Strip,
}

impl CaseMode {
    /// All modes, in menu order.
    pub const ALL: [CaseMode; 5] = [
        CaseMode::Title,
        CaseMode::Upper,
        CaseMode::Lower,
        CaseMode::Capitalize,
        CaseMode::Strip,
    ];

    /// Stable parameter key.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseMode::Title => "title",
            CaseMode::Upper => "upper",
            CaseMode::Lower => "lower",
            CaseMode::Capitalize => "capitalize",
            CaseMode::Strip => "strip",
        }
    }

    /// Menu description shown to operators.
    pub fn description(&self) -> &'static str {
        match self {
            CaseMode::Title => "Title Case - Converts text to Title Case (e.g., 'john doe' -> 'John Doe')",
            CaseMode::Upper => "Uppercase - Converts all text to UPPERCASE (e.g., 'john doe' -> 'JOHN DOE')",
            CaseMode::Lower => "Lowercase - Converts all text to lowercase (e.g., 'John Doe' -> 'john doe')",
            CaseMode::Capitalize => {
                "Capitalize - Capitalizes only the first letter (e.g., 'john doe' -> 'John doe')"
            }
            CaseMode::Strip => "Strip - Removes leading/trailing whitespace only (e.g., '  John ' -> 'John')",
        }
    }

    /// Apply the mode to an already-trimmed value.
    pub fn apply(&self, value: &str) -> String {
        match self {
            CaseMode::Title => title_case(value),
            CaseMode::Upper => value.to_uppercase(),
            CaseMode::Lower => value.to_lowercase(),
            CaseMode::Capitalize => capitalize(value),
            CaseMode::Strip => value.to_string(),
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        CaseMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == lower)
            .ok_or_else(|| ParseModeError::new(s, CaseMode::ALL.map(|m| m.as_str())))
    }
}

/// Title-case every word. A word starts at any letter that does not follow
/// another letter, so "o'neil-smith" becomes "O'Neil-Smith".
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Re-case a text column using a mode name such as `"title"`.
///
/// Unknown modes leave the column untouched.
pub fn fix_name_values(column: &Column, mode: &str) -> Transformed {
    match mode.parse::<CaseMode>() {
        Ok(mode) => apply_case(column, mode),
        Err(err) => {
            tracing::warn!(column = %column.name(), mode, "Unknown case mode");
            Transformed::unchanged(column.clone(), format!("Warning: {}", err))
        }
    }
}

/// Re-case a text column. Columns of any other kind are returned unchanged.
pub fn apply_case(column: &Column, mode: CaseMode) -> Transformed {
    if column.kind() != ElementKind::Text {
        tracing::debug!(
            column = %column.name(),
            kind = %column.kind(),
            "Skipping case transform on non-text column"
        );
        return Transformed::unchanged(
            column.clone(),
            format!(
                "Column '{}' is {}, not text; values left as-is",
                column.name(),
                column.kind()
            ),
        );
    }

    let mut changed = 0;
    let values = column
        .iter()
        .map(|value| match value {
            Value::Text(s) => {
                let cased = mode.apply(s.trim());
                if &cased != s {
                    changed += 1;
                }
                Value::Text(cased)
            }
            other => other.clone(),
        })
        .collect();

    tracing::debug!(column = %column.name(), %mode, changed, "Applied case transform");

    Transformed::applied(
        column.derive(ElementKind::Text, values),
        format!(
            "Applied {} to column '{}': {} of {} value(s) changed",
            mode,
            column.name(),
            changed,
            column.len()
        ),
    )
}
