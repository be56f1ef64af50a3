//! US state normalization.

use std::fmt;
use std::str::FromStr;

use crate::column::{Column, ElementKind, Value};
use crate::directory::StateDirectory;

use super::outcome::{ParseModeError, Transformed};
use super::strings::title_case;

/// Shape of a resolved state value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateMode {
    /// Canonical Title Case name.
    Standardize,
    /// Canonical Title Case name.
    StateName,
    /// Two-letter postal code.
    StateCode,
}

impl StateMode {
    /// All modes, in menu order.
    pub const ALL: [StateMode; 3] = [StateMode::Standardize, StateMode::StateName, StateMode::StateCode];

    /// Stable parameter key.
    pub fn as_str(&self) -> &'static str {
        match self {
            StateMode::Standardize => "standardize",
            StateMode::StateName => "state_name",
            StateMode::StateCode => "state_code",
        }
    }

    /// Menu description shown to operators.
    pub fn description(&self) -> &'static str {
        match self {
            StateMode::Standardize => {
                "Standardize - Convert to full state names with proper case (e.g., 'NY' -> 'New York', 'new york' -> 'New York')"
            }
            StateMode::StateName => {
                "State Name - Convert to full state name format (e.g., 'NY' -> 'New York', 'california' -> 'California')"
            }
            StateMode::StateCode => {
                "State Code - Convert to two-letter state code (e.g., 'New York' -> 'NY', 'California' -> 'CA')"
            }
        }
    }

    fn target(&self) -> Target {
        match self {
            StateMode::Standardize | StateMode::StateName => Target::Name,
            StateMode::StateCode => Target::Code,
        }
    }
}

impl fmt::Display for StateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        StateMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == lower)
            .ok_or_else(|| ParseModeError::new(s, StateMode::ALL.map(|m| m.as_str())))
    }
}

/// Output shape used while resolving values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Name,
    Code,
    /// Unrecognized mode: matches become names, everything else is only trimmed.
    Verbatim,
}

/// Normalize state references using a mode name such as `"state_code"`.
///
/// An unrecognized mode does not fail; it resolves matches to names and
/// leaves unmatched values trimmed.
pub fn fix_state_values(column: &Column, mode: &str) -> Transformed {
    let target = match mode.parse::<StateMode>() {
        Ok(mode) => mode.target(),
        Err(err) => {
            tracing::warn!(column = %column.name(), mode, "{}", err);
            Target::Verbatim
        }
    };
    resolve_column(column, target, mode)
}

/// Normalize state references in a text column.
pub fn apply_states(column: &Column, mode: StateMode) -> Transformed {
    resolve_column(column, mode.target(), mode.as_str())
}

fn resolve_column(column: &Column, target: Target, mode: &str) -> Transformed {
    if column.kind() != ElementKind::Text {
        tracing::warn!(column = %column.name(), kind = %column.kind(), "Column is not text");
        return Transformed::unchanged(
            column.clone(),
            format!(
                "Warning: Column '{}' is {}, not text. Cannot process state values.",
                column.name(),
                column.kind()
            ),
        );
    }

    let states = StateDirectory::global();
    let mut matched = 0;
    let values = column
        .iter()
        .map(|value| match value {
            Value::Text(raw) => {
                let (resolved, found) = resolve_state(states, raw, target);
                if found {
                    matched += 1;
                }
                Value::Text(resolved)
            }
            other => other.clone(),
        })
        .collect();

    let non_null = column.len() - column.null_count();
    tracing::debug!(column = %column.name(), mode, matched, non_null, "Applied state transform");

    Transformed::applied(
        column.derive(ElementKind::Text, values),
        format!(
            "Normalized states in column '{}' ({}): {} of {} value(s) matched a known state",
            column.name(),
            mode,
            matched,
            non_null
        ),
    )
}

/// Resolve one raw value. Returns the new text and whether it matched.
fn resolve_state(states: &StateDirectory, raw: &str, target: Target) -> (String, bool) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return (raw.to_string(), false);
    }

    let upper = trimmed.to_uppercase();
    let title = title_case(trimmed);

    let hit = states
        .name_for(&upper)
        .map(|name| (name, upper.as_str()))
        .or_else(|| states.code_for(&title).map(|code| (title.as_str(), code)))
        // Canonical names that are not plain title case ("District of Columbia")
        .or_else(|| {
            states
                .iter()
                .find(|(name, code)| title_case(name) == title || *code == upper)
        });

    match (hit, target) {
        (Some((_, code)), Target::Code) => (code.to_string(), true),
        (Some((name, _)), Target::Name | Target::Verbatim) => (name.to_string(), true),
        (None, Target::Code) => (upper, false),
        (None, Target::Name) => (title, false),
        (None, Target::Verbatim) => (trimmed.to_string(), false),
    }
}
