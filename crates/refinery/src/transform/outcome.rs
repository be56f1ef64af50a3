//! Outcome of applying a transformation.

use thiserror::Error;

use crate::column::Column;

/// Result of a soft-failing transformation.
///
/// Transformers never return errors for bad data. Either the output was
/// produced (`Applied`), or the input is handed back untouched together
/// with the reason (`Unchanged`).
#[derive(Debug, Clone, PartialEq)]
pub enum Transformed<T = Column> {
    /// The transformation produced a new output.
    Applied { output: T, message: String },
    /// The original input, returned as-is.
    Unchanged { output: T, diagnostic: String },
}

impl<T> Transformed<T> {
    /// Successful outcome.
    pub fn applied(output: T, message: impl Into<String>) -> Self {
        Transformed::Applied {
            output,
            message: message.into(),
        }
    }

    /// Soft failure carrying the original input.
    pub fn unchanged(original: T, diagnostic: impl Into<String>) -> Self {
        Transformed::Unchanged {
            output: original,
            diagnostic: diagnostic.into(),
        }
    }

    /// Returns true if the transformation produced a new output.
    pub fn is_applied(&self) -> bool {
        matches!(self, Transformed::Applied { .. })
    }

    /// Borrow the output (the original input for `Unchanged`).
    pub fn output(&self) -> &T {
        match self {
            Transformed::Applied { output, .. } | Transformed::Unchanged { output, .. } => output,
        }
    }

    /// Human-readable outcome message or diagnostic.
    pub fn message(&self) -> &str {
        match self {
            Transformed::Applied { message, .. } => message,
            Transformed::Unchanged { diagnostic, .. } => diagnostic,
        }
    }

    /// Take the output, discarding the message.
    pub fn into_output(self) -> T {
        match self {
            Transformed::Applied { output, .. } | Transformed::Unchanged { output, .. } => output,
        }
    }
}

/// A mode string that names none of a transformer's modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown mode \"{mode}\". Supported: {}", expected.join(", "))]
pub struct ParseModeError {
    pub mode: String,
    pub expected: Vec<&'static str>,
}

impl ParseModeError {
    pub(crate) fn new(mode: &str, expected: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            mode: mode.to_string(),
            expected: expected.into_iter().collect(),
        }
    }
}
