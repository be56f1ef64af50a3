//! Error types for the Refinery library.
//!
//! Only configuration mistakes surface as errors. Data problems inside a
//! column are absorbed by the transformers and reported through
//! [`Transformed`](crate::Transformed) instead.

use thiserror::Error;

use crate::column::ElementKind;

/// Main error type for Refinery operations.
#[derive(Debug, Error)]
pub enum RefineryError {
    /// A transformation that needs a mode parameter was invoked without one.
    #[error("Transformation '{key}' requires a parameter (one of: {})", options.join(", "))]
    MissingParameter {
        key: String,
        options: Vec<String>,
    },

    /// No transformation is registered under the given key.
    #[error("Unknown transformation: {0}")]
    UnknownTransformation(String),

    /// Registry or configuration is internally inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A value does not match the declared element kind of its column.
    #[error("Value at row {row} of column '{column}' is not a valid {expected} value")]
    KindMismatch {
        column: String,
        row: usize,
        expected: ElementKind,
    },

    /// An explicit cast could not represent a value in the target kind.
    #[error("Cannot cast '{value}' at row {row} of column '{column}' to {target}")]
    Cast {
        column: String,
        row: usize,
        value: String,
        target: ElementKind,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Refinery operations.
pub type Result<T> = std::result::Result<T, RefineryError>;
