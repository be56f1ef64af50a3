//! Error types for the Refinery CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, transforming or writing a table.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error with file path context.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV/TSV parsing or writing error.
    #[error("Delimited file error: {0}")]
    Csv(#[from] csv::Error),

    /// The file had no header or no rows.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// The requested column is not in the table.
    #[error("Column '{column}' not found. Available columns: {}", available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    /// Error from the refinery library.
    #[error(transparent)]
    Refinery(#[from] refinery::RefineryError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
