//! Error types for the scrub library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scrub operations.
#[derive(Debug, Error)]
pub enum ScrubError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input has no header row.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Columns of a table disagree in name or length.
    #[error("Table shape error: {0}")]
    Shape(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A numeric column has no values to impute from and the
    /// all-null policy asks for an error.
    #[error("Numeric column '{column}' has no non-null values to impute from")]
    AllNullColumn { column: String },
}

impl ScrubError {
    /// Build an IO error for a path.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrubError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for scrub operations.
pub type Result<T> = std::result::Result<T, ScrubError>;
