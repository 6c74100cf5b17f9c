//! Error types for table ingestion.

use std::path::PathBuf;

use tabula_model::ModelError;
use thiserror::Error;

/// Errors that can occur while reading a table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file could not be opened.
    #[error("failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Delimited text could not be read.
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// JSON document could not be decoded.
    #[error("failed to decode JSON table: {0}")]
    Json(#[from] serde_json::Error),

    /// The tokens do not form a valid table.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileOpen {
            path: PathBuf::from("/path/to/file.csv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(
            err.to_string()
                .starts_with("failed to open /path/to/file.csv: ")
        );
    }

    #[test]
    fn test_error_from_model() {
        let err: IngestError = ModelError::EmptyInput.into();
        assert!(matches!(err, IngestError::Model(ModelError::EmptyInput)));
        assert_eq!(err.to_string(), "cannot build a table from 0 columns");
    }
}
