//! Error types for table construction and access.

use std::fmt;

use thiserror::Error;

/// Which axis of a table an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Column => f.write_str("column"),
        }
    }
}

/// Errors produced while building or addressing a [`Table`](crate::Table).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A row or column does not have the length the table shape requires.
    #[error("{axis} {index} has {actual} cells, expected {expected}")]
    ShapeMismatch {
        axis: Axis,
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// A table was requested from zero columns.
    #[error("cannot build a table from 0 columns")]
    EmptyInput,

    /// No column carries the requested name.
    #[error("no such column '{name}'")]
    ColumnNotFound { name: String },

    /// An array scalar is neither text nor a number.
    #[error("cannot convert {kind} at row {row}, column {column} to a cell")]
    UnsupportedCellType {
        row: usize,
        column: usize,
        kind: &'static str,
    },

    /// A positional index is past the end of its axis.
    #[error("{axis} index {index} out of range for length {len}")]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
