//! Scalars accepted by [`Table::from_array`](crate::Table::from_array).

use serde::Deserialize;

use crate::cell::Cell;

/// One value of an in-memory matrix.
///
/// Only text and numbers convert to cells. Booleans and nulls exist so that
/// matrices decoded from JSON can be represented, and are rejected with
/// [`ModelError::UnsupportedCellType`](crate::ModelError::UnsupportedCellType).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
    Boolean(bool),
    Null,
}

impl Scalar {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Boolean(_) => "boolean",
            Self::Null => "null",
        }
    }

    /// Converts to a cell, or `None` for unsupported kinds.
    pub fn to_cell(&self) -> Option<Cell> {
        match self {
            Self::Number(value) => Some(Cell::from_number(*value)),
            Self::Text(value) => Some(Cell::from_text(value)),
            Self::Boolean(_) | Self::Null => None,
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
