//! JSON table documents.
//!
//! A document names its columns and lists rows of scalars:
//!
//! ```json
//! { "titles": ["name", "hp"], "rows": [["Garen", 616.0], ["Annie", 511]] }
//! ```

use std::io::Read;

use serde::Deserialize;
use tabula_model::{Scalar, Table};
use tracing::debug;

use crate::error::Result;

/// Decoded form of a JSON table document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JsonTable {
    pub titles: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Scalar>>,
}

impl JsonTable {
    pub fn into_table(self) -> Result<Table> {
        Ok(Table::from_array(self.titles, &self.rows)?)
    }
}

/// Reads a table from a JSON document.
///
/// Text and numbers become cells; booleans and nulls fail with
/// [`ModelError::UnsupportedCellType`](tabula_model::ModelError::UnsupportedCellType).
pub fn read_json_table<R: Read>(reader: R) -> Result<Table> {
    let document: JsonTable = serde_json::from_reader(reader)?;
    debug!(
        columns = document.titles.len(),
        rows = document.rows.len(),
        "decoded JSON table"
    );
    document.into_table()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngestError;

    #[test]
    fn reads_titles_and_rows() {
        let json = r#"{"titles": ["name", "hp"], "rows": [["Garen", 616.0], ["Annie", 511]]}"#;
        let table = read_json_table(json.as_bytes()).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(1, "hp").unwrap().text(), "511.0");
    }

    #[test]
    fn rows_default_to_empty() {
        let table = read_json_table(r#"{"titles": ["a"]}"#.as_bytes()).unwrap();
        assert_eq!(table.column_count(), 1);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn null_scalars_are_rejected() {
        let json = r#"{"titles": ["a"], "rows": [[null]]}"#;
        let err = read_json_table(json.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::Model(_)));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = read_json_table("{".as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::Json(_)));
    }
}
