//! Comma-separated text reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tabula_model::Table;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Splits comma-separated text into trimmed tokens, one vector per line.
///
/// Quotes get no special meaning: a quoted field keeps its quotes and a comma
/// inside quotes still splits. Lines may differ in length; blank lines are
/// skipped.
pub fn read_csv_tokens<R: Read>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut lines = Vec::new();
    for record in reader.records() {
        let record = record?;
        lines.push(record.iter().map(str::to_string).collect());
    }
    Ok(lines)
}

/// Reads a table from comma-separated text. The first line is the header.
pub fn read_table_from_reader<R: Read>(reader: R) -> Result<Table> {
    let lines = read_csv_tokens(reader)?;
    let table = Table::from_csv_tokens(lines)?;
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "read table"
    );
    Ok(table)
}

/// Reads a table from a comma-separated file.
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|source| IngestError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading CSV");
    read_table_from_reader(file)
}

/// Reads a table from comma-separated text held in memory.
pub fn parse_table(text: &str) -> Result<Table> {
    read_table_from_reader(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_trimmed_and_keep_quotes() {
        let lines = read_csv_tokens(" a , \"b\" ,c\n1,\"x, y\",3\n".as_bytes()).unwrap();
        assert_eq!(
            lines,
            vec![
                vec!["a", "\"b\"", "c"],
                vec!["1", "\"x", "y\"", "3"],
            ]
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let lines = read_csv_tokens("a,b\n\n1,2\n".as_bytes()).unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn parse_table_builds_cells() {
        let table = parse_table("\"x\",y\n1,\n\"2\",abc\n").unwrap();
        assert_eq!(table.column_names(), ["x", "y"]);
        assert_eq!(table.cell(1, "x").unwrap().number(), 2.0);
        assert!(table.cell(0, "y").unwrap().is_na());
        assert!(!table.cell(1, "y").unwrap().is_number());
    }

    #[test]
    fn ragged_lines_are_a_shape_error() {
        let err = parse_table("a,b\n1,2,3\n").unwrap_err();
        assert!(matches!(
            err,
            IngestError::Model(tabula_model::ModelError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn empty_text_gives_empty_table() {
        let table = parse_table("").unwrap();
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.row_count(), 0);
    }
}
