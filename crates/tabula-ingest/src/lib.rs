//! Table ingestion.
//!
//! Turns delimited text and JSON documents into [`tabula_model::Table`]s.
//! The CSV side only tokenizes: lines are split on commas and trimmed, and
//! quotes are left in place for the cell parser to strip.

pub mod csv_reader;
pub mod error;
pub mod json;

pub use csv_reader::{parse_table, read_csv_tokens, read_table, read_table_from_reader};
pub use error::{IngestError, Result};
pub use json::{JsonTable, read_json_table};
