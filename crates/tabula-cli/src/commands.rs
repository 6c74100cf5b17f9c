//! Subcommand implementations. Each returns the text to print.

use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use tabula_ingest::{read_table, read_table_from_reader};
use tabula_lm::SimpleLinearModel;
use tabula_model::Table;

use crate::summary::{summarize_columns, summary_table};

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Value written into missing cells by `show`.
#[derive(Debug, Clone, PartialEq)]
pub enum NaReplacement {
    Number(f64),
    Text(String),
}

/// Filters applied by `show`, in field order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowOptions {
    /// Columns to keep, by name. Empty keeps every column.
    pub columns: Vec<String>,
    /// Half-open row range `from..to`.
    pub rows: Option<(usize, usize)>,
    /// Drop rows with a non-numeric cell.
    pub numeric: bool,
    /// Columns exempt from the numeric filter.
    pub keep_text: Vec<String>,
    pub na: Option<NaReplacement>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn load_table(path: &Path) -> Result<Table> {
    let table = if path == Path::new(STDIN_PATH) {
        read_table_from_reader(io::stdin().lock()).context("read table from stdin")?
    } else {
        read_table(path).with_context(|| format!("read table {}", path.display()))?
    };
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded table"
    );
    Ok(table)
}

pub fn run_show(path: &Path, options: &ShowOptions) -> Result<String> {
    let table = load_table(path)?;
    let shown = apply_show_options(&table, options)?;
    Ok(shown.to_string())
}

/// Applies column selection, row range, numeric filtering and NA
/// replacement, in that order.
pub fn apply_show_options(table: &Table, options: &ShowOptions) -> Result<Table> {
    let _span = info_span!("show").entered();
    let mut current = if options.columns.is_empty() {
        table.copy()
    } else {
        table
            .select_columns_by_name(&options.columns)
            .context("select columns")?
    };
    if let Some((from, to)) = options.rows {
        current = current.row_range(from, to).context("select rows")?;
    }
    if options.numeric {
        let before = current.row_count();
        current = if options.keep_text.is_empty() {
            current.numeric_rows()
        } else {
            current
                .numeric_subframe_exempting(&options.keep_text)
                .context("filter numeric rows")?
        };
        debug!(dropped = before - current.row_count(), "numeric filter");
    } else if !options.keep_text.is_empty() {
        bail!("--keep-text only applies together with --numeric");
    }
    match &options.na {
        Some(NaReplacement::Number(value)) => current = current.replace_na_number(*value),
        Some(NaReplacement::Text(value)) => current = current.replace_na_text(value),
        None => {}
    }
    Ok(current)
}

pub fn run_describe(path: &Path) -> Result<String> {
    let table = load_table(path)?;
    let summaries = summarize_columns(&table);
    Ok(format!("{}\n", summary_table(&summaries)))
}

pub fn run_pivot(path: &Path, keep: &[String], names_to: &str, values_to: &str) -> Result<String> {
    let table = load_table(path)?;
    let long = table
        .pivot_longer(keep, names_to, values_to)
        .context("pivot to long form")?;
    debug!(
        rows = long.row_count(),
        columns = long.column_count(),
        "pivoted table"
    );
    Ok(long.to_string())
}

pub fn run_lm(path: &Path, response: &str, predictor: &str, format: ReportFormat) -> Result<String> {
    let table = load_table(path)?;
    let _span = info_span!("lm", response, predictor).entered();
    let model = SimpleLinearModel::fit(&table, response, predictor)
        .with_context(|| format!("fit {response} ~ {predictor}"))?;
    info!(n = model.n(), "fitted model");
    match format {
        ReportFormat::Text => Ok(format!("{model}\n")),
        ReportFormat::Json => {
            let json =
                serde_json::to_string_pretty(&model.report()).context("serialize fit report")?;
            Ok(format!("{json}\n"))
        }
    }
}

/// Parses `FROM..TO` into a half-open range.
pub fn parse_row_range(value: &str) -> std::result::Result<(usize, usize), String> {
    let (from, to) = value
        .split_once("..")
        .ok_or_else(|| format!("expected FROM..TO, got '{value}'"))?;
    let parse = |bound: &str| {
        bound
            .trim()
            .parse::<usize>()
            .map_err(|error| format!("invalid bound '{bound}': {error}"))
    };
    Ok((parse(from)?, parse(to)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        tabula_ingest::parse_table("name,x,y\na,1,2\nb,,4\nc,3,x\nd,4,8\n").unwrap()
    }

    #[test]
    fn row_range_parsing() {
        assert_eq!(parse_row_range("1..3"), Ok((1, 3)));
        assert_eq!(parse_row_range(" 0 .. 2"), Ok((0, 2)));
        assert!(parse_row_range("3").is_err());
        assert!(parse_row_range("a..2").unwrap_err().contains("invalid bound"));
    }

    #[test]
    fn show_without_options_copies() {
        let table = sample();
        let shown = apply_show_options(&table, &ShowOptions::default()).unwrap();
        assert_eq!(shown.to_display_matrix(), table.to_display_matrix());
    }

    #[test]
    fn show_filters_in_order() {
        let options = ShowOptions {
            columns: vec!["x".to_string(), "y".to_string()],
            rows: Some((1, 4)),
            numeric: true,
            ..ShowOptions::default()
        };
        let shown = apply_show_options(&sample(), &options).unwrap();
        assert_eq!(shown.column_names(), ["x", "y"]);
        assert_eq!(shown.row_count(), 1);
        assert_eq!(shown.cell(0, "y").unwrap().number(), 8.0);
    }

    #[test]
    fn show_keep_text_exempts_columns() {
        let options = ShowOptions {
            numeric: true,
            keep_text: vec!["name".to_string()],
            ..ShowOptions::default()
        };
        let shown = apply_show_options(&sample(), &options).unwrap();
        assert_eq!(shown.row_count(), 2);
        assert_eq!(shown.cell(1, "name").unwrap().text(), "d");
    }

    #[test]
    fn keep_text_requires_numeric() {
        let options = ShowOptions {
            keep_text: vec!["name".to_string()],
            ..ShowOptions::default()
        };
        assert!(apply_show_options(&sample(), &options).is_err());
    }

    #[test]
    fn show_replaces_missing_cells() {
        let options = ShowOptions {
            na: Some(NaReplacement::Number(0.0)),
            ..ShowOptions::default()
        };
        let shown = apply_show_options(&sample(), &options).unwrap();
        assert_eq!(shown.cell(1, "x").unwrap().text(), "0.0");
    }

    #[test]
    fn unknown_column_error_has_context() {
        let options = ShowOptions {
            columns: vec!["z".to_string()],
            ..ShowOptions::default()
        };
        let error = apply_show_options(&sample(), &options).unwrap_err();
        assert_eq!(format!("{error:#}"), "select columns: no such column 'z'");
    }
}
