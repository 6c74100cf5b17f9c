//! Per-column summary tables for `tabula describe`.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabula_common::format_fixed;
use tabula_model::Series;

/// NA-aware aggregates of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub cells: usize,
    pub numeric: usize,
    pub na: usize,
    pub sum: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl ColumnSummary {
    pub fn from_series(series: &Series) -> Self {
        Self {
            name: series.name().unwrap_or_default().to_string(),
            cells: series.len(),
            numeric: series.numeric_count(),
            na: series.na_count(),
            sum: series.sum(),
            mean: series.mean(),
            min: series.min(),
            max: series.max(),
        }
    }
}

pub fn summarize_columns(table: &tabula_model::Table) -> Vec<ColumnSummary> {
    table.columns().map(ColumnSummary::from_series).collect()
}

/// Renders summaries as a boxed table. Columns without a single numeric
/// cell show `-` for every aggregate.
pub fn summary_table(summaries: &[ColumnSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Cells"),
        header_cell("Numeric"),
        header_cell("NA"),
        header_cell("Sum"),
        header_cell("Mean"),
        header_cell("Min"),
        header_cell("Max"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for summary in summaries {
        let aggregates = [summary.sum, summary.mean, summary.min, summary.max];
        let mut row = vec![
            Cell::new(&summary.name),
            Cell::new(summary.cells),
            Cell::new(summary.numeric),
            count_cell(summary.na),
        ];
        row.extend(aggregates.into_iter().map(|value| {
            if summary.numeric == 0 {
                dim_cell("-")
            } else {
                Cell::new(format_fixed(value))
            }
        }));
        table.add_row(row);
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
