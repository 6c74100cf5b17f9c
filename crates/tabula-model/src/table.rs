//! The rectangular table.
//!
//! A [`Table`] stores its cells twice: once as rows and once as columns. Both
//! views are built in the same transposition step and hold handles to the
//! same cells, so mutating a cell obtained from [`Table::cell`],
//! [`Table::row`] or [`Table::column`] is visible through either view.
//!
//! The structure itself never changes after construction. Every structural
//! operation (see the `reshape` module) builds a new table from deep-copied
//! cells, so derived tables and their sources never share state.

use std::fmt;

use tabula_common::to_grid_string;

use crate::cell::{Cell, CellRef};
use crate::error::{Axis, ModelError, Result};
use crate::scalar::Scalar;
use crate::series::{Series, SeriesKind};

/// Column address for [`Table::cell`]: a position or a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRef<'a> {
    Index(usize),
    Name(&'a str),
}

impl From<usize> for ColumnRef<'_> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<'a> From<&'a str> for ColumnRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for ColumnRef<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name)
    }
}

/// A rectangular dataset with synchronized row and column views.
///
/// Column names are not required to be unique; name lookups return the first
/// match.
#[derive(Debug)]
pub struct Table {
    titles: Vec<String>,
    rows: Vec<Series>,
    columns: Vec<Series>,
}

impl Table {
    /// Builds a table from columns of equal length.
    ///
    /// Column titles come from the series names; a row series passed here
    /// gets an empty title.
    ///
    /// # Errors
    ///
    /// [`ModelError::EmptyInput`] for zero columns and
    /// [`ModelError::ShapeMismatch`] when the lengths differ.
    pub fn from_columns(columns: Vec<Series>) -> Result<Self> {
        let Some(first) = columns.first() else {
            return Err(ModelError::EmptyInput);
        };
        let row_count = first.len();
        for (index, column) in columns.iter().enumerate().skip(1) {
            if column.len() != row_count {
                return Err(ModelError::ShapeMismatch {
                    axis: Axis::Column,
                    index,
                    expected: row_count,
                    actual: column.len(),
                });
            }
        }

        let titles: Vec<String> = columns
            .iter()
            .map(|column| column.name().unwrap_or_default().to_string())
            .collect();
        let rows = (0..row_count)
            .map(|r| {
                let cells = columns
                    .iter()
                    .map(|column| column.handles()[r].clone())
                    .collect();
                Series::from_handles(SeriesKind::Row, cells)
            })
            .collect();
        let columns = columns
            .into_iter()
            .zip(&titles)
            .map(|(column, title)| {
                Series::from_handles(
                    SeriesKind::Column {
                        name: title.clone(),
                    },
                    column.into_handles(),
                )
            })
            .collect();

        Ok(Self {
            titles,
            rows,
            columns,
        })
    }

    /// Builds a table from column titles and rows of matching length.
    ///
    /// # Errors
    ///
    /// [`ModelError::ShapeMismatch`] when a row length differs from the
    /// number of titles.
    pub fn from_rows<I, S>(titles: I, rows: Vec<Series>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != titles.len() {
                return Err(ModelError::ShapeMismatch {
                    axis: Axis::Row,
                    index,
                    expected: titles.len(),
                    actual: row.len(),
                });
            }
        }
        Ok(Self::assemble(titles, rows))
    }

    /// Transposes rows already known to match `titles` in length.
    pub(crate) fn assemble(titles: Vec<String>, rows: Vec<Series>) -> Self {
        let mut column_cells: Vec<Vec<CellRef>> = (0..titles.len())
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();
        for row in &rows {
            for (cells, handle) in column_cells.iter_mut().zip(row.handles()) {
                cells.push(handle.clone());
            }
        }

        let columns = titles
            .iter()
            .zip(column_cells)
            .map(|(title, cells)| {
                Series::from_handles(
                    SeriesKind::Column {
                        name: title.clone(),
                    },
                    cells,
                )
            })
            .collect();
        let rows = rows
            .into_iter()
            .map(|row| Series::from_handles(SeriesKind::Row, row.into_handles()))
            .collect();

        Self {
            titles,
            rows,
            columns,
        }
    }

    /// Builds a table from lines of raw text tokens.
    ///
    /// The first line is the header; each title is trimmed and loses one
    /// layer of surrounding quotes. Every later line becomes a row of cells
    /// parsed with [`Cell::from_text`]. No lines at all produce an empty
    /// table.
    ///
    /// # Errors
    ///
    /// [`ModelError::ShapeMismatch`] when a data line has a different token
    /// count than the header.
    pub fn from_csv_tokens<L, T>(lines: L) -> Result<Self>
    where
        L: IntoIterator<Item = Vec<T>>,
        T: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        let Some(header) = lines.next() else {
            return Self::from_rows(Vec::<String>::new(), Vec::new());
        };
        let titles: Vec<String> = header
            .iter()
            .map(|token| Cell::from_text(token.as_ref().trim()).text().to_string())
            .collect();
        let rows = lines
            .map(|tokens| Series::row(tokens.iter().map(Cell::from_text)))
            .collect();
        Self::from_rows(titles, rows)
    }

    /// Builds a table from titles and a matrix of scalars.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnsupportedCellType`] for booleans and nulls, and
    /// [`ModelError::ShapeMismatch`] for ragged rows.
    pub fn from_array<I, S>(titles: I, matrix: &[Vec<Scalar>]) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rows = Vec::with_capacity(matrix.len());
        for (r, values) in matrix.iter().enumerate() {
            let mut cells = Vec::with_capacity(values.len());
            for (c, value) in values.iter().enumerate() {
                let cell = value.to_cell().ok_or(ModelError::UnsupportedCellType {
                    row: r,
                    column: c,
                    kind: value.kind(),
                })?;
                cells.push(cell);
            }
            rows.push(Series::row(cells));
        }
        Self::from_rows(titles, rows)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> &[String] {
        &self.titles
    }

    pub fn rows(&self) -> std::slice::Iter<'_, Series> {
        self.rows.iter()
    }

    pub fn columns(&self) -> std::slice::Iter<'_, Series> {
        self.columns.iter()
    }

    /// Row at `index`. The returned series shares cells with the table.
    pub fn row(&self, index: usize) -> Result<&Series> {
        self.rows.get(index).ok_or(ModelError::IndexOutOfRange {
            axis: Axis::Row,
            index,
            len: self.rows.len(),
        })
    }

    /// Column at `index`. The returned series shares cells with the table.
    pub fn column(&self, index: usize) -> Result<&Series> {
        self.columns.get(index).ok_or(ModelError::IndexOutOfRange {
            axis: Axis::Column,
            index,
            len: self.columns.len(),
        })
    }

    /// First column titled exactly `name`, after trimming `name`.
    pub fn column_by_name(&self, name: &str) -> Result<&Series> {
        let index = self.require_column(name)?;
        self.column(index)
    }

    /// Position of the first column titled exactly `name`, after trimming.
    pub fn index_of_column(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.titles.iter().position(|title| title == name)
    }

    /// Cell at `row` in the column addressed by position or name.
    ///
    /// The handle is shared with the table: setting its value changes the
    /// table as seen through every accessor.
    pub fn cell<'a>(&self, row: usize, column: impl Into<ColumnRef<'a>>) -> Result<&CellRef> {
        let index = match column.into() {
            ColumnRef::Index(index) => index,
            ColumnRef::Name(name) => self.require_column(name)?,
        };
        let row = self.row(row)?;
        row.get(index).ok_or(ModelError::IndexOutOfRange {
            axis: Axis::Column,
            index,
            len: self.columns.len(),
        })
    }

    /// Header row followed by one display row per table row.
    ///
    /// Missing cells render as `NA`.
    pub fn to_display_matrix(&self) -> Vec<Vec<String>> {
        let mut matrix = Vec::with_capacity(self.rows.len() + 1);
        matrix.push(self.titles.clone());
        matrix.extend(
            self.rows
                .iter()
                .map(|row| row.iter().map(ToString::to_string).collect()),
        );
        matrix
    }

    pub(crate) fn require_column(&self, name: &str) -> Result<usize> {
        self.index_of_column(name)
            .ok_or_else(|| ModelError::ColumnNotFound {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_grid_string(&self.to_display_matrix(), ", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(name: &str, values: &[f64]) -> Series {
        Series::column(name, values.iter().copied().map(Cell::from_number))
    }

    #[test]
    fn from_columns_rejects_empty_input() {
        assert_eq!(Table::from_columns(vec![]).unwrap_err(), ModelError::EmptyInput);
    }

    #[test]
    fn from_columns_rejects_ragged_columns() {
        let err = Table::from_columns(vec![numbers("a", &[1.0, 2.0]), numbers("b", &[1.0])])
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::ShapeMismatch {
                axis: Axis::Column,
                index: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let rows = vec![
            Series::row(vec![Cell::from_text("1"), Cell::from_text("2")]),
            Series::row(vec![Cell::from_text("3")]),
        ];
        let err = Table::from_rows(["a", "b"], rows).unwrap_err();
        assert!(matches!(
            err,
            ModelError::ShapeMismatch {
                axis: Axis::Row,
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn views_share_cells() {
        let table = Table::from_columns(vec![numbers("a", &[1.0, 2.0]), numbers("b", &[3.0, 4.0])])
            .unwrap();
        table.row(1).unwrap().cell(0).unwrap().set_number(20.0);
        assert_eq!(table.column(0).unwrap().cell(1).unwrap().number(), 20.0);
        assert_eq!(table.cell(1, "a").unwrap().number(), 20.0);
        assert!(CellRef::ptr_eq(
            table.cell(0, 1).unwrap(),
            table.column_by_name("b").unwrap().cell(0).unwrap()
        ));
    }

    #[test]
    fn name_lookup_trims_and_takes_first_match() {
        let table =
            Table::from_columns(vec![numbers("x", &[1.0]), numbers("x", &[2.0])]).unwrap();
        assert_eq!(table.index_of_column("  x "), Some(0));
        assert_eq!(table.column_by_name("x").unwrap().cell(0).unwrap().number(), 1.0);
        assert_eq!(
            table.column_by_name("y").unwrap_err(),
            ModelError::ColumnNotFound {
                name: "y".to_string()
            }
        );
    }

    #[test]
    fn positional_access_out_of_range() {
        let table = Table::from_columns(vec![numbers("a", &[1.0])]).unwrap();
        assert!(matches!(
            table.row(1),
            Err(ModelError::IndexOutOfRange { axis: Axis::Row, .. })
        ));
        assert!(matches!(
            table.cell(0, 5usize),
            Err(ModelError::IndexOutOfRange {
                axis: Axis::Column,
                index: 5,
                len: 1
            })
        ));
    }

    #[test]
    fn csv_tokens_strip_header_quotes() {
        let table = Table::from_csv_tokens(vec![
            vec!["\"name\"", " hp "],
            vec!["\"Garen\"", "616"],
        ])
        .unwrap();
        assert_eq!(table.column_names(), ["name", "hp"]);
        assert_eq!(table.cell(0, "name").unwrap().text(), "Garen");
        assert_eq!(table.cell(0, "hp").unwrap().number(), 616.0);
    }

    #[test]
    fn csv_tokens_without_lines_build_an_empty_table() {
        let table = Table::from_csv_tokens(Vec::<Vec<String>>::new()).unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn from_array_rejects_unsupported_scalars() {
        let err = Table::from_array(
            ["a", "b"],
            &[vec![Scalar::from(1), Scalar::from("x")], vec![Scalar::from(2), Scalar::Null]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::UnsupportedCellType {
                row: 1,
                column: 1,
                kind: "null"
            }
        );
    }

    #[test]
    fn display_renders_grid_with_na() {
        let table = Table::from_array(
            ["name", "hp"],
            &[
                vec![Scalar::from("Garen"), Scalar::from(616.0)],
                vec![Scalar::from("Annie"), Scalar::from("")],
            ],
        )
        .unwrap();
        assert_eq!(
            table.to_string(),
            "name , hp   \nGaren, 616.0\nAnnie, NA   \n"
        );
    }
}
