//! Structural table operations.
//!
//! Everything here returns a new [`Table`] built from deep-copied cells.
//! Mutating the result never changes the source, and the other way round.

use tracing::debug;

use crate::cell::{Cell, CellRef};
use crate::error::{Axis, ModelError, Result};
use crate::series::Series;
use crate::table::Table;

impl Table {
    /// Copies the columns at `indices`, in that order.
    ///
    /// Indices may repeat. An empty index list fails like
    /// [`Table::from_columns`] with [`ModelError::EmptyInput`].
    pub fn select_columns(&self, indices: &[usize]) -> Result<Table> {
        let columns = indices
            .iter()
            .map(|&index| self.column(index).map(Series::deep_copy))
            .collect::<Result<Vec<_>>>()?;
        Table::from_columns(columns)
    }

    /// Copies the columns titled `names`, in that order.
    pub fn select_columns_by_name<S: AsRef<str>>(&self, names: &[S]) -> Result<Table> {
        let indices = names
            .iter()
            .map(|name| self.require_column(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.select_columns(&indices)
    }

    /// Copies the columns in `from..to`.
    pub fn column_range(&self, from: usize, to: usize) -> Result<Table> {
        let indices = checked_range(Axis::Column, from, to, self.column_count())?;
        self.select_columns(&indices)
    }

    /// Copies the rows at `indices`, in that order, keeping every column.
    pub fn select_rows(&self, indices: &[usize]) -> Result<Table> {
        let rows = indices
            .iter()
            .map(|&index| self.row(index).map(Series::deep_copy))
            .collect::<Result<Vec<_>>>()?;
        Ok(Table::assemble(self.column_names().to_vec(), rows))
    }

    /// Copies the rows in `from..to`.
    pub fn row_range(&self, from: usize, to: usize) -> Result<Table> {
        let indices = checked_range(Axis::Row, from, to, self.row_count())?;
        self.select_rows(&indices)
    }

    /// Keeps the rows in which every cell is numeric.
    ///
    /// A missing or non-numeric cell anywhere in a row drops the whole row;
    /// row order is kept. The `preserved` names do not exempt their columns
    /// from the check: every column is tested regardless. Use
    /// [`Table::numeric_subframe_exempting`] to skip columns.
    pub fn numeric_subframe<S: AsRef<str>>(&self, preserved: &[S]) -> Table {
        if !preserved.is_empty() {
            debug!(
                preserved = preserved.len(),
                "numeric_subframe checks preserved columns too"
            );
        }
        self.numeric_rows()
    }

    /// Keeps the rows in which every cell is numeric. Same as
    /// [`Table::numeric_subframe`] with no preserved names.
    pub fn numeric_rows(&self) -> Table {
        self.keep_numeric_rows(&vec![true; self.column_count()])
    }

    /// Keeps the rows that are numeric in every column not named in
    /// `preserved`.
    ///
    /// Cells of preserved columns are copied whatever they contain. A name
    /// exempts every column carrying that title.
    ///
    /// # Errors
    ///
    /// [`ModelError::ColumnNotFound`] when a preserved name matches no column.
    pub fn numeric_subframe_exempting<S: AsRef<str>>(&self, preserved: &[S]) -> Result<Table> {
        let mut checked = vec![true; self.column_count()];
        for name in preserved {
            let name = name.as_ref().trim();
            self.require_column(name)?;
            for (flag, title) in checked.iter_mut().zip(self.column_names()) {
                if title == name {
                    *flag = false;
                }
            }
        }
        Ok(self.keep_numeric_rows(&checked))
    }

    /// Copy with every missing cell set to `replacement`.
    pub fn replace_na_number(&self, replacement: f64) -> Table {
        self.replace_na_with(|| Cell::from_number(replacement))
    }

    /// Copy with every missing cell set to `replacement`, parsed as text.
    pub fn replace_na_text(&self, replacement: &str) -> Table {
        self.replace_na_with(|| Cell::from_text(replacement))
    }

    /// Reshapes from wide to long.
    ///
    /// Columns named in `preserved` are kept, in table order, and each of
    /// their values is repeated once per remaining ("moving") column. Two
    /// columns are appended: `names_to` holds the moving column's title and
    /// `values_to` its value. For every source row, one output row is
    /// emitted per moving column, left to right, so a table with `r` rows
    /// and `m` moving columns yields `r * m` rows.
    ///
    /// # Errors
    ///
    /// [`ModelError::ColumnNotFound`] when a preserved name matches no column.
    pub fn pivot_longer<S: AsRef<str>>(
        &self,
        preserved: &[S],
        names_to: &str,
        values_to: &str,
    ) -> Result<Table> {
        let preserved: Vec<&str> = preserved.iter().map(|name| name.as_ref().trim()).collect();
        for name in &preserved {
            self.require_column(name)?;
        }

        let (fixed, moving): (Vec<usize>, Vec<usize>) = (0..self.column_count())
            .partition(|&c| preserved.contains(&self.column_names()[c].as_str()));
        let repetition = moving.len();

        let mut columns: Vec<Series> = Vec::with_capacity(fixed.len() + 2);
        for &c in &fixed {
            let source = self.column(c)?;
            let cells = source
                .iter()
                .flat_map(|cell| std::iter::repeat_n(cell, repetition))
                .map(CellRef::get);
            columns.push(Series::column(source.name().unwrap_or_default(), cells));
        }

        let mut names = Vec::with_capacity(self.row_count() * repetition);
        let mut values = Vec::with_capacity(self.row_count() * repetition);
        for row in self.rows() {
            for &c in &moving {
                names.push(Cell::from_text(&self.column_names()[c]));
                values.push(row.handles()[c].get());
            }
        }
        columns.push(Series::column(names_to, names));
        columns.push(Series::column(values_to, values));

        debug!(
            rows = self.row_count(),
            moving = repetition,
            output_rows = self.row_count() * repetition,
            "pivoted table longer"
        );
        Table::from_columns(columns)
    }

    /// Fully independent copy.
    pub fn copy(&self) -> Table {
        let rows = self.rows().map(Series::deep_copy).collect();
        Table::assemble(self.column_names().to_vec(), rows)
    }

    fn keep_numeric_rows(&self, checked: &[bool]) -> Table {
        let rows: Vec<Series> = self
            .rows()
            .filter(|row| {
                row.iter()
                    .zip(checked)
                    .all(|(cell, &check)| !check || cell.is_number())
            })
            .map(Series::deep_copy)
            .collect();
        debug!(
            kept = rows.len(),
            dropped = self.row_count() - rows.len(),
            "filtered numeric rows"
        );
        Table::assemble(self.column_names().to_vec(), rows)
    }

    fn replace_na_with(&self, replacement: impl Fn() -> Cell) -> Table {
        let copied = self.copy();
        for row in copied.rows() {
            for cell in row {
                if cell.is_na() {
                    cell.set(replacement());
                }
            }
        }
        copied
    }
}

impl Clone for Table {
    fn clone(&self) -> Self {
        self.copy()
    }
}

fn checked_range(axis: Axis, from: usize, to: usize, len: usize) -> Result<Vec<usize>> {
    if from > to {
        return Err(ModelError::IndexOutOfRange {
            axis,
            index: from,
            len,
        });
    }
    Ok((from..to).collect())
}
