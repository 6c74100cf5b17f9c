//! Row and column series.
//!
//! A [`Series`] is a fixed-length sequence of cell handles tagged as a row or
//! as a named column. Series returned by a table's accessors share their
//! handles with the table; [`Series::deep_copy`] detaches every cell.
//!
//! The aggregates skip cells that are not numeric. Two edge cases follow
//! from that and are kept as is:
//!
//! - with no numeric cells, [`Series::min`] returns `f64::MAX`,
//!   [`Series::max`] returns `-f64::MAX` and [`Series::mean`] returns NaN;
//! - [`Series::to_number_vec`] is lossy and writes `0.0` for non-numeric
//!   cells instead of skipping them.

use std::fmt;

use crate::cell::{Cell, CellRef};
use crate::error::{Axis, ModelError, Result};

/// What a series represents within a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesKind {
    Row,
    Column { name: String },
}

/// A row or column of cells.
#[derive(Debug)]
pub struct Series {
    kind: SeriesKind,
    cells: Vec<CellRef>,
}

impl Series {
    /// Creates a row from owned cells.
    pub fn row(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self::from_handles(SeriesKind::Row, cells.into_iter().map(CellRef::new).collect())
    }

    /// Creates a named column from owned cells.
    pub fn column(name: impl Into<String>, cells: impl IntoIterator<Item = Cell>) -> Self {
        Self::from_handles(
            SeriesKind::Column { name: name.into() },
            cells.into_iter().map(CellRef::new).collect(),
        )
    }

    /// Wraps existing handles without copying the cells behind them.
    pub fn from_handles(kind: SeriesKind, cells: Vec<CellRef>) -> Self {
        Self { kind, cells }
    }

    pub fn kind(&self) -> &SeriesKind {
        &self.kind
    }

    /// Column name, or `None` for a row.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            SeriesKind::Row => None,
            SeriesKind::Column { name } => Some(name),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CellRef> {
        self.cells.get(index)
    }

    /// Cell at `index`, failing with [`ModelError::IndexOutOfRange`].
    pub fn cell(&self, index: usize) -> Result<&CellRef> {
        self.cells.get(index).ok_or(ModelError::IndexOutOfRange {
            axis: self.axis(),
            index,
            len: self.cells.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CellRef> {
        self.cells.iter()
    }

    pub fn handles(&self) -> &[CellRef] {
        &self.cells
    }

    /// Numeric values with `0.0` in place of every non-numeric cell.
    pub fn to_number_vec(&self) -> Vec<f64> {
        self.cells
            .iter()
            .map(|cell| cell.as_number().unwrap_or(0.0))
            .collect()
    }

    /// Numeric values only, in order.
    pub fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().filter_map(CellRef::as_number)
    }

    pub fn numeric_count(&self) -> usize {
        self.numbers().count()
    }

    pub fn na_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_na()).count()
    }

    pub fn sum(&self) -> f64 {
        self.numbers().sum()
    }

    pub fn mean(&self) -> f64 {
        self.sum() / self.numeric_count() as f64
    }

    pub fn min(&self) -> f64 {
        self.numbers().fold(f64::MAX, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.numbers().fold(-f64::MAX, f64::max)
    }

    /// Same kind and name, every cell cloned into a fresh slot.
    pub fn deep_copy(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            cells: self.cells.iter().map(CellRef::copy).collect(),
        }
    }

    pub(crate) fn into_handles(self) -> Vec<CellRef> {
        self.cells
    }

    fn axis(&self) -> Axis {
        match self.kind {
            SeriesKind::Row => Axis::Row,
            SeriesKind::Column { .. } => Axis::Column,
        }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a CellRef;
    type IntoIter = std::slice::Iter<'a, CellRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self
            .cells
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        match &self.kind {
            SeriesKind::Row => write!(f, "Row[{cells}]"),
            SeriesKind::Column { name } => write!(f, "Column{{{name}: [{cells}]}}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> Series {
        Series::column(
            "v",
            vec![
                Cell::from_text("1"),
                Cell::from_text("x"),
                Cell::from_text(""),
                Cell::from_number(4.0),
            ],
        )
    }

    #[test]
    fn aggregates_skip_non_numeric_cells() {
        let series = mixed();
        assert_eq!(series.len(), 4);
        assert_eq!(series.numeric_count(), 2);
        assert_eq!(series.na_count(), 1);
        assert_eq!(series.sum(), 5.0);
        assert_eq!(series.mean(), 2.5);
        assert_eq!(series.min(), 1.0);
        assert_eq!(series.max(), 4.0);
    }

    #[test]
    fn number_vec_zero_fills() {
        assert_eq!(mixed().to_number_vec(), vec![1.0, 0.0, 0.0, 4.0]);
    }

    #[test]
    fn empty_numeric_content_uses_sentinels() {
        let series = Series::row(vec![Cell::from_text("a"), Cell::na()]);
        assert_eq!(series.sum(), 0.0);
        assert!(series.mean().is_nan());
        assert_eq!(series.min(), f64::MAX);
        assert_eq!(series.max(), -f64::MAX);
    }

    #[test]
    fn deep_copy_detaches_cells() {
        let series = mixed();
        let copy = series.deep_copy();
        assert_eq!(copy.name(), Some("v"));
        copy.cell(0).unwrap().set_number(100.0);
        assert_eq!(series.cell(0).unwrap().number(), 1.0);
    }

    #[test]
    fn cell_out_of_range() {
        let err = Series::row(vec![Cell::na()]).cell(3).unwrap_err();
        assert_eq!(
            err,
            ModelError::IndexOutOfRange {
                axis: Axis::Row,
                index: 3,
                len: 1
            }
        );
    }

    #[test]
    fn display() {
        let row = Series::row(vec![Cell::from_text("a"), Cell::na()]);
        assert_eq!(row.to_string(), "Row[a, NA]");
        let column = Series::column("c", vec![Cell::from_number(1.0)]);
        assert_eq!(column.to_string(), "Column{c: [1.0]}");
    }
}
