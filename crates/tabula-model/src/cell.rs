//! Table cells.
//!
//! A [`Cell`] keeps a canonical text form next to the number parsed from it.
//! An empty text form marks a missing value (NA); a NaN number marks a value
//! that is not numeric. The two flags are independent: `"abc"` is present but
//! not numeric, and the empty cell is both missing and not numeric.
//!
//! Tables hand out [`CellRef`] handles rather than plain cells. A row view and
//! a column view of the same table hold handles to the same slot, so a value
//! set through one is visible through the other.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use tabula_common::{format_number, parse_number};

/// Rendering of a missing cell.
pub const NA_TOKEN: &str = "NA";

/// A single table value with parallel text and numeric forms.
///
/// Equality compares the text form only: a cell built from `"5"` differs
/// from one built from `5.0`, whose text is `"5.0"`.
#[derive(Debug, Clone)]
pub struct Cell {
    text: String,
    number: f64,
}

impl Cell {
    /// Creates a cell from text.
    ///
    /// One layer of surrounding double quotes is removed before the text is
    /// stored and parsed, so `"\"42\""` becomes the number 42.
    pub fn from_text(value: impl AsRef<str>) -> Self {
        let mut cell = Self::na();
        cell.set_text(value);
        cell
    }

    /// Creates a cell from a number. NaN produces a missing cell.
    pub fn from_number(value: f64) -> Self {
        let mut cell = Self::na();
        cell.set_number(value);
        cell
    }

    /// Creates a missing cell.
    pub fn na() -> Self {
        Self {
            text: String::new(),
            number: f64::NAN,
        }
    }

    /// Replaces the value with `value`, parsed as in [`Cell::from_text`].
    pub fn set_text(&mut self, value: impl AsRef<str>) {
        let stripped = strip_quotes(value.as_ref());
        self.number = parse_number(stripped).unwrap_or(f64::NAN);
        self.text = stripped.to_string();
    }

    /// Replaces the value with `value`, rendered as in [`Cell::from_number`].
    pub fn set_number(&mut self, value: f64) {
        self.text = format_number(value);
        self.number = value;
    }

    /// Canonical text form; empty when missing.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Numeric value, or NaN when the cell is not numeric.
    pub fn number(&self) -> f64 {
        self.number
    }

    /// Numeric value, or `None` when the cell is not numeric.
    pub fn as_number(&self) -> Option<f64> {
        self.is_number().then_some(self.number)
    }

    pub fn is_na(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_number(&self) -> bool {
        !self.number.is_nan()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::na()
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Cell {}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_na() {
            f.write_str(NA_TOKEN)
        } else {
            f.write_str(&self.text)
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::from_text(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::from_text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::from_number(value)
    }
}

fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Shared handle to a table cell.
///
/// Cloning a `CellRef` clones the handle, not the value: both handles address
/// the same slot. Use [`CellRef::copy`] for an independent cell. Setters take
/// `&self`; this is the only way values inside a table change.
#[derive(Clone)]
pub struct CellRef(Rc<RefCell<Cell>>);

impl CellRef {
    pub fn new(cell: Cell) -> Self {
        Self(Rc::new(RefCell::new(cell)))
    }

    /// Borrows the cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is being mutated through another handle at the same
    /// time, which the single-owner model rules out.
    pub fn borrow(&self) -> Ref<'_, Cell> {
        self.0.borrow()
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> Cell {
        self.0.borrow().clone()
    }

    pub fn set_text(&self, value: impl AsRef<str>) {
        self.0.borrow_mut().set_text(value);
    }

    pub fn set_number(&self, value: f64) {
        self.0.borrow_mut().set_number(value);
    }

    /// Replaces the whole value.
    pub fn set(&self, cell: Cell) {
        *self.0.borrow_mut() = cell;
    }

    pub fn text(&self) -> String {
        self.0.borrow().text().to_string()
    }

    pub fn number(&self) -> f64 {
        self.0.borrow().number()
    }

    pub fn as_number(&self) -> Option<f64> {
        self.0.borrow().as_number()
    }

    pub fn is_na(&self) -> bool {
        self.0.borrow().is_na()
    }

    pub fn is_number(&self) -> bool {
        self.0.borrow().is_number()
    }

    /// New handle to an independent copy of the value.
    pub fn copy(&self) -> Self {
        Self::new(self.get())
    }

    /// Whether both handles address the same slot.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl From<Cell> for CellRef {
    fn from(cell: Cell) -> Self {
        Self::new(cell)
    }
}

impl PartialEq for CellRef {
    fn eq(&self, other: &Self) -> bool {
        *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CellRef").field(&*self.0.borrow()).finish()
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0.borrow(), f)
    }
}
