//! Tabular data model.
//!
//! - [`Cell`]: one value with parallel text and numeric forms
//! - [`Series`]: a row or named column of cells with NA-aware aggregates
//! - [`Table`]: rows and columns over the same cells, plus copy-producing
//!   structural operations (selection, numeric filtering, NA replacement,
//!   pivot to long form)
//!
//! # Example
//!
//! ```
//! use tabula_model::{Scalar, Table};
//!
//! let table = Table::from_array(
//!     ["name", "hp"],
//!     &[
//!         vec![Scalar::from("Garen"), Scalar::from(616.0)],
//!         vec![Scalar::from("Annie"), Scalar::from(511.0)],
//!     ],
//! )
//! .unwrap();
//!
//! let hp = table.column_by_name("hp").unwrap();
//! assert_eq!(hp.mean(), 563.5);
//!
//! // Cells are shared between views; derived tables are not.
//! let copy = table.copy();
//! table.cell(0, "hp").unwrap().set_number(700.0);
//! assert_eq!(table.row(0).unwrap().cell(1).unwrap().number(), 700.0);
//! assert_eq!(copy.cell(0, "hp").unwrap().number(), 616.0);
//! ```

pub mod cell;
pub mod error;
mod reshape;
pub mod scalar;
pub mod series;
pub mod table;

pub use cell::{Cell, CellRef, NA_TOKEN};
pub use error::{Axis, ModelError, Result};
pub use scalar::Scalar;
pub use series::{Series, SeriesKind};
pub use table::{ColumnRef, Table};
