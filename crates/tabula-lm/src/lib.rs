//! Simple linear regression over tables.
//!
//! [`SimpleLinearModel::fit`] selects the response and predictor columns,
//! drops every row where either is not numeric, and computes the least
//! squares line with its standard errors, t-values, R² and ANOVA
//! decomposition.
//!
//! ```
//! use tabula_lm::SimpleLinearModel;
//! use tabula_model::{Scalar, Table};
//!
//! let rows: Vec<Vec<Scalar>> = [(1.0, 2.0), (2.0, 4.0), (3.0, 5.0), (4.0, 4.0), (5.0, 5.0)]
//!     .into_iter()
//!     .map(|(x, y)| vec![Scalar::from(x), Scalar::from(y)])
//!     .collect();
//! let table = Table::from_array(["x", "y"], &rows).unwrap();
//!
//! let model = SimpleLinearModel::fit(&table, "y", "x").unwrap();
//! assert!((model.slope() - 0.6).abs() < 1e-9);
//! assert!((model.intercept() - 2.2).abs() < 1e-9);
//! ```

pub mod model;
pub mod report;

pub use model::{Coefficient, SimpleLinearModel};
pub use report::FitReport;
