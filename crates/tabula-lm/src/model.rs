//! Ordinary least squares with one predictor.

use serde::Serialize;
use tabula_model::{Result, Table};
use tracing::{debug, warn};

/// One row of the coefficients table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coefficient {
    pub term: String,
    pub estimate: f64,
    pub std_error: f64,
    pub t_value: f64,
}

/// A fitted simple linear regression `response = b0 + b1 * predictor`.
///
/// Everything is computed once at construction. Degenerate inputs are not
/// errors: with two or fewer observations the degrees of freedom drop to
/// zero or below, and a constant predictor gives `Sxx = 0`. Both leave NaN
/// or infinite values in the affected statistics.
#[derive(Debug, Clone)]
pub struct SimpleLinearModel {
    response: String,
    predictor: String,
    points: Vec<(f64, f64)>,
    x_mean: f64,
    y_mean: f64,
    sxx: f64,
    syy: f64,
    sxy: f64,
    intercept: f64,
    slope: f64,
    correlation: f64,
    rss: f64,
    ss_reg: f64,
    mse: f64,
    intercept_std_error: f64,
    slope_std_error: f64,
}

impl SimpleLinearModel {
    /// Fits `response` against `predictor` using the rows of `table` where
    /// both columns are numeric.
    ///
    /// # Errors
    ///
    /// [`tabula_model::ModelError::ColumnNotFound`] when either name is not
    /// a column of `table`.
    pub fn fit(table: &Table, response: &str, predictor: &str) -> Result<Self> {
        let used = table.select_columns_by_name(&[response, predictor])?;
        let numeric = used.numeric_rows();
        debug!(
            rows = table.row_count(),
            dropped = table.row_count() - numeric.row_count(),
            response,
            predictor,
            "fitting simple linear model"
        );

        let x = numeric.column_by_name(predictor)?;
        let y = numeric.column_by_name(response)?;
        let points = x
            .iter()
            .zip(y)
            .map(|(x, y)| (x.number(), y.number()))
            .collect();
        Ok(Self::from_points(response, predictor, points))
    }

    /// Fits a model directly on `(x, y)` observations.
    pub fn from_points(
        response: impl Into<String>,
        predictor: impl Into<String>,
        points: Vec<(f64, f64)>,
    ) -> Self {
        let n = points.len() as f64;
        let x_mean = points.iter().map(|&(x, _)| x).sum::<f64>() / n;
        let y_mean = points.iter().map(|&(_, y)| y).sum::<f64>() / n;

        let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
        for &(x, y) in &points {
            let dx = x - x_mean;
            let dy = y - y_mean;
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;
        let correlation = sxy / (sxx * syy).sqrt();

        let (mut rss, mut ss_reg) = (0.0, 0.0);
        for &(x, y) in points.iter().filter(|(x, y)| !x.is_nan() && !y.is_nan()) {
            let fitted = intercept + slope * x;
            rss += (y - fitted).powi(2);
            ss_reg += (y_mean - fitted).powi(2);
        }

        let df = points.len() as i64 - 2;
        let mse = rss / df as f64;
        let slope_std_error = (mse / sxx).sqrt();
        let intercept_std_error = (mse * (1.0 / n + x_mean * x_mean / sxx)).sqrt();

        if df <= 0 || sxx == 0.0 {
            warn!(
                n = points.len(),
                df, sxx, "degenerate fit, statistics contain NaN or infinite values"
            );
        }

        Self {
            response: response.into(),
            predictor: predictor.into(),
            points,
            x_mean,
            y_mean,
            sxx,
            syy,
            sxy,
            intercept,
            slope,
            correlation,
            rss,
            ss_reg,
            mse,
            intercept_std_error,
            slope_std_error,
        }
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn predictor(&self) -> &str {
        &self.predictor
    }

    /// Number of observations used in the fit.
    pub fn n(&self) -> usize {
        self.points.len()
    }

    /// `n - 2`; zero or negative for two or fewer observations.
    pub fn degrees_of_freedom(&self) -> i64 {
        self.points.len() as i64 - 2
    }

    pub fn x_mean(&self) -> f64 {
        self.x_mean
    }

    pub fn y_mean(&self) -> f64 {
        self.y_mean
    }

    pub fn sxx(&self) -> f64 {
        self.sxx
    }

    pub fn syy(&self) -> f64 {
        self.syy
    }

    pub fn sxy(&self) -> f64 {
        self.sxy
    }

    /// Total sum of squares, equal to `Syy`.
    pub fn sst(&self) -> f64 {
        self.syy
    }

    /// Regression sum of squares.
    pub fn ss_reg(&self) -> f64 {
        self.ss_reg
    }

    /// Residual sum of squares.
    pub fn rss(&self) -> f64 {
        self.rss
    }

    /// Mean squared error, `RSS / df`.
    pub fn mse(&self) -> f64 {
        self.mse
    }

    /// Residual standard error, `sqrt(MSE)`.
    pub fn rse(&self) -> f64 {
        self.mse.sqrt()
    }

    /// Pearson correlation between predictor and response.
    pub fn correlation(&self) -> f64 {
        self.correlation
    }

    pub fn r_squared(&self) -> f64 {
        self.correlation.powi(2)
    }

    pub fn adj_r_squared(&self) -> f64 {
        let n = self.points.len() as f64;
        1.0 - (self.rss / self.degrees_of_freedom() as f64) / (self.sst() / (n - 1.0))
    }

    /// `SSreg / MSE`.
    pub fn f_statistic(&self) -> f64 {
        self.ss_reg / self.mse
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Intercept then slope, with standard errors and t-values.
    pub fn coefficients(&self) -> [Coefficient; 2] {
        [
            Coefficient {
                term: "Intercept".to_string(),
                estimate: self.intercept,
                std_error: self.intercept_std_error,
                t_value: self.intercept / self.intercept_std_error,
            },
            Coefficient {
                term: self.predictor.clone(),
                estimate: self.slope,
                std_error: self.slope_std_error,
                t_value: self.slope / self.slope_std_error,
            },
        ]
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Fitted value for every observation, in input order.
    pub fn fitted_values(&self) -> Vec<f64> {
        self.points.iter().map(|&(x, _)| self.predict(x)).collect()
    }

    /// `y - fitted` for every observation, in input order.
    pub fn residuals(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|&(x, y)| y - self.predict(x))
            .collect()
    }
}
