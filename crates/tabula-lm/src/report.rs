//! Text and JSON renderings of a fitted model.

use std::fmt;

use serde::Serialize;
use tabula_common::{format_fixed, to_grid_string};

use crate::model::{Coefficient, SimpleLinearModel};

impl SimpleLinearModel {
    /// Coefficients table followed by the goodness-of-fit lines.
    ///
    /// ```text
    /// Coefficients:
    ///           Estimate Std. Error t-value
    /// Intercept 2.2000   0.9381     2.3452
    /// x         0.6000   0.2828     2.1213
    ///
    /// Residual standard error: 0.8944 on 3 degrees of freedom.
    /// Multiple R-squared: 0.6000, Adjusted R-squared: 0.4667
    /// F-statistics: 4.5000 on 3 degrees of freedom.
    /// ```
    pub fn summary(&self) -> String {
        let mut matrix = vec![vec![
            String::new(),
            "Estimate".to_string(),
            "Std. Error".to_string(),
            "t-value".to_string(),
        ]];
        matrix.extend(self.coefficients().into_iter().map(|c| {
            vec![
                c.term,
                format_fixed(c.estimate),
                format_fixed(c.std_error),
                format_fixed(c.t_value),
            ]
        }));

        let df = self.degrees_of_freedom();
        format!(
            "Coefficients:\n{}\n\
             Residual standard error: {} on {df} degrees of freedom.\n\
             Multiple R-squared: {}, Adjusted R-squared: {}\n\
             F-statistics: {} on {df} degrees of freedom.",
            to_grid_string(&matrix, " "),
            format_fixed(self.rse()),
            format_fixed(self.r_squared()),
            format_fixed(self.adj_r_squared()),
            format_fixed(self.f_statistic()),
        )
    }

    /// Analysis of variance table for the single predictor.
    pub fn anova(&self) -> String {
        let ss_reg = format_fixed(self.ss_reg());
        let matrix = [
            ["", "df", "Sum Sq.", "Mean Sq.", "F value"].map(String::from).to_vec(),
            vec![
                self.predictor().to_string(),
                "1".to_string(),
                ss_reg.clone(),
                ss_reg,
                format_fixed(self.f_statistic()),
            ],
            vec![
                "Residual".to_string(),
                self.degrees_of_freedom().to_string(),
                format_fixed(self.rss()),
                format_fixed(self.mse()),
                String::new(),
            ],
        ];
        format!("Response: {}\n{}", self.response(), to_grid_string(&matrix, " "))
    }

    /// Every statistic of the fit in a serializable form.
    pub fn report(&self) -> FitReport {
        FitReport {
            response: self.response().to_string(),
            predictor: self.predictor().to_string(),
            n: self.n(),
            degrees_of_freedom: self.degrees_of_freedom(),
            coefficients: self.coefficients().to_vec(),
            residual_standard_error: self.rse(),
            r_squared: self.r_squared(),
            adj_r_squared: self.adj_r_squared(),
            f_statistic: self.f_statistic(),
            correlation: self.correlation(),
            sst: self.sst(),
            ss_reg: self.ss_reg(),
            rss: self.rss(),
            mse: self.mse(),
        }
    }
}

impl fmt::Display for SimpleLinearModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}", self.summary(), self.anova())
    }
}

/// Snapshot of a fitted model. Non-finite values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitReport {
    pub response: String,
    pub predictor: String,
    pub n: usize,
    pub degrees_of_freedom: i64,
    pub coefficients: Vec<Coefficient>,
    pub residual_standard_error: f64,
    pub r_squared: f64,
    pub adj_r_squared: f64,
    pub f_statistic: f64,
    pub correlation: f64,
    pub sst: f64,
    pub ss_reg: f64,
    pub rss: f64,
    pub mse: f64,
}
