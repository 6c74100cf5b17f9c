//! Fitting models on tables.

use tabula_ingest::parse_table;
use tabula_lm::SimpleLinearModel;
use tabula_model::{ModelError, Table};

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

fn golden_with_gaps() -> Table {
    parse_table(
        "id, x, y, note\n\
         a, 1, 2, first\n\
         b, 2, 4,\n\
         c, NA, 7, missing x\n\
         d, 3, 5,\n\
         e, 4, , missing y\n\
         f, 4, 4,\n\
         g, 5, 5, last\n",
    )
    .expect("parse table")
}

#[test]
fn rows_with_missing_values_are_dropped() {
    let table = golden_with_gaps();
    let model = SimpleLinearModel::fit(&table, "y", "x").unwrap();

    assert_eq!(model.n(), 5);
    assert_eq!(model.degrees_of_freedom(), 3);
    assert!(close(model.slope(), 0.6));
    assert!(close(model.intercept(), 2.2));
    assert!(close(model.r_squared(), 0.6));
    assert_eq!(model.response(), "y");
    assert_eq!(model.predictor(), "x");
}

#[test]
fn fitting_leaves_the_table_untouched() {
    let table = golden_with_gaps();
    let before = table.to_display_matrix();
    let _ = SimpleLinearModel::fit(&table, "y", "x").unwrap();
    assert_eq!(table.to_display_matrix(), before);
}

#[test]
fn unknown_column_is_an_error() {
    let table = golden_with_gaps();
    let err = SimpleLinearModel::fit(&table, "y", "z").unwrap_err();
    assert_eq!(
        err,
        ModelError::ColumnNotFound {
            name: "z".to_string()
        }
    );
}

#[test]
fn lowercase_infinity_rows_are_dropped() {
    let table = parse_table("x,y\n1,2\n2,4\ninf,5\n3,6\n4,8\n").unwrap();
    let model = SimpleLinearModel::fit(&table, "y", "x").unwrap();

    assert_eq!(model.n(), 4);
    assert!(close(model.slope(), 2.0));
    assert!(close(model.intercept(), 0.0));
}

#[test]
fn constant_predictor_still_fits() {
    let table = parse_table("x,y\n1,2\n1,3\n1,4\n").unwrap();
    let model = SimpleLinearModel::fit(&table, "y", "x").unwrap();
    assert_eq!(model.sxx(), 0.0);
    assert!(!model.slope().is_finite());
    assert!(model.summary().starts_with("Coefficients:\n"));
}

#[test]
fn json_report() {
    let table = golden_with_gaps();
    let report = SimpleLinearModel::fit(&table, "y", "x").unwrap().report();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["response"], "y");
    assert_eq!(json["n"], 5);
    assert_eq!(json["coefficients"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["coefficients"][0]["term"], "Intercept");
    let mut fields: Vec<&String> = json.as_object().unwrap().keys().collect();
    fields.sort();
    insta::assert_debug_snapshot!(
        fields,
        @r#"
    [
        "adj_r_squared",
        "coefficients",
        "correlation",
        "degrees_of_freedom",
        "f_statistic",
        "mse",
        "n",
        "predictor",
        "r_squared",
        "residual_standard_error",
        "response",
        "rss",
        "ss_reg",
        "sst",
    ]
    "#
    );
}
