//! End-to-end runs of the subcommands against files on disk.

use std::fs;
use std::path::PathBuf;

use tabula_cli::commands::{
    ReportFormat, ShowOptions, run_describe, run_lm, run_pivot, run_show,
};
use tempfile::TempDir;

const SCORES: &str = "\
student, week1, week2
\"ann\", 2, 4
\"bob\", 4, 5
\"cid\", , 7
";

const GOLDEN: &str = "x,y\n1,2\n2,4\n3,5\n4,4\n5,5\n";

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn show_prints_grid() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "scores.csv", SCORES);

    let output = run_show(&path, &ShowOptions::default()).unwrap();
    assert_eq!(
        output,
        "student, week1, week2\n\
         ann    , 2    , 4    \n\
         bob    , 4    , 5    \n\
         cid    , NA   , 7    \n"
    );
}

#[test]
fn pivot_prints_long_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "scores.csv", SCORES);

    let output = run_pivot(&path, &["student".to_string()], "week", "score").unwrap();
    let lines: Vec<&str> = output.lines().map(str::trim_end).collect();
    insta::assert_debug_snapshot!(lines, @r#"
    [
        "student, week , score",
        "ann    , week1, 2",
        "ann    , week2, 4",
        "bob    , week1, 4",
        "bob    , week2, 5",
        "cid    , week1, NA",
        "cid    , week2, 7",
    ]
    "#);
}

#[test]
fn describe_lists_every_column() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "scores.csv", SCORES);

    let output = run_describe(&path).unwrap();
    for name in ["student", "week1", "week2"] {
        assert!(output.contains(name), "missing {name} in:\n{output}");
    }
}

#[test]
fn lm_text_report() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "golden.csv", GOLDEN);

    let output = run_lm(&path, "y", "x", ReportFormat::Text).unwrap();
    assert!(output.starts_with("Coefficients:\n"));
    assert!(output.contains("Multiple R-squared: 0.6000, Adjusted R-squared: 0.4667\n"));
    assert!(output.contains("\nResponse: y\n"));
}

#[test]
fn lm_json_report() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "golden.csv", GOLDEN);

    let output = run_lm(&path, "y", "x", ReportFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["n"], 5);
    assert_eq!(json["degrees_of_freedom"], 3);
    let slope = json["coefficients"][1]["estimate"].as_f64().unwrap();
    assert!((slope - 0.6).abs() < 1e-9);
}

#[test]
fn missing_input_is_reported_with_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");

    let error = run_show(&path, &ShowOptions::default()).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.starts_with("read table "));
    assert!(message.contains("absent.csv"));
}
