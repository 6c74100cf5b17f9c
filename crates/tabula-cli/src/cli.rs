//! CLI argument definitions for `tabula`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use tabula_cli::commands::{NaReplacement, ReportFormat, ShowOptions, parse_row_range};

#[derive(Parser)]
#[command(
    name = "tabula",
    version,
    about = "Inspect, reshape and regress comma-separated tables",
    long_about = "Inspect, reshape and regress comma-separated tables.\n\n\
                  Every command reads a CSV file whose first line is the header.\n\
                  Pass '-' as the path to read from standard input."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a table, optionally sliced and cleaned.
    Show(ShowArgs),

    /// Print per-column counts and aggregates.
    Describe(InputArgs),

    /// Reshape a table from wide to long form.
    Pivot(PivotArgs),

    /// Fit a simple linear regression.
    Lm(LmArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// CSV file to read, or '-' for standard input.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Comma-separated column names to keep, in output order.
    #[arg(long = "columns", value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Half-open row range, e.g. 0..10.
    #[arg(long = "rows", value_name = "FROM..TO", value_parser = parse_row_range)]
    pub rows: Option<(usize, usize)>,

    /// Keep only rows where every cell is numeric.
    #[arg(long = "numeric")]
    pub numeric: bool,

    /// Columns exempt from --numeric.
    #[arg(long = "keep-text", value_delimiter = ',', requires = "numeric")]
    pub keep_text: Vec<String>,

    /// Replace missing cells with this number.
    #[arg(long = "na-number", value_name = "X", conflicts_with = "na_text")]
    pub na_number: Option<f64>,

    /// Replace missing cells with this text.
    #[arg(long = "na-text", value_name = "S")]
    pub na_text: Option<String>,
}

impl ShowArgs {
    pub fn to_options(&self) -> ShowOptions {
        let na = match (self.na_number, &self.na_text) {
            (Some(value), _) => Some(NaReplacement::Number(value)),
            (None, Some(text)) => Some(NaReplacement::Text(text.clone())),
            (None, None) => None,
        };
        ShowOptions {
            columns: self.columns.clone(),
            rows: self.rows,
            numeric: self.numeric,
            keep_text: self.keep_text.clone(),
            na,
        }
    }
}

#[derive(Args)]
pub struct PivotArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Comma-separated columns kept as identifiers.
    #[arg(long = "keep", value_delimiter = ',')]
    pub keep: Vec<String>,

    /// Title of the column receiving the moved column names.
    #[arg(long = "names-to", default_value = "name")]
    pub names_to: String,

    /// Title of the column receiving the moved values.
    #[arg(long = "values-to", default_value = "value")]
    pub values_to: String,
}

#[derive(Args)]
pub struct LmArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Response (dependent) column.
    #[arg(long = "response", short = 'y')]
    pub response: String,

    /// Predictor (independent) column.
    #[arg(long = "predictor", short = 'x')]
    pub predictor: String,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Json,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(value: ReportFormatArg) -> Self {
        match value {
            ReportFormatArg::Text => Self::Text,
            ReportFormatArg::Json => Self::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
