//! Shared utilities for tabula crates.
//!
//! This crate provides the text helpers used across the workspace: number
//! rendering and parsing, and the aligned grid layout used to print tables
//! and regression summaries.

pub mod format;
pub mod grid;

// Re-export commonly used functions at crate root for convenience
pub use format::{format_fixed, format_number, parse_number};
pub use grid::to_grid_string;
