//! Library side of the `tabula` command-line tool.

pub mod commands;
pub mod logging;
pub mod summary;
