//! Logging utilities for output
//!
//! Log helpers for file operations and the text report printed by the CLI.

pub mod console;
pub mod log;

pub use console::render_dashboard;
pub use log::{log_operation_complete, log_operation_start, log_row_warning};
