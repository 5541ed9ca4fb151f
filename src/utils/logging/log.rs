//! Logging utilities
//!
//! Consistent log lines for file-level operations (loading the base table,
//! exporting the long table).

use std::path::Path;
use std::time::Duration;

/// Log an operation start
///
/// # Arguments
/// * `operation` - Description of the operation, e.g. "Loading population table from"
/// * `path` - Path of the file being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an operation completion
///
/// # Arguments
/// * `operation` - Past-tense verb phrase, e.g. "loaded"
/// * `path` - Path of the file that was operated on
/// * `rows` - Number of rows read or written
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(operation: &str, path: &Path, rows: usize, elapsed: Option<Duration>) {
    let timing = elapsed.map(|d| format!(" in {d:?}")).unwrap_or_default();
    log::info!("{} {rows} rows ({}){timing}", capitalize(operation), path.display());
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

/// Log a tolerated oddity in one state row of the input
///
/// # Arguments
/// * `state_code` - Code of the row the warning is about
/// * `message` - What is odd about the row
pub fn log_row_warning(state_code: &str, message: &str) {
    log::warn!("State {state_code}: {message}");
}
