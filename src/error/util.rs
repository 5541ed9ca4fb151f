//! Utility functions for error handling
//!
//! File access helpers that attach the path and purpose to IO failures.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{DashboardError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(DashboardError::io(
            path,
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found, needed for {purpose}"),
            ),
        ));
    }

    if !path.is_file() {
        return Err(DashboardError::io(
            path,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path is not a file, expected a file for {purpose}"),
            ),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "permission denied - check file permissions".to_string()
            }
            _ => format!("failed to open file for {purpose}: {e}"),
        };
        DashboardError::io(path, io::Error::new(e.kind(), context))
    })
}

/// Create (or truncate) a file for writing, creating parent directories as needed
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DashboardError::io(parent, e))?;
    }

    fs::File::create(path).map_err(|e| {
        DashboardError::io(
            path,
            io::Error::new(e.kind(), format!("failed to create file for {purpose}: {e}")),
        )
    })
}

/// Lowercased extension of a path, if any
#[must_use]
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}
