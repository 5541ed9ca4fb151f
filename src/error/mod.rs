//! Error handling for the population dashboard.

pub mod util;

use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Errors raised while loading the base table or deriving dashboard views
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The selected year has no records in the base table
    #[error("Invalid year {year}: {}", describe_available(.available))]
    InvalidYear {
        /// The year that was requested
        year: i32,
        /// Years present in the base table, ascending
        available: Vec<i32>,
    },

    /// The input table does not match the expected wide schema
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Error opening, reading or writing a file
    #[error("IO error ({}): {source}", .path.display())]
    Io {
        /// The file involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Parquet error
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error converting records to or from Arrow
    #[error("Conversion error: {0}")]
    Conversion(#[from] serde_arrow::Error),

    /// Error serializing a dashboard view
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DashboardError {
    /// Create a malformed input error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }

    /// Create an IO error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error stems from an unknown year selection
    #[must_use]
    pub fn is_invalid_year(&self) -> bool {
        matches!(self, Self::InvalidYear { .. })
    }
}

fn describe_available(available: &[i32]) -> String {
    match (available.first(), available.last()) {
        (Some(first), Some(last)) if first == last => format!("only {first} is available"),
        (Some(first), Some(last)) => format!("available years are {first}-{last}"),
        _ => "no years are available".to_string(),
    }
}

/// Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
