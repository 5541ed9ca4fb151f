//! Configuration for loading the base table and building dashboard views.

use serde::{Deserialize, Serialize};

/// Default migration threshold: a state counts as high-migration when its
/// year-over-year change is strictly beyond this many people
pub const DEFAULT_MIGRATION_THRESHOLD: i64 = 50_000;

/// Color themes offered by the theme selector
pub const COLOR_THEMES: [&str; 10] = [
    "blues", "cividis", "greens", "inferno", "magma", "plasma", "reds", "rainbow", "turbo",
    "viridis",
];

/// Configuration for the table loader
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Number of rows per record batch when reading
    pub batch_size: usize,
    /// Rows sampled for CSV schema inference (`None` reads the whole file)
    pub max_infer_records: Option<usize>,
    /// Require state codes to be exactly two ASCII letters
    pub validate_state_codes: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            batch_size: 8192,
            max_infer_records: None,
            validate_state_codes: true,
        }
    }
}

/// Configuration for dashboard view derivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Absolute change beyond which a state counts as high inbound/outbound
    pub migration_threshold: i64,
    /// Truncate the top states table to this many rows
    pub top_states_limit: Option<usize>,
    /// Theme used when none is selected
    pub default_theme: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            migration_threshold: DEFAULT_MIGRATION_THRESHOLD,
            top_states_limit: None,
            default_theme: COLOR_THEMES[0].to_string(),
        }
    }
}
