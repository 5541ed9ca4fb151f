//! A Rust library deriving dashboard views over a decade of U.S. state
//! population figures: year rankings, year-over-year migration deltas and
//! the share of states with high inbound or outbound migration.

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod loader;
pub mod models;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
pub use config::{DashboardConfig, LoaderConfig};
pub use dashboard::{ColorTheme, DashboardView};
pub use error::{DashboardError, Result};
pub use models::{
    Headline, Headlines, MigrationOutcome, MigrationRecord, MigrationSummary, PopulationRecord,
    PopulationTable, StateRow, WideTable, YearSlice,
};

// Pipeline entry points
pub use algorithm::{
    available_years, calculate_migration, default_year, headlines, pivot, select_year,
    summarize_migration, unpivot,
};
pub use export::export_long_table;
pub use loader::{TableFormat, load_population_table, load_wide_table};
pub use utils::format::format_number;
