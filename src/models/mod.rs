//! Domain models for the population dashboard
//!
//! The wide table as stored on disk, the long-format base table built from it,
//! and the per-year views derived from the base table.

pub mod derived;
pub mod population;
pub mod wide;

pub use derived::{
    Headline, Headlines, MigrationOutcome, MigrationRecord, MigrationSummary, YearSlice,
};
pub use population::{PopulationRecord, PopulationTable};
pub use wide::{StateRow, WideTable};
