//! Derivation pipeline
//!
//! Reshaping of the loaded table, year selection, migration deltas and the
//! migration summary. Every function takes the base table by reference and
//! returns fresh values; nothing here mutates shared state.

pub mod migration;
pub mod reshape;
pub mod selection;
pub mod summary;

pub use migration::{calculate_migration, population_differences};
pub use reshape::{pivot, unpivot};
pub use selection::{available_years, default_year, select_year};
pub use summary::{headlines, summarize_migration};
