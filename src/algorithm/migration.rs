//! Year-over-year migration deltas
//!
//! For a selected year Y every state present in Y is compared against its own
//! population in Y-1, looked up by state code. A state missing from Y-1 counts
//! as having had a population of 0. The earliest year of the table has no
//! prior year at all and yields the `NoPriorYear` sentinel instead of deltas.

use log::debug;
use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::models::{MigrationOutcome, MigrationRecord, PopulationRecord, PopulationTable};

/// Compute the migration outcome for `year`.
///
/// # Errors
/// Returns `InvalidYear` when the base table has no record for `year`.
pub fn calculate_migration(table: &PopulationTable, year: i32) -> Result<MigrationOutcome> {
    table.ensure_year(year)?;

    if table.min_year() == Some(year) {
        debug!("{year} is the earliest year, no migration deltas");
        return Ok(MigrationOutcome::NoPriorYear { year });
    }

    let prior = table.populations_for_year(year - 1);
    if prior.is_empty() {
        debug!("No records for {}, prior populations default to 0", year - 1);
    }

    let records = population_differences(table.records_for_year(year), &prior);
    debug!("Computed {} migration deltas for {year}", records.len());

    Ok(MigrationOutcome::Deltas { year, records })
}

/// Difference of each current record against `prior`, keyed by state code.
///
/// States missing from `prior` are compared against 0. The result is sorted
/// by `population_difference`, largest gain first; ties keep input order.
pub fn population_differences<'a>(
    current: impl IntoIterator<Item = &'a PopulationRecord>,
    prior: &FxHashMap<&str, u64>,
) -> Vec<MigrationRecord> {
    let mut records: Vec<MigrationRecord> = current
        .into_iter()
        .map(|record| {
            let previous = prior.get(record.state_code.as_str()).copied().unwrap_or(0);
            MigrationRecord {
                state_name: record.state_name.clone(),
                state_code: record.state_code.clone(),
                population: record.population,
                population_difference: signed(record.population).saturating_sub(signed(previous)),
            }
        })
        .collect();

    records.sort_by(|a, b| b.population_difference.cmp(&a.population_difference));
    records
}

fn signed(population: u64) -> i64 {
    i64::try_from(population).unwrap_or(i64::MAX)
}
