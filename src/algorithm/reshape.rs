//! Wide/long reshaping of the population table
//!
//! `unpivot` turns one row per state into one record per (state, year);
//! `pivot` is its exact inverse.

use log::debug;
use rustc_hash::FxHashMap;

use crate::error::{DashboardError, Result};
use crate::models::{PopulationRecord, StateRow, WideTable};

/// Unpivot a wide table into long-format records.
///
/// Records come out year-major: every state for the first year column, then
/// every state for the next one. State order within a year is the row order of
/// the wide table. The output always has `states x year columns` records.
#[must_use]
pub fn unpivot(wide: &WideTable) -> Vec<PopulationRecord> {
    let mut records = Vec::with_capacity(wide.cell_count());

    for (col, &year) in wide.years().iter().enumerate() {
        for row in wide.rows() {
            records.push(PopulationRecord {
                state_name: row.state_name.clone(),
                state_code: row.state_code.clone(),
                year,
                population: row.populations[col],
            });
        }
    }

    debug!(
        "Unpivoted {} states x {} years into {} records",
        wide.rows().len(),
        wide.years().len(),
        records.len()
    );
    records
}

/// Pivot long-format records back into a wide table.
///
/// Year columns and state rows are ordered by first appearance, which makes
/// `pivot(&unpivot(w)) == w` for any wide table `w`.
///
/// # Errors
/// Returns `MalformedInput` if a `(state_code, year)` pair is duplicated, a
/// state code carries two different names, or a state lacks a value for one
/// of the years.
pub fn pivot(records: &[PopulationRecord]) -> Result<WideTable> {
    let mut years: Vec<i32> = Vec::new();
    let mut states: Vec<(&str, &str)> = Vec::new();
    let mut state_index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut cells: FxHashMap<(&str, i32), u64> = FxHashMap::default();

    for record in records {
        if !years.contains(&record.year) {
            years.push(record.year);
        }

        match state_index.get(record.state_code.as_str()) {
            Some(&idx) if states[idx].0 != record.state_name => {
                return Err(DashboardError::malformed(format!(
                    "state code {} is named both '{}' and '{}'",
                    record.state_code, states[idx].0, record.state_name
                )));
            }
            Some(_) => {}
            None => {
                state_index.insert(record.state_code.as_str(), states.len());
                states.push((record.state_name.as_str(), record.state_code.as_str()));
            }
        }

        if cells
            .insert((record.state_code.as_str(), record.year), record.population)
            .is_some()
        {
            return Err(DashboardError::malformed(format!(
                "duplicate record for state {} in {}",
                record.state_code, record.year
            )));
        }
    }

    let mut rows = Vec::with_capacity(states.len());
    for (state_name, state_code) in states {
        let populations = years
            .iter()
            .map(|&year| {
                cells.get(&(state_code, year)).copied().ok_or_else(|| {
                    DashboardError::malformed(format!(
                        "state {state_code} has no population for {year}"
                    ))
                })
            })
            .collect::<Result<Vec<u64>>>()?;

        rows.push(StateRow {
            state_name: state_name.to_string(),
            state_code: state_code.to_string(),
            populations,
        });
    }

    WideTable::new(years, rows)
}
