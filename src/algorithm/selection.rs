//! Year selection: filter the base table to one year and rank it.

use log::debug;

use crate::error::Result;
use crate::models::{PopulationTable, YearSlice};

/// Records of `year` ranked by population, largest first.
///
/// Ties keep the order of the base table, i.e. the original state order.
///
/// # Errors
/// Returns `InvalidYear` when the base table has no record for `year`.
pub fn select_year(table: &PopulationTable, year: i32) -> Result<YearSlice> {
    table.ensure_year(year)?;

    let mut records: Vec<_> = table.records_for_year(year).cloned().collect();
    // sort_by is stable
    records.sort_by(|a, b| b.population.cmp(&a.population));

    debug!("Selected {} states for {year}", records.len());
    Ok(YearSlice { year, records })
}

/// Years offered by the year selector, latest first
#[must_use]
pub fn available_years(table: &PopulationTable) -> Vec<i32> {
    table.years().iter().rev().copied().collect()
}

/// The year selected when the user has not picked one: the earliest year
#[must_use]
pub fn default_year(table: &PopulationTable) -> Option<i32> {
    table.min_year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::models::PopulationRecord;

    fn table() -> PopulationTable {
        PopulationTable::from_records(vec![
            PopulationRecord::new("Wyoming", "WY", 2010, 564_000),
            PopulationRecord::new("Texas", "TX", 2010, 25_000_000),
            PopulationRecord::new("Vermont", "VT", 2010, 625_000),
            PopulationRecord::new("Delaware", "DE", 2010, 625_000),
            PopulationRecord::new("Wyoming", "WY", 2011, 567_000),
            PopulationRecord::new("Texas", "TX", 2011, 25_600_000),
            PopulationRecord::new("Vermont", "VT", 2011, 626_000),
            PopulationRecord::new("Delaware", "DE", 2011, 907_000),
        ])
        .expect("valid table")
    }

    #[test]
    fn test_select_year_ranks_descending() {
        let slice = select_year(&table(), 2011).expect("year present");
        let codes: Vec<&str> = slice.records.iter().map(|r| r.state_code.as_str()).collect();
        assert_eq!(codes, vec!["TX", "DE", "VT", "WY"]);
        assert_eq!(slice.max_population(), 25_600_000);
        assert!(slice.records.iter().all(|r| r.year == 2011));
    }

    #[test]
    fn test_ties_keep_state_order() {
        let slice = select_year(&table(), 2010).expect("year present");
        let codes: Vec<&str> = slice.records.iter().map(|r| r.state_code.as_str()).collect();
        // VT and DE tie; VT comes first in the base table
        assert_eq!(codes, vec!["TX", "VT", "DE", "WY"]);
    }

    #[test]
    fn test_absent_year_fails() {
        let err = select_year(&table(), 2025).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidYear { year: 2025, .. }));
    }

    #[test]
    fn test_year_list_and_default() {
        let table = table();
        assert_eq!(available_years(&table), vec![2011, 2010]);
        assert_eq!(default_year(&table), Some(2010));
    }
}
