//! Base population table
//!
//! The long-format records produced by the reshaper, and the immutable table
//! every derived view is computed from.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::algorithm::reshape::unpivot;
use crate::error::{DashboardError, Result};
use crate::models::wide::WideTable;

/// Population of one state in one year
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PopulationRecord {
    /// Full state name, e.g. "California"
    pub state_name: String,
    /// Two-letter state code, e.g. "CA"
    pub state_code: String,
    /// Calendar year
    pub year: i32,
    /// Resident population
    pub population: u64,
}

impl PopulationRecord {
    /// Create a new record
    pub fn new(
        state_name: impl Into<String>,
        state_code: impl Into<String>,
        year: i32,
        population: u64,
    ) -> Self {
        Self {
            state_name: state_name.into(),
            state_code: state_code.into(),
            year,
            population,
        }
    }
}

/// The loaded base table.
///
/// Records keep the order they were built in (year-major after an unpivot).
/// Lookups go through an index keyed by year and state code, so derived
/// computations never depend on row positions.
#[derive(Debug, Clone)]
pub struct PopulationTable {
    records: Vec<PopulationRecord>,
    by_year: FxHashMap<i32, FxHashMap<String, usize>>,
    years: Vec<i32>,
}

impl PopulationTable {
    /// Build the table from long-format records
    ///
    /// # Errors
    /// Returns `MalformedInput` if a `(state_code, year)` pair occurs twice.
    pub fn from_records(records: Vec<PopulationRecord>) -> Result<Self> {
        let mut by_year: FxHashMap<i32, FxHashMap<String, usize>> = FxHashMap::default();

        for (idx, record) in records.iter().enumerate() {
            let codes = by_year.entry(record.year).or_default();
            if codes.insert(record.state_code.clone(), idx).is_some() {
                return Err(DashboardError::malformed(format!(
                    "duplicate record for state {} in {}",
                    record.state_code, record.year
                )));
            }
        }

        let mut years: Vec<i32> = by_year.keys().copied().collect();
        years.sort_unstable();

        Ok(Self {
            records,
            by_year,
            years,
        })
    }

    /// Unpivot a wide table and build the base table from it
    pub fn from_wide(wide: &WideTable) -> Result<Self> {
        Self::from_records(unpivot(wide))
    }

    /// All records, in build order
    #[must_use]
    pub fn records(&self) -> &[PopulationRecord] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years, ascending
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// The earliest year, which has no prior-year data
    #[must_use]
    pub fn min_year(&self) -> Option<i32> {
        self.years.first().copied()
    }

    /// The latest year
    #[must_use]
    pub fn max_year(&self) -> Option<i32> {
        self.years.last().copied()
    }

    /// Whether any record exists for `year`
    #[must_use]
    pub fn contains_year(&self, year: i32) -> bool {
        self.by_year.contains_key(&year)
    }

    /// Fail with `InvalidYear` unless `year` is present
    pub fn ensure_year(&self, year: i32) -> Result<()> {
        if self.contains_year(year) {
            Ok(())
        } else {
            Err(DashboardError::InvalidYear {
                year,
                available: self.years.clone(),
            })
        }
    }

    /// Look up the record for a state in a year
    #[must_use]
    pub fn get(&self, state_code: &str, year: i32) -> Option<&PopulationRecord> {
        self.by_year
            .get(&year)
            .and_then(|codes| codes.get(state_code))
            .map(|&idx| &self.records[idx])
    }

    /// Records for one year, in build order
    pub fn records_for_year(&self, year: i32) -> impl Iterator<Item = &PopulationRecord> {
        self.records.iter().filter(move |r| r.year == year)
    }

    /// Population per state code for one year. Empty if the year is absent.
    #[must_use]
    pub fn populations_for_year(&self, year: i32) -> FxHashMap<&str, u64> {
        self.by_year
            .get(&year)
            .map(|codes| {
                codes
                    .iter()
                    .map(|(code, &idx)| (code.as_str(), self.records[idx].population))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of distinct states across all years
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.by_year
            .values()
            .flat_map(|codes| codes.keys())
            .collect::<FxHashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_table() -> PopulationTable {
        PopulationTable::from_records(vec![
            PopulationRecord::new("California", "CA", 2010, 100),
            PopulationRecord::new("Texas", "TX", 2010, 200),
            PopulationRecord::new("California", "CA", 2011, 150),
            PopulationRecord::new("Texas", "TX", 2011, 180),
        ])
        .expect("valid table")
    }

    #[test]
    fn test_years_and_lookup() {
        let table = toy_table();
        assert_eq!(table.years(), &[2010, 2011]);
        assert_eq!(table.min_year(), Some(2010));
        assert_eq!(table.max_year(), Some(2011));
        assert_eq!(table.len(), 4);
        assert_eq!(table.state_count(), 2);
        assert_eq!(table.get("TX", 2011).map(|r| r.population), Some(180));
        assert!(table.get("NY", 2011).is_none());
        assert!(table.get("CA", 2012).is_none());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = PopulationTable::from_records(vec![
            PopulationRecord::new("California", "CA", 2010, 100),
            PopulationRecord::new("California", "CA", 2010, 101),
        ])
        .unwrap_err();
        assert!(matches!(err, DashboardError::MalformedInput(_)));
    }

    #[test]
    fn test_ensure_year() {
        let table = toy_table();
        assert!(table.ensure_year(2011).is_ok());
        match table.ensure_year(2025) {
            Err(DashboardError::InvalidYear { year, available }) => {
                assert_eq!(year, 2025);
                assert_eq!(available, vec![2010, 2011]);
            }
            other => panic!("expected InvalidYear, got {other:?}"),
        }
    }

    #[test]
    fn test_populations_for_year() {
        let table = toy_table();
        let pops = table.populations_for_year(2010);
        assert_eq!(pops.get("CA"), Some(&100));
        assert_eq!(pops.get("TX"), Some(&200));
        assert!(table.populations_for_year(1999).is_empty());
    }
}
