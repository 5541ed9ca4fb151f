//! Wide-format population table: one row per state, one column per year.

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// One state with its population for every year column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRow {
    /// Full state name
    pub state_name: String,
    /// Two-letter state code
    pub state_code: String,
    /// Populations aligned with `WideTable::years`
    pub populations: Vec<u64>,
}

/// The table as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WideTable {
    years: Vec<i32>,
    rows: Vec<StateRow>,
}

impl WideTable {
    /// Create a wide table, checking that every row has one value per year column
    /// and that year columns are distinct
    pub fn new(years: Vec<i32>, rows: Vec<StateRow>) -> Result<Self> {
        for (i, year) in years.iter().enumerate() {
            if years[..i].contains(year) {
                return Err(DashboardError::malformed(format!(
                    "year column {year} appears more than once"
                )));
            }
        }

        if let Some(row) = rows.iter().find(|r| r.populations.len() != years.len()) {
            return Err(DashboardError::malformed(format!(
                "state {} has {} values for {} year columns",
                row.state_code,
                row.populations.len(),
                years.len()
            )));
        }

        Ok(Self { years, rows })
    }

    /// Year columns in table order
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// State rows in table order
    #[must_use]
    pub fn rows(&self) -> &[StateRow] {
        &self.rows
    }

    /// Number of (state, year) cells
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.years.len() * self.rows.len()
    }
}
