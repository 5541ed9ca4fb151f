//! Views derived from the base table on every year selection.

use serde::{Deserialize, Serialize};

use crate::models::population::PopulationRecord;

/// Records of one year ranked by population, largest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSlice {
    /// The selected year
    pub year: i32,
    /// Records of `year`, population descending
    pub records: Vec<PopulationRecord>,
}

impl YearSlice {
    /// Largest population in the slice, 0 when empty
    #[must_use]
    pub fn max_population(&self) -> u64 {
        self.records.iter().map(|r| r.population).max().unwrap_or(0)
    }

    /// Number of states in the slice
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the slice is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Year-over-year change of one state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationRecord {
    pub state_name: String,
    pub state_code: String,
    /// Population in the selected year
    pub population: u64,
    /// Population in the selected year minus the prior year (prior absent = 0)
    pub population_difference: i64,
}

/// Result of the migration calculator for one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MigrationOutcome {
    /// The selected year is the earliest in the data; no deltas exist
    NoPriorYear { year: i32 },
    /// Deltas ranked by `population_difference`, largest gain first
    Deltas {
        year: i32,
        records: Vec<MigrationRecord>,
    },
}

impl MigrationOutcome {
    /// The year the outcome was computed for
    #[must_use]
    pub fn year(&self) -> i32 {
        match self {
            Self::NoPriorYear { year } | Self::Deltas { year, .. } => *year,
        }
    }

    /// Ranked deltas, empty for the sentinel
    #[must_use]
    pub fn records(&self) -> &[MigrationRecord] {
        match self {
            Self::NoPriorYear { .. } => &[],
            Self::Deltas { records, .. } => records,
        }
    }

    /// Whether this is the minimum-year sentinel
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::NoPriorYear { .. })
    }
}

/// Share of states with high inbound/outbound migration, in whole percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationSummary {
    pub pct_high_inbound: u8,
    pub pct_high_outbound: u8,
}

/// A headline metric: the state with the largest gain or loss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Headline {
    /// No state applies (minimum year)
    NoValue,
    /// The state holding the extreme
    State {
        state_name: String,
        state_code: String,
        population: u64,
        population_difference: i64,
    },
}

impl From<&MigrationRecord> for Headline {
    fn from(record: &MigrationRecord) -> Self {
        Self::State {
            state_name: record.state_name.clone(),
            state_code: record.state_code.clone(),
            population: record.population,
            population_difference: record.population_difference,
        }
    }
}

/// Largest gain and largest loss of a year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headlines {
    pub largest_gain: Headline,
    pub largest_loss: Headline,
}

impl Headlines {
    /// Both headlines empty
    #[must_use]
    pub fn none() -> Self {
        Self {
            largest_gain: Headline::NoValue,
            largest_loss: Headline::NoValue,
        }
    }
}
