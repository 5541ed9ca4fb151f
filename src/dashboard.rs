//! Dashboard view assembly
//!
//! One user interaction (a year and a color theme) maps to one
//! [`DashboardView`]: the data behind the gains/losses metrics, the migration
//! donuts, the choropleth map, the heatmap and the top states table. Rendering
//! is left to the consumer; the view only carries structured data.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::{calculate_migration, headlines, select_year, summarize_migration};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::models::{Headline, MigrationSummary, PopulationTable, YearSlice};
use crate::utils::format::{format_number, format_population};

/// Marker shown in place of a state name or value when there is none
pub const NO_VALUE: &str = "-";

/// Color theme chosen by the user. Passed through to the renderer unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTheme(String);

impl ColorTheme {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Two-tone palette of a donut gauge: filled arc, then background arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonutPalette {
    Blue,
    Green,
    Orange,
    Red,
}

impl DonutPalette {
    /// Hex colors `[filled, background]`
    #[must_use]
    pub fn colors(self) -> [&'static str; 2] {
        match self {
            Self::Blue => ["#29b5e8", "#155F7A"],
            Self::Green => ["#27AE60", "#12783D"],
            Self::Orange => ["#F39C12", "#875A12"],
            Self::Red => ["#E74C3C", "#781F16"],
        }
    }
}

/// A ring chart showing one percentage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonutGauge {
    pub label: String,
    /// Filled share, 0-100
    pub percent: u8,
    pub palette: DonutPalette,
    pub colors: [String; 2],
}

impl DonutGauge {
    fn new(label: &str, percent: u8, palette: DonutPalette) -> Self {
        Self {
            label: label.to_string(),
            percent,
            palette,
            colors: palette.colors().map(str::to_string),
        }
    }
}

/// A headline metric as displayed: label, value and delta strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub delta: String,
    pub headline: Headline,
}

impl MetricCard {
    /// Format a headline. `NoValue` renders as `-` / `-` with an empty delta.
    #[must_use]
    pub fn from_headline(headline: Headline) -> Self {
        let (label, value, delta) = match &headline {
            Headline::NoValue => (NO_VALUE.to_string(), NO_VALUE.to_string(), String::new()),
            Headline::State {
                state_name,
                population,
                population_difference,
                ..
            } => (
                state_name.clone(),
                format_population(*population),
                format_number(*population_difference),
            ),
        };
        Self {
            label,
            value,
            delta,
            headline,
        }
    }
}

/// Gains/losses column: largest gain and largest loss of the year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GainsLosses {
    pub largest_gain: MetricCard,
    pub largest_loss: MetricCard,
}

/// States migration column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationPanel {
    pub threshold: i64,
    pub summary: MigrationSummary,
    pub inbound: DonutGauge,
    pub outbound: DonutGauge,
}

/// One region of the choropleth map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoroplethEntry {
    pub state_code: String,
    pub population: u64,
}

/// Choropleth map data for the selected year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoroplethView {
    pub theme: ColorTheme,
    /// Color scale range, `(0, largest population of the year)`
    pub color_range: (u64, u64),
    pub entries: Vec<ChoroplethEntry>,
}

/// One cell of the year x state heatmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub state_name: String,
    pub year: i32,
    pub population: u64,
}

/// Heatmap over every year of the base table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapView {
    pub theme: ColorTheme,
    pub cells: Vec<HeatmapCell>,
}

/// A row of the top states table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopStateRow {
    pub rank: usize,
    pub state_name: String,
    pub state_code: String,
    pub population: u64,
}

/// Ranked table with inline progress bars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopStatesView {
    /// Progress bars run from 0 to this value
    pub progress_max: u64,
    pub rows: Vec<TopStateRow>,
}

/// Everything the dashboard shows for one year and theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    pub year: i32,
    pub theme: ColorTheme,
    pub gains_losses: GainsLosses,
    pub migration: MigrationPanel,
    pub choropleth: ChoroplethView,
    pub heatmap: HeatmapView,
    pub top_states: TopStatesView,
}

impl DashboardView {
    /// Derive the full view for `year` and `theme`.
    ///
    /// # Errors
    /// Returns `InvalidYear` when the base table has no record for `year`.
    /// No partial view is produced.
    pub fn build(
        table: &PopulationTable,
        year: i32,
        theme: ColorTheme,
        config: &DashboardConfig,
    ) -> Result<Self> {
        let slice = select_year(table, year)?;
        let outcome = calculate_migration(table, year)?;
        let summary = summarize_migration(&outcome, config.migration_threshold);
        let extremes = headlines(&outcome);

        debug!(
            "Building dashboard for {year} ({theme}): {} states, inbound {}%, outbound {}%",
            slice.len(),
            summary.pct_high_inbound,
            summary.pct_high_outbound
        );

        Ok(Self {
            year,
            gains_losses: GainsLosses {
                largest_gain: MetricCard::from_headline(extremes.largest_gain),
                largest_loss: MetricCard::from_headline(extremes.largest_loss),
            },
            migration: MigrationPanel {
                threshold: config.migration_threshold,
                summary,
                inbound: DonutGauge::new(
                    "Inbound Migration",
                    summary.pct_high_inbound,
                    DonutPalette::Green,
                ),
                outbound: DonutGauge::new(
                    "Outbound Migration",
                    summary.pct_high_outbound,
                    DonutPalette::Red,
                ),
            },
            choropleth: choropleth(&slice, theme.clone()),
            heatmap: heatmap(table, theme.clone()),
            top_states: top_states(&slice, config.top_states_limit),
            theme,
        })
    }

    /// Serialize the view as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn choropleth(slice: &YearSlice, theme: ColorTheme) -> ChoroplethView {
    ChoroplethView {
        theme,
        color_range: (0, slice.max_population()),
        entries: slice
            .records
            .iter()
            .map(|r| ChoroplethEntry {
                state_code: r.state_code.clone(),
                population: r.population,
            })
            .collect(),
    }
}

fn heatmap(table: &PopulationTable, theme: ColorTheme) -> HeatmapView {
    HeatmapView {
        theme,
        cells: table
            .records()
            .iter()
            .map(|r| HeatmapCell {
                state_name: r.state_name.clone(),
                year: r.year,
                population: r.population,
            })
            .collect(),
    }
}

fn top_states(slice: &YearSlice, limit: Option<usize>) -> TopStatesView {
    TopStatesView {
        progress_max: slice.max_population(),
        rows: slice
            .records
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .enumerate()
            .map(|(idx, r)| TopStateRow {
                rank: idx + 1,
                state_name: r.state_name.clone(),
                state_code: r.state_code.clone(),
                population: r.population,
            })
            .collect(),
    }
}
