//! Migration summary: share of states beyond the migration threshold, and
//! the states with the largest gain and loss.

use itertools::Itertools;
use log::debug;

use crate::models::{Headline, Headlines, MigrationOutcome, MigrationSummary};
use crate::utils::math::percentage;

/// Percentage of states whose change is strictly beyond `threshold` in either
/// direction.
///
/// A change of exactly `threshold` (or `-threshold`) lands in neither bucket.
/// Percentages are relative to the number of distinct states of the year and
/// rounded half to even. The minimum-year sentinel always yields `{0, 0}`.
#[must_use]
pub fn summarize_migration(outcome: &MigrationOutcome, threshold: i64) -> MigrationSummary {
    let records = match outcome {
        MigrationOutcome::NoPriorYear { .. } => return MigrationSummary::default(),
        MigrationOutcome::Deltas { records, .. } => records,
    };

    let total_states = records.iter().map(|r| r.state_code.as_str()).unique().count();
    let inbound = records
        .iter()
        .filter(|r| r.population_difference > threshold)
        .count();
    let outbound = records
        .iter()
        .filter(|r| r.population_difference < threshold.saturating_neg())
        .count();

    debug!(
        "{}: {inbound} of {total_states} states above +{threshold}, {outbound} below -{threshold}",
        outcome.year()
    );

    MigrationSummary {
        pct_high_inbound: percentage(inbound, total_states),
        pct_high_outbound: percentage(outbound, total_states),
    }
}

/// First and last entries of the ranked deltas. `NoValue` for the sentinel.
#[must_use]
pub fn headlines(outcome: &MigrationOutcome) -> Headlines {
    match outcome {
        MigrationOutcome::NoPriorYear { .. } => Headlines::none(),
        MigrationOutcome::Deltas { records, .. } => Headlines {
            largest_gain: records.first().map_or(Headline::NoValue, Headline::from),
            largest_loss: records.last().map_or(Headline::NoValue, Headline::from),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MIGRATION_THRESHOLD;
    use crate::models::MigrationRecord;

    fn deltas(diffs: &[(&str, i64)]) -> MigrationOutcome {
        MigrationOutcome::Deltas {
            year: 2019,
            records: diffs
                .iter()
                .map(|&(code, diff)| MigrationRecord {
                    state_name: format!("State {code}"),
                    state_code: code.to_string(),
                    population: 1_000_000,
                    population_difference: diff,
                })
                .collect(),
        }
    }

    #[test]
    fn test_sentinel_summary_is_zero() {
        let outcome = MigrationOutcome::NoPriorYear { year: 2010 };
        assert_eq!(
            summarize_migration(&outcome, DEFAULT_MIGRATION_THRESHOLD),
            MigrationSummary {
                pct_high_inbound: 0,
                pct_high_outbound: 0
            }
        );
        assert_eq!(headlines(&outcome), Headlines::none());
    }

    #[test]
    fn test_toy_example_below_threshold() {
        let outcome = deltas(&[("CA", 50), ("TX", -20)]);
        assert_eq!(
            summarize_migration(&outcome, DEFAULT_MIGRATION_THRESHOLD),
            MigrationSummary::default()
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let outcome = deltas(&[
            ("AA", 50_001),
            ("BB", 50_000),
            ("CC", 0),
            ("DD", -50_000),
            ("EE", -50_001),
            ("FF", -90_000),
            ("GG", 10),
            ("HH", 20),
        ]);
        let summary = summarize_migration(&outcome, DEFAULT_MIGRATION_THRESHOLD);
        // 1/8 = 12.5% and 2/8 = 25%
        assert_eq!(summary.pct_high_inbound, 12);
        assert_eq!(summary.pct_high_outbound, 25);
    }

    #[test]
    fn test_percentages_are_bounded() {
        let outcome = deltas(&[("AA", 60_000), ("BB", 70_000), ("CC", 80_000)]);
        let summary = summarize_migration(&outcome, DEFAULT_MIGRATION_THRESHOLD);
        assert_eq!(summary.pct_high_inbound, 100);
        assert_eq!(summary.pct_high_outbound, 0);
    }

    #[test]
    fn test_custom_threshold() {
        let outcome = deltas(&[("CA", 50), ("TX", -20)]);
        let summary = summarize_migration(&outcome, 10);
        assert_eq!(summary.pct_high_inbound, 50);
        assert_eq!(summary.pct_high_outbound, 50);
    }

    #[test]
    fn test_headlines_take_first_and_last() {
        let outcome = deltas(&[("TX", 367_000), ("FL", 233_000), ("NY", -77_000)]);
        let headlines = headlines(&outcome);
        match (&headlines.largest_gain, &headlines.largest_loss) {
            (
                Headline::State {
                    state_code: gain, ..
                },
                Headline::State {
                    state_code: loss,
                    population_difference,
                    ..
                },
            ) => {
                assert_eq!(gain, "TX");
                assert_eq!(loss, "NY");
                assert_eq!(*population_difference, -77_000);
            }
            other => panic!("unexpected headlines: {other:?}"),
        }
    }
}
