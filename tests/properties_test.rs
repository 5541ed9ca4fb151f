//! Invariants checked over randomly generated tables

mod utils;

use popdash::{
    MigrationOutcome, MigrationSummary, PopulationTable, available_years, calculate_migration,
    format_number, pivot, select_year, summarize_migration, unpivot,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use utils::random_wide_table;

const SEEDS: [u64; 4] = [1, 7, 42, 2024];

#[test]
fn test_unpivot_then_pivot_restores_wide_table() {
    for seed in SEEDS {
        let wide = random_wide_table(seed, 12, 6);
        let records = unpivot(&wide);
        assert_eq!(records.len(), 12 * 6);
        assert_eq!(pivot(&records).expect("pivot"), wide);
    }
}

#[test]
fn test_year_slices_partition_the_table() {
    for seed in SEEDS {
        let table = PopulationTable::from_wide(&random_wide_table(seed, 9, 5)).expect("table");

        let mut total = 0;
        for year in available_years(&table) {
            let slice = select_year(&table, year).expect("listed year");
            assert!(slice.records.iter().all(|r| r.year == year));
            assert!(
                slice
                    .records
                    .windows(2)
                    .all(|pair| pair[0].population >= pair[1].population)
            );
            total += slice.len();
        }
        assert_eq!(total, table.len());
    }
}

#[test]
fn test_deltas_sum_to_total_change() {
    for seed in SEEDS {
        let table = PopulationTable::from_wide(&random_wide_table(seed, 15, 4)).expect("table");

        for year in 2011..2014 {
            let outcome = calculate_migration(&table, year).expect("year present");
            let delta_sum: i64 = outcome
                .records()
                .iter()
                .map(|r| r.population_difference)
                .sum();
            let current: u64 = select_year(&table, year)
                .expect("year present")
                .records
                .iter()
                .map(|r| r.population)
                .sum();
            let prior: u64 = select_year(&table, year - 1)
                .expect("prior present")
                .records
                .iter()
                .map(|r| r.population)
                .sum();

            assert_eq!(delta_sum, current as i64 - prior as i64);
            assert!(
                outcome
                    .records()
                    .windows(2)
                    .all(|pair| pair[0].population_difference >= pair[1].population_difference)
            );
        }
    }
}

#[test]
fn test_summary_percentages_are_bounded() {
    let mut rng = StdRng::seed_from_u64(99);
    for seed in SEEDS {
        let table = PopulationTable::from_wide(&random_wide_table(seed, 20, 3)).expect("table");
        let outcome = calculate_migration(&table, 2012).expect("year present");

        for _ in 0..10 {
            let threshold: i64 = rng.random_range(0..150_000);
            let summary = summarize_migration(&outcome, threshold);
            assert!(summary.pct_high_inbound <= 100);
            assert!(summary.pct_high_outbound <= 100);
        }
    }
}

#[test]
fn test_earliest_year_is_always_the_sentinel() {
    for seed in SEEDS {
        let table = PopulationTable::from_wide(&random_wide_table(seed, 5, 3)).expect("table");
        let outcome = calculate_migration(&table, 2010).expect("year present");
        assert!(outcome.is_sentinel());
        assert!(matches!(outcome, MigrationOutcome::NoPriorYear { year: 2010 }));
        assert_eq!(summarize_migration(&outcome, 0), MigrationSummary::default());
    }
}

#[test]
fn test_format_number_suffixes() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let value: i64 = rng.random_range(-50_000_000..50_000_000);
        let formatted = format_number(value);
        if value >= 1_000_000 {
            assert!(formatted.ends_with(" M"), "{value} -> {formatted}");
        } else {
            assert_eq!(formatted, format!("{} K", value.div_euclid(1000)));
        }
    }
}
