//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use popdash::{StateRow, WideTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A small slice of the census table: five states over 2010-2019
pub const SAMPLE_CSV: &str = "\
States,StateCode,2010,2011,2012,2013,2014,2015,2016,2017,2018,2019
Alabama,AL,4785437,4799069,4815588,4830081,4841799,4852347,4863525,4874486,4887681,4903185
California,CA,37319550,37638369,37948800,38260787,38596972,38918045,39167117,39358497,39461588,39512223
New York,NY,19399878,19499241,19572932,19624447,19651049,19654666,19633428,19589572,19530351,19453561
Texas,TX,25241971,25645629,26084481,26480266,26964333,27470056,27914410,28295273,28628666,28995881
Wyoming,WY,564487,567299,576305,582122,582531,585613,584215,578931,577601,578759
";

/// Write `contents` into a file named `name` inside `dir`
pub fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create fixture");
    file.write_all(contents.as_bytes()).expect("write fixture");
    path
}

/// Write the sample table as CSV
pub fn sample_csv(dir: &tempfile::TempDir) -> PathBuf {
    write_file(dir, "us_population.csv", SAMPLE_CSV)
}

/// Random wide table with `states` rows over consecutive years from 2010
pub fn random_wide_table(seed: u64, states: usize, years: usize) -> WideTable {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..states)
        .map(|i| {
            let first = char::from(b'A' + (i / 26) as u8);
            let second = char::from(b'A' + (i % 26) as u8);
            let mut population: u64 = rng.random_range(100_000..40_000_000);
            let populations = (0..years)
                .map(|_| {
                    let change: i64 = rng.random_range(-120_000..120_000);
                    population = population.saturating_add_signed(change);
                    population
                })
                .collect();
            StateRow {
                state_name: format!("State {first}{second}"),
                state_code: format!("{first}{second}"),
                populations,
            }
        })
        .collect();

    let years = (0..years).map(|y| 2010 + y as i32).collect();
    WideTable::new(years, rows).expect("valid random table")
}
