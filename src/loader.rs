//! Population table loading
//!
//! Reads the wide table from CSV or Parquet into Arrow record batches,
//! validates it and builds the immutable base table.

use std::collections::HashSet;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::SchemaRef;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::config::LoaderConfig;
use crate::error::util::{extension_of, safe_open_file};
use crate::error::{DashboardError, Result};
use crate::models::{PopulationTable, StateRow, WideTable};
use crate::schema::{STATE_CODE_COLUMN, STATE_NAME_COLUMN, validate_wide_schema};
use crate::utils::arrow::{population_values, string_values};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_row_warning};

/// On-disk table formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Apache Parquet
    Parquet,
}

impl TableFormat {
    /// Pick the format from a file extension
    ///
    /// # Errors
    /// `MalformedInput` for anything other than `.csv`, `.parquet` or `.pq`.
    pub fn from_path(path: &Path) -> Result<Self> {
        match extension_of(path).as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("parquet" | "pq") => Ok(Self::Parquet),
            other => Err(DashboardError::malformed(format!(
                "unsupported table format {:?} for {}, expected .csv or .parquet",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }
}

/// Load the wide table and build the base table from it
pub fn load_population_table(path: &Path, config: &LoaderConfig) -> Result<PopulationTable> {
    let wide = load_wide_table(path, config)?;
    let table = PopulationTable::from_wide(&wide)?;
    log::info!(
        "Base table holds {} states x {} years",
        wide.rows().len(),
        wide.years().len()
    );
    Ok(table)
}

/// Load and validate the wide table from a CSV or Parquet file
pub fn load_wide_table(path: &Path, config: &LoaderConfig) -> Result<WideTable> {
    let format = TableFormat::from_path(path)?;
    log_operation_start("Loading population table from", path);
    let start = Instant::now();

    let (schema, batches) = match format {
        TableFormat::Csv => read_csv_batches(path, config)?,
        TableFormat::Parquet => read_parquet_batches(path, config)?,
    };

    let wide = wide_table_from_batches(&schema, &batches, config)?;
    log_operation_complete("loaded", path, wide.rows().len(), Some(start.elapsed()));
    Ok(wide)
}

/// Read a CSV file with a header row, inferring column types
pub fn read_csv_batches(
    path: &Path,
    config: &LoaderConfig,
) -> Result<(SchemaRef, Vec<RecordBatch>)> {
    let mut file = safe_open_file(path, "loading population table")?;

    let format = Format::default().with_header(true);
    let (schema, _) = format.infer_schema(&mut file, config.max_infer_records)?;
    file.rewind().map_err(|e| DashboardError::io(path, e))?;

    let schema = Arc::new(schema);
    let reader = ReaderBuilder::new(schema.clone())
        .with_format(format)
        .with_batch_size(config.batch_size)
        .build(file)?;

    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;
    Ok((schema, batches))
}

/// Read all record batches of a Parquet file
pub fn read_parquet_batches(
    path: &Path,
    config: &LoaderConfig,
) -> Result<(SchemaRef, Vec<RecordBatch>)> {
    let file = safe_open_file(path, "loading population table")?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();
    let reader = builder.with_batch_size(config.batch_size).build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;
    Ok((schema, batches))
}

/// Build a wide table from record batches sharing `schema`
///
/// # Errors
/// `MalformedInput` for an empty table, a schema that is not
/// `[state name, state code, <year>...]`, missing or negative populations,
/// and empty, invalid or duplicate state codes.
pub fn wide_table_from_batches(
    schema: &SchemaRef,
    batches: &[RecordBatch],
    config: &LoaderConfig,
) -> Result<WideTable> {
    let row_count: usize = batches.iter().map(RecordBatch::num_rows).sum();
    if row_count == 0 {
        return Err(DashboardError::malformed("table has no state rows"));
    }

    let layout = validate_wide_schema(schema)?;
    let mut rows = Vec::with_capacity(row_count);
    let mut seen_codes: HashSet<String> = HashSet::with_capacity(row_count);

    for batch in batches.iter().filter(|b| b.num_rows() > 0) {
        let names = string_values(batch, STATE_NAME_COLUMN, "state name")?;
        let codes = string_values(batch, STATE_CODE_COLUMN, "state code")?;
        let columns = layout
            .year_columns
            .iter()
            .map(|&(idx, year)| population_values(batch, idx, year))
            .collect::<Result<Vec<_>>>()?;

        for (row, (state_name, raw_code)) in names.into_iter().zip(codes).enumerate() {
            let state_code = normalize_state_code(&raw_code, config)?;
            if state_name.is_empty() {
                log_row_warning(&state_code, "empty state name");
            }
            if !seen_codes.insert(state_code.clone()) {
                return Err(DashboardError::malformed(format!(
                    "state code {state_code} appears more than once"
                )));
            }

            rows.push(StateRow {
                state_name,
                state_code,
                populations: columns.iter().map(|values| values[row]).collect(),
            });
        }
    }

    WideTable::new(layout.years(), rows)
}

fn normalize_state_code(raw: &str, config: &LoaderConfig) -> Result<String> {
    if raw.is_empty() {
        return Err(DashboardError::malformed("state code is empty"));
    }
    if config.validate_state_codes
        && (raw.len() != 2 || !raw.chars().all(|c| c.is_ascii_alphabetic()))
    {
        return Err(DashboardError::malformed(format!(
            "state code '{raw}' is not two letters"
        )));
    }
    Ok(raw.to_ascii_uppercase())
}
