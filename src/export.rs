//! Export of the long-format base table to CSV or Parquet.

use std::path::Path;
use std::time::Instant;

use arrow::csv::WriterBuilder;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::error::Result;
use crate::error::util::safe_create_file;
use crate::loader::TableFormat;
use crate::models::PopulationTable;
use crate::utils::arrow::records_to_batch;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Write every record of the base table to `path`, one row per (state, year).
///
/// The format follows the file extension (`.csv`, `.parquet`).
pub fn export_long_table(table: &PopulationTable, path: &Path) -> Result<usize> {
    let format = TableFormat::from_path(path)?;
    log_operation_start("Exporting long table to", path);
    let start = Instant::now();

    let batch = records_to_batch(table.records())?;
    let file = safe_create_file(path, "exporting long table")?;

    match format {
        TableFormat::Csv => {
            let mut writer = WriterBuilder::new().with_header(true).build(file);
            writer.write(&batch)?;
        }
        TableFormat::Parquet => {
            let props = WriterProperties::builder()
                .set_compression(Compression::SNAPPY)
                .build();
            let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
            writer.write(&batch)?;
            writer.close()?;
        }
    }

    log_operation_complete("exported", path, batch.num_rows(), Some(start.elapsed()));
    Ok(batch.num_rows())
}
