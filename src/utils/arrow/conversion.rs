//! Conversion between long-format records and Arrow record batches
//!
//! Built on `serde_arrow`: the Arrow schema is traced from the record type, so
//! the exported columns always match `PopulationRecord`'s fields.

use arrow::datatypes::FieldRef;
use arrow::record_batch::RecordBatch;
use serde_arrow::schema::{SchemaLike, TracingOptions};

use crate::error::Result;
use crate::models::PopulationRecord;

/// Arrow fields of the long table: `state_name`, `state_code`, `year`, `population`
pub fn long_table_fields() -> Result<Vec<FieldRef>> {
    Ok(Vec::<FieldRef>::from_type::<PopulationRecord>(
        TracingOptions::default(),
    )?)
}

/// Convert records into a single record batch
pub fn records_to_batch(records: &[PopulationRecord]) -> Result<RecordBatch> {
    let fields = long_table_fields()?;
    Ok(serde_arrow::to_record_batch(&fields, &records)?)
}

/// Convert a record batch with the long-table layout back into records
pub fn batch_to_records(batch: &RecordBatch) -> Result<Vec<PopulationRecord>> {
    Ok(serde_arrow::from_record_batch(batch)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::DataType;

    #[test]
    fn test_long_table_schema() {
        let fields = long_table_fields().expect("fields");
        let names: Vec<&str> = fields.iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, vec!["state_name", "state_code", "year", "population"]);
        assert_eq!(fields[2].data_type(), &DataType::Int32);
        assert_eq!(fields[3].data_type(), &DataType::UInt64);
    }

    #[test]
    fn test_batch_preserves_records() {
        let records = vec![
            PopulationRecord::new("Ohio", "OH", 2018, 11_676_341),
            PopulationRecord::new("Utah", "UT", 2018, 3_153_550),
        ];
        let batch = records_to_batch(&records).expect("to batch");
        assert_eq!(batch.num_rows(), 2);
        assert_eq!(batch.num_columns(), 4);
        assert_eq!(batch_to_records(&batch).expect("from batch"), records);
    }
}
