//! Utilities for working with Arrow arrays.
//!
//! Typed extraction of the state and population columns of a wide table,
//! with integer widening and null/negative checks.

use arrow::array::{Array, ArrayRef, Int64Array, StringArray};
use arrow::compute::kernels::cast::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use log::debug;

use crate::error::{DashboardError, Result};

/// Whether a column type can hold state names or codes
#[must_use]
pub fn is_string_type(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View
    )
}

/// Read a string column as owned values.
///
/// # Arguments
///
/// * `batch` - The record batch containing the column
/// * `index` - Column position
/// * `what` - Human-readable name of the column, used in error messages
///
/// # Errors
///
/// `MalformedInput` if the column is not a string column or holds nulls.
pub fn string_values(batch: &RecordBatch, index: usize, what: &str) -> Result<Vec<String>> {
    let column = batch.column(index);
    if !is_string_type(column.data_type()) {
        return Err(DashboardError::malformed(format!(
            "{what} column must hold strings, found {}",
            column.data_type()
        )));
    }

    let utf8 = cast_column(column, &DataType::Utf8)?;
    let strings = downcast_array::<StringArray>(&utf8, what)?;

    (0..strings.len())
        .map(|row| {
            if strings.is_null(row) {
                Err(DashboardError::malformed(format!(
                    "{what} is missing in row {row}"
                )))
            } else {
                Ok(strings.value(row).trim().to_string())
            }
        })
        .collect()
}

/// Read an integer population column as non-negative counts.
///
/// Any integer column type is accepted and widened to `Int64` first.
///
/// # Errors
///
/// `MalformedInput` if the column is not an integer column, holds nulls, or
/// holds negative values.
pub fn population_values(batch: &RecordBatch, index: usize, year: i32) -> Result<Vec<u64>> {
    let column = batch.column(index);
    if !column.data_type().is_integer() {
        return Err(DashboardError::malformed(format!(
            "population column {year} must hold integers, found {}",
            column.data_type()
        )));
    }

    let widened = cast_column(column, &DataType::Int64)?;
    let values = downcast_array::<Int64Array>(&widened, "population")?;

    (0..values.len())
        .map(|row| {
            if values.is_null(row) {
                return Err(DashboardError::malformed(format!(
                    "population for {year} is missing in row {row}"
                )));
            }
            u64::try_from(values.value(row)).map_err(|_| {
                DashboardError::malformed(format!(
                    "population for {year} is negative in row {row}: {}",
                    values.value(row)
                ))
            })
        })
        .collect()
}

fn cast_column(column: &ArrayRef, target: &DataType) -> Result<ArrayRef> {
    if column.data_type() == target {
        return Ok(column.clone());
    }
    debug!("Casting column from {} to {target}", column.data_type());
    Ok(cast(column, target)?)
}

/// Downcast a column to a specific array type with clear error messages
///
/// # Type Parameters
///
/// * `T` - The target array type
pub fn downcast_array<'a, T: Array + 'static>(array: &'a ArrayRef, what: &str) -> Result<&'a T> {
    array.as_any().downcast_ref::<T>().ok_or_else(|| {
        DashboardError::malformed(format!(
            "{what} column could not be read as {}",
            std::any::type_name::<T>()
        ))
    })
}
