//! Arrow data handling utilities
//!
//! Typed column extraction for the loader and record batch conversion for
//! the long table.

pub mod array_utils;
pub mod conversion;

pub use array_utils::{downcast_array, is_string_type, population_values, string_values};
pub use conversion::{batch_to_records, long_table_fields, records_to_batch};
