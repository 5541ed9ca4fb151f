//! Validation of the wide input schema.
//!
//! The input table must be `[state name, state code, <year>, <year>, ...]`:
//! two string columns followed by one integer column per year, with column
//! headers that parse as distinct integer years.

use arrow::datatypes::{DataType, Schema};

use crate::error::{DashboardError, Result};
use crate::utils::arrow::is_string_type;

/// Column position of the state name
pub const STATE_NAME_COLUMN: usize = 0;
/// Column position of the state code
pub const STATE_CODE_COLUMN: usize = 1;

/// A single problem found in the input schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    /// Name of the offending column (empty for table-level issues)
    pub column: String,
    /// Description of the incompatibility
    pub description: String,
}

/// Where each year lives in a validated wide schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WideLayout {
    /// `(column index, year)` pairs in column order
    pub year_columns: Vec<(usize, i32)>,
}

impl WideLayout {
    /// Years in column order
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.year_columns.iter().map(|&(_, year)| year).collect()
    }
}

/// Parse a year column header.
///
/// Accepts plain integers (`"2010"`) and integral decimals as produced by some
/// spreadsheet exports (`"2010.0"`). Surrounding whitespace is ignored.
#[must_use]
pub fn parse_year_header(header: &str) -> Option<i32> {
    let header = header.trim();
    if let Ok(year) = header.parse::<i32>() {
        return Some(year);
    }
    let (whole, fraction) = header.split_once('.')?;
    if !fraction.is_empty() && fraction.chars().all(|c| c == '0') {
        whole.parse::<i32>().ok()
    } else {
        None
    }
}

/// Collect every issue of a wide schema without failing early
#[must_use]
pub fn find_schema_issues(schema: &Schema) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    let fields = schema.fields();

    if fields.len() < 3 {
        issues.push(SchemaIssue {
            column: String::new(),
            description: format!(
                "expected state name, state code and at least one year column, found {} columns",
                fields.len()
            ),
        });
        return issues;
    }

    for (idx, role) in [(STATE_NAME_COLUMN, "state name"), (STATE_CODE_COLUMN, "state code")] {
        let field = &fields[idx];
        if !is_string_type(field.data_type()) {
            issues.push(SchemaIssue {
                column: field.name().clone(),
                description: format!(
                    "{role} column must hold strings, found {}",
                    field.data_type()
                ),
            });
        }
    }

    let mut seen: Vec<i32> = Vec::new();
    for field in fields.iter().skip(2) {
        match parse_year_header(field.name()) {
            Some(year) if seen.contains(&year) => issues.push(SchemaIssue {
                column: field.name().clone(),
                description: format!("year {year} appears more than once"),
            }),
            Some(year) => seen.push(year),
            None => issues.push(SchemaIssue {
                column: field.name().clone(),
                description: "header is not a year".to_string(),
            }),
        }

        if !is_population_type(field.data_type()) {
            issues.push(SchemaIssue {
                column: field.name().clone(),
                description: format!(
                    "population column must hold integers, found {}",
                    field.data_type()
                ),
            });
        }
    }

    issues
}

/// Validate a wide schema and locate its year columns
///
/// # Errors
/// `MalformedInput` listing every issue found.
pub fn validate_wide_schema(schema: &Schema) -> Result<WideLayout> {
    let issues = find_schema_issues(schema);
    if !issues.is_empty() {
        let details = issues
            .iter()
            .map(|issue| {
                if issue.column.is_empty() {
                    issue.description.clone()
                } else {
                    format!("column '{}': {}", issue.column, issue.description)
                }
            })
            .collect::<Vec<_>>()
            .join("; ");
        return Err(DashboardError::malformed(details));
    }

    let year_columns = schema
        .fields()
        .iter()
        .enumerate()
        .skip(2)
        .filter_map(|(idx, field)| parse_year_header(field.name()).map(|year| (idx, year)))
        .collect();

    Ok(WideLayout { year_columns })
}

fn is_population_type(data_type: &DataType) -> bool {
    // An all-empty column infers as Null; the row checks reject it later if rows exist
    data_type.is_integer() || *data_type == DataType::Null
}
