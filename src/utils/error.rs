//! Error handling for Tabscan
//!
//! This module provides a unified error type and result type for all
//! detection and extraction operations. Every failure is recoverable at
//! the caller: the variants carry enough detail (expected field count,
//! offending row, suggested alternate delimiter) to prompt the user for
//! the missing setting instead of aborting.

use std::fmt;

use crate::data::Delimiter;

/// Detection/extraction error type
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// No candidate delimiter produced a consistent field count
    DelimiterNotFound,
    /// The extracted grid is not rectangular
    Shape {
        /// Index of the first mismatching data row (0-based, after
        /// header/footer/comment removal)
        row_index: usize,
        /// Field count of the first row
        expected: usize,
        /// Field count of the mismatching row
        found: usize,
        /// Best-guess corrected delimiter, if detection found one
        suggestion: Option<Delimiter>,
    },
    /// The result is not a 2-D table (fewer than two rows or two columns)
    NotTabular {
        /// Best-guess corrected delimiter, if detection found one
        suggestion: Option<Delimiter>,
    },
    /// A selected column contains a cell that is not numeric
    NonNumericColumn {
        /// The offending column indices
        columns: Vec<usize>,
    },
    /// A selected column index is out of range
    InvalidColumnIndex { index: usize, column_count: usize },
    /// The input contained nothing to parse
    NoData,
    /// A value-list token that is not a number
    NonNumericValue { value: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::DelimiterNotFound => {
                write!(
                    f,
                    "no delimiter produced a consistent field count; select one manually"
                )
            }
            TableError::Shape {
                row_index,
                expected,
                found,
                suggestion,
            } => {
                write!(
                    f,
                    "table is not rectangular: row {} has {} fields, expected {}",
                    row_index, found, expected
                )?;
                if let Some(delim) = suggestion {
                    write!(f, " (the delimiter should probably be {})", delim)?;
                }
                Ok(())
            }
            TableError::NotTabular { suggestion } => {
                write!(f, "the input did not produce a 2-D table of data")?;
                if let Some(delim) = suggestion {
                    write!(f, " (the delimiter should probably be {})", delim)?;
                }
                Ok(())
            }
            TableError::NonNumericColumn { columns } => {
                let names: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
                write!(
                    f,
                    "column{} {} contain{} non-numeric values",
                    if columns.len() == 1 { "" } else { "s" },
                    names.join(", "),
                    if columns.len() == 1 { "s" } else { "" }
                )
            }
            TableError::InvalidColumnIndex {
                index,
                column_count,
            } => {
                write!(
                    f,
                    "column index {} is out of range for a table with {} columns",
                    index, column_count
                )
            }
            TableError::NoData => write!(f, "no data found"),
            TableError::NonNumericValue { value } => {
                write!(f, "data must be numeric, but got '{}'", value)
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Result type for detection and extraction operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors
impl TableError {
    pub fn shape(
        row_index: usize,
        expected: usize,
        found: usize,
        suggestion: Option<Delimiter>,
    ) -> Self {
        TableError::Shape {
            row_index,
            expected,
            found,
            suggestion,
        }
    }

    pub fn not_tabular(suggestion: Option<Delimiter>) -> Self {
        TableError::NotTabular { suggestion }
    }

    pub fn non_numeric_columns(columns: Vec<usize>) -> Self {
        TableError::NonNumericColumn { columns }
    }

    pub fn invalid_column(index: usize, column_count: usize) -> Self {
        TableError::InvalidColumnIndex {
            index,
            column_count,
        }
    }

    pub fn non_numeric_value(value: impl Into<String>) -> Self {
        TableError::NonNumericValue {
            value: value.into(),
        }
    }
}
