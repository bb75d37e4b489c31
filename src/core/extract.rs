//! Table extraction
//!
//! Applies a resolved delimiter, header/footer counts, and optional
//! comment character to raw text and materializes a rectangular grid of
//! trimmed string cells. The grid is validated, never repaired: a ragged
//! table is a hard error carrying the first mismatching row and a
//! re-detected delimiter suggestion, so the caller can render actionable
//! guidance rather than silently truncating.

use crate::core::delimiter::detect_delimiter;
use crate::core::numeric::parse_cell;
use crate::core::tokenizer::split_line;
use crate::data::{CommentChar, Delimiter};
use crate::utils::error::{TableError, TableResult};

/// A rectangular table of string cells plus the settings that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable {
    cells: Vec<Vec<String>>,
    delimiter: Delimiter,
    header_rows: usize,
    footer_rows: usize,
}

impl ParsedTable {
    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns (identical for every row)
    pub fn column_count(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// The delimiter the table was split with
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Leading lines that were dropped
    pub fn header_rows(&self) -> usize {
        self.header_rows
    }

    /// Trailing lines that were dropped
    pub fn footer_rows(&self) -> usize {
        self.footer_rows
    }

    /// All rows as trimmed string cells
    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    /// One column of string cells
    pub fn column(&self, index: usize) -> TableResult<Vec<&str>> {
        if index >= self.column_count() {
            return Err(TableError::invalid_column(index, self.column_count()));
        }
        Ok(self.cells.iter().map(|row| row[index].as_str()).collect())
    }

    /// Convert one column to floats, substituting zero for empty cells.
    pub fn numeric_column(&self, index: usize) -> TableResult<Vec<f64>> {
        if index >= self.column_count() {
            return Err(TableError::invalid_column(index, self.column_count()));
        }
        let mut values = Vec::with_capacity(self.row_count());
        for row in &self.cells {
            match parse_cell(&row[index]) {
                Some(v) => values.push(v),
                None => return Err(TableError::non_numeric_columns(vec![index])),
            }
        }
        Ok(values)
    }

    /// Convert two selected columns to numeric arrays.
    ///
    /// Both columns are checked before failing, so the error names every
    /// offending column rather than the first one hit.
    pub fn numeric_xy(&self, x: usize, y: usize) -> TableResult<(Vec<f64>, Vec<f64>)> {
        for index in [x, y] {
            if index >= self.column_count() {
                return Err(TableError::invalid_column(index, self.column_count()));
            }
        }
        let mut bad = Vec::new();
        let xs = match self.numeric_column(x) {
            Ok(v) => v,
            Err(_) => {
                bad.push(x);
                Vec::new()
            }
        };
        let ys = match self.numeric_column(y) {
            Ok(v) => v,
            Err(_) => {
                if !bad.contains(&y) {
                    bad.push(y);
                }
                Vec::new()
            }
        };
        if !bad.is_empty() {
            return Err(TableError::non_numeric_columns(bad));
        }
        Ok((xs, ys))
    }
}

/// Extract a rectangular grid from raw text.
///
/// Drops `header_rows` leading and `footer_rows` trailing lines, strips
/// comments, skips lines left blank, tokenizes the remainder, and trims
/// every cell. Fails with [`TableError::Shape`] on a ragged grid and
/// [`TableError::NotTabular`] when fewer than two rows or two columns
/// remain; both carry a freshly detected delimiter suggestion.
pub fn extract_table(
    text: &str,
    delimiter: Delimiter,
    header_rows: usize,
    footer_rows: usize,
    comment: Option<CommentChar>,
) -> TableResult<ParsedTable> {
    let lines: Vec<&str> = text.split('\n').collect();
    let count = lines.len();
    if header_rows + footer_rows >= count {
        return Err(TableError::NoData);
    }

    let pattern = delimiter.pattern();
    let mut cells: Vec<Vec<String>> = Vec::new();
    for &line in &lines[header_rows..count - footer_rows] {
        let content = match comment {
            Some(marker) => marker.strip(line),
            None => line,
        };
        if content.trim().is_empty() {
            continue;
        }
        let row: Vec<String> = split_line(content, pattern)
            .iter()
            .map(|field| field.trim().to_string())
            .collect();
        cells.push(row);
    }

    if cells.is_empty() {
        return Err(TableError::NoData);
    }

    let expected = cells[0].len();
    for (index, row) in cells.iter().enumerate() {
        if row.len() != expected {
            let suggestion = suggest_delimiter(&lines, delimiter);
            return Err(TableError::shape(index, expected, row.len(), suggestion));
        }
    }

    if cells.len() < 2 || expected < 2 {
        let suggestion = suggest_delimiter(&lines, delimiter);
        return Err(TableError::not_tabular(suggestion));
    }

    Ok(ParsedTable {
        cells,
        delimiter,
        header_rows,
        footer_rows,
    })
}

/// Re-run detection for an error suggestion, hiding the delimiter that
/// just failed.
fn suggest_delimiter(lines: &[&str], failed: Delimiter) -> Option<Delimiter> {
    detect_delimiter(lines).filter(|&found| found != failed)
}
