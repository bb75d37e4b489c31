//! # tabscan
//!
//! Schema detection and extraction engine for messy delimited text.
//!
//! ## Features
//!
//! - **Delimiter Detection**: Tries comma, tab, whitespace-run, semicolon,
//!   and pipe against a midpoint-ordered sample and picks the first
//!   consistent candidate
//! - **Header/Footer Detection**: Finds where tabular data stops and
//!   surrounding text begins, using field-count and numeric-type
//!   consistency
//! - **Quote-Aware Tokenizer**: Honors `"`, `'`, `"""`, `'''` and
//!   backslash escapes, with regex delimiters
//! - **Strict Extraction**: A rectangular grid of trimmed cells or a
//!   descriptive error - ragged tables are never silently repaired
//! - **Numeric Columns**: Sentinel-aware float conversion
//!   (`inf`, `-inf`, `nan`, empty-as-zero)
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Detect and extract
//!
//! ```rust
//! use tabscan::{detect_layout, extract_table, Delimiter};
//!
//! let text = "Trial,Value\n1,10.2\n2,10.5\n3,9.8";
//! let layout = detect_layout(text);
//! assert_eq!(layout.delimiter, Some(Delimiter::Comma));
//!
//! let table = extract_table(text, Delimiter::Comma, 1, 0, None).unwrap();
//! let (x, y) = table.numeric_xy(0, 1).unwrap();
//! assert_eq!(x, vec![1.0, 2.0, 3.0]);
//! assert_eq!(y, vec![10.2, 10.5, 9.8]);
//! ```
//!
//! ### Document lifecycle
//!
//! ```rust
//! use tabscan::TabularDocument;
//!
//! let mut doc = TabularDocument::new("a;b\n1;2\n3;4\n5;6");
//! doc.detect();
//! let table = doc.table().unwrap();
//! assert_eq!(table.column_count(), 2);
//! ```

/// Core engine modules
pub mod core;

/// Data layer - candidate sets
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

use lazy_static::lazy_static;
use regex::Regex;

// Re-export core engine
pub use core::document::{Layout, TabularDocument};
pub use core::extract::{extract_table, ParsedTable};
pub use core::{
    detect_delimiter, detect_footer_rows, detect_header_rows, is_numeric, parse_cell, split_line,
};

// Re-export data modules
pub use data::comments::{CommentChar, ALL_COMMENT_CHARS};
pub use data::delimiters::{Delimiter, ALL_DELIMITERS};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::diagnostics::{check_document, format_diagnostics, CheckResult};
pub use utils::error::{TableError, TableResult};

lazy_static! {
    /// Separators accepted in pasted value lists
    static ref VALUE_SEPARATORS: Regex = Regex::new(r"[,\s]+").unwrap();
}

/// Detect the full layout of a document: delimiter, header rows, footer
/// rows.
///
/// When no delimiter can be found the row counts stay unset and the
/// caller should fall back to manual selection.
pub fn detect_layout(text: &str) -> Layout {
    let lines: Vec<&str> = text.split('\n').collect();
    match detect_delimiter(&lines) {
        Some(delimiter) => Layout {
            delimiter: Some(delimiter),
            header_rows: Some(detect_header_rows(&lines, delimiter)),
            footer_rows: Some(detect_footer_rows(&lines, delimiter)),
        },
        None => Layout::default(),
    }
}

/// Detect, extract, and convert two columns in one call.
pub fn extract_xy(text: &str, x: usize, y: usize) -> TableResult<(Vec<f64>, Vec<f64>)> {
    let layout = detect_layout(text);
    let delimiter = layout.delimiter.ok_or(TableError::DelimiterNotFound)?;
    let table = extract_table(
        text,
        delimiter,
        layout.header_rows.unwrap_or(0),
        layout.footer_rows.unwrap_or(0),
        None,
    )?;
    table.numeric_xy(x, y)
}

/// Parse a pasted list of numbers.
///
/// The values may be separated by commas, spaces, tabs, newlines, or any
/// mix of them. Fails with [`TableError::NoData`] when nothing separable
/// is found and with [`TableError::NonNumericValue`] on the first token
/// that does not parse.
pub fn parse_value_list(text: &str) -> TableResult<Vec<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TableError::NoData);
    }
    let tokens: Vec<&str> = VALUE_SEPARATORS.split(trimmed).collect();
    if tokens.len() == 1 && tokens[0].parse::<f64>().is_err() {
        return Err(TableError::NoData);
    }
    let mut values = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token.parse::<f64>() {
            Ok(v) => values.push(v),
            Err(_) => return Err(TableError::non_numeric_value(token)),
        }
    }
    Ok(values)
}
