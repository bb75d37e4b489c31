//! Document lifecycle
//!
//! [`TabularDocument`] is the per-upload entity: raw contents plus the
//! three detection fields (delimiter, header rows, footer rows), the
//! comment-character setting, and a lazily computed grid. Detection
//! populates the fields once and is idempotent; manual overrides replace
//! a field and invalidate the cached grid, which is then recomputed from
//! the overridden values without re-running detection.

use crate::core::delimiter::detect_delimiter;
use crate::core::extract::{extract_table, ParsedTable};
use crate::core::rows::{detect_footer_rows, detect_header_rows};
use crate::data::{CommentChar, Delimiter};
use crate::utils::error::{TableError, TableResult};

/// The inferred (or overridden) document layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    pub delimiter: Option<Delimiter>,
    pub header_rows: Option<usize>,
    pub footer_rows: Option<usize>,
}

/// One uploaded document and its parsing state
#[derive(Debug, Clone)]
pub struct TabularDocument {
    contents: String,
    delimiter: Option<Delimiter>,
    header_rows: Option<usize>,
    footer_rows: Option<usize>,
    comment_character: CommentChar,
    table: Option<ParsedTable>,
}

impl TabularDocument {
    /// Create a document with all detection fields unset.
    pub fn new(contents: impl Into<String>) -> Self {
        TabularDocument {
            contents: contents.into(),
            delimiter: None,
            header_rows: None,
            footer_rows: None,
            comment_character: CommentChar::Python,
            table: None,
        }
    }

    /// The raw text
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// The document as raw lines
    pub fn lines(&self) -> Vec<&str> {
        self.contents.split('\n').collect()
    }

    pub fn delimiter(&self) -> Option<Delimiter> {
        self.delimiter
    }

    pub fn header_rows(&self) -> Option<usize> {
        self.header_rows
    }

    pub fn footer_rows(&self) -> Option<usize> {
        self.footer_rows
    }

    pub fn comment_character(&self) -> CommentChar {
        self.comment_character
    }

    /// Run delimiter detection without mutating the document.
    pub fn guess_delimiter(&self) -> Option<Delimiter> {
        detect_delimiter(&self.lines())
    }

    /// Run header detection for a given delimiter.
    pub fn guess_header_rows(&self, delimiter: Delimiter) -> usize {
        detect_header_rows(&self.lines(), delimiter)
    }

    /// Run footer detection for a given delimiter.
    pub fn guess_footer_rows(&self, delimiter: Delimiter) -> usize {
        detect_footer_rows(&self.lines(), delimiter)
    }

    /// Populate delimiter, header rows, and footer rows by detection.
    ///
    /// Returns the resulting layout. When no delimiter can be detected
    /// the row counts stay unset and the caller should prompt for a
    /// manual delimiter choice. Re-running on the same contents yields
    /// the same values.
    pub fn detect(&mut self) -> Layout {
        if let Some(delimiter) = self.guess_delimiter() {
            self.set_delimiter(delimiter);
            let header = self.guess_header_rows(delimiter);
            self.set_header_rows(header);
            let footer = self.guess_footer_rows(delimiter);
            self.set_footer_rows(footer);
        }
        self.layout()
    }

    /// The current layout values
    pub fn layout(&self) -> Layout {
        Layout {
            delimiter: self.delimiter,
            header_rows: self.header_rows,
            footer_rows: self.footer_rows,
        }
    }

    /// Override the delimiter (invalidates the cached grid).
    pub fn set_delimiter(&mut self, delimiter: Delimiter) {
        self.delimiter = Some(delimiter);
        self.table = None;
    }

    /// Override the header row count (invalidates the cached grid).
    pub fn set_header_rows(&mut self, rows: usize) {
        self.header_rows = Some(rows);
        self.table = None;
    }

    /// Override the footer row count (invalidates the cached grid).
    pub fn set_footer_rows(&mut self, rows: usize) {
        self.footer_rows = Some(rows);
        self.table = None;
    }

    /// Override the comment character (invalidates the cached grid).
    pub fn set_comment_character(&mut self, comment: CommentChar) {
        self.comment_character = comment;
        self.table = None;
    }

    /// Extract (or return the cached) table for the current settings.
    ///
    /// Unset header/footer counts are treated as zero; an unset delimiter
    /// is an error.
    pub fn table(&mut self) -> TableResult<&ParsedTable> {
        let delimiter = self.delimiter.ok_or(TableError::DelimiterNotFound)?;
        if self.table.is_none() {
            let parsed = extract_table(
                &self.contents,
                delimiter,
                self.header_rows.unwrap_or(0),
                self.footer_rows.unwrap_or(0),
                Some(self.comment_character),
            )?;
            self.table = Some(parsed);
        }
        // The cache was just populated on the miss path.
        Ok(self.table.as_ref().unwrap())
    }

    /// Extract two numeric columns for the current settings.
    pub fn numeric_xy(&mut self, x: usize, y: usize) -> TableResult<(Vec<f64>, Vec<f64>)> {
        self.table()?.numeric_xy(x, y)
    }
}
