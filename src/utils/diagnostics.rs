//! Document diagnostics
//!
//! This module provides analysis and reporting for delimited documents
//! before the caller commits to an extraction. It can identify:
//!
//! - Empty or undetectable documents
//! - Extraction failures under the detected layout (ragged or degenerate
//!   grids), with the offending line where known
//! - The inferred layout (delimiter, header rows, footer rows)
//! - Which columns are numeric, and whether two usable columns exist
//!
//! ## Example
//!
//! ```rust
//! use tabscan::diagnostics::check_document;
//!
//! let result = check_document("a,b\n1,2\n3,4\n5,6");
//! assert!(!result.has_errors());
//! ```

use std::fmt;

use crate::core::delimiter::detect_delimiter;
use crate::core::extract::{extract_table, ParsedTable};
use crate::core::numeric::is_numeric;
use crate::core::rows::{detect_footer_rows, detect_header_rows};
use crate::core::tokenizer::split_line;
use crate::data::{Delimiter, ALL_DELIMITERS};
use crate::utils::error::TableError;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - extraction might not do what the user expects
    Warning,
    /// Error - extraction will fail with the current settings
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Line number (1-indexed)
    pub line: Option<usize>,
    /// Relevant source text
    pub source_text: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: None,
            source_text: None,
            suggestion: None,
        }
    }

    /// Add a line number
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add source text
    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;

        if let Some(line) = self.line {
            write!(f, "\n  --> line {}", line)?;
        }

        if let Some(ref source) = self.source_text {
            write!(f, "\n  |\n  | {}", source)?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Check result with summary
#[derive(Debug, Default)]
pub struct CheckResult {
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of info messages
    pub infos: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Check if there are any issues at all
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(format!(
                "{} error{}",
                self.errors,
                if self.errors == 1 { "" } else { "s" }
            ));
        }
        if self.warnings > 0 {
            parts.push(format!(
                "{} warning{}",
                self.warnings,
                if self.warnings == 1 { "" } else { "s" }
            ));
        }
        if self.infos > 0 {
            parts.push(format!(
                "{} note{}",
                self.infos,
                if self.infos == 1 { "" } else { "s" }
            ));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Analyze a document and report everything the engine can tell about it.
pub fn check_document(input: &str) -> CheckResult {
    let mut result = CheckResult::new();

    if input.trim().is_empty() {
        result.add(Diagnostic::new(DiagnosticLevel::Error, "document is empty"));
        return result;
    }

    let lines: Vec<&str> = input.split('\n').collect();

    let delimiter = match detect_delimiter(&lines) {
        Some(found) => {
            result.add(Diagnostic::new(
                DiagnosticLevel::Info,
                format!("detected delimiter: {}", found),
            ));
            found
        }
        None => {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Error,
                    "no delimiter produced a consistent field count",
                )
                .with_suggestion("select a delimiter manually"),
            );
            return result;
        }
    };

    report_other_candidates(&lines, delimiter, &mut result);

    let header = detect_header_rows(&lines, delimiter);
    let footer = detect_footer_rows(&lines, delimiter);
    result.add(Diagnostic::new(
        DiagnosticLevel::Info,
        format!("layout: {} header row(s), {} footer row(s)", header, footer),
    ));

    // Dry-run the extraction the caller would perform.
    match extract_table(input, delimiter, header, footer, None) {
        Ok(table) => report_numeric_columns(&table, &mut result),
        Err(err) => report_extraction_error(&lines, err, header, &mut result),
    }

    result
}

/// Note lower-priority candidates that would also have been consistent.
fn report_other_candidates(lines: &[&str], chosen: Delimiter, result: &mut CheckResult) {
    for candidate in ALL_DELIMITERS {
        if candidate != chosen && candidate_consistent(lines, candidate) {
            result.add(Diagnostic::new(
                DiagnosticLevel::Info,
                format!(
                    "{} would also split this document consistently; {} wins by priority",
                    candidate, chosen
                ),
            ));
        }
    }
}

/// Does this candidate split every non-blank line into the same number of
/// fields, with at least two?
fn candidate_consistent(lines: &[&str], candidate: Delimiter) -> bool {
    let pattern = candidate.pattern();
    let mut counts = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| split_line(line, pattern).len());
    match counts.next() {
        Some(first) => first > 1 && counts.all(|n| n == first),
        None => false,
    }
}

fn report_extraction_error(
    lines: &[&str],
    err: TableError,
    header: usize,
    result: &mut CheckResult,
) {
    let mut diag = Diagnostic::new(DiagnosticLevel::Error, err.to_string());
    if let TableError::Shape { row_index, .. } = err {
        // Approximate line number: data row offset past the header.
        let line = header + row_index + 1;
        diag = diag.with_line(line);
        if let Some(text) = lines.get(line - 1) {
            diag = diag.with_source(text.to_string());
        }
    }
    result.add(diag.with_suggestion("adjust the delimiter or header/footer row counts"));
}

/// Report which columns parse as numeric over the extracted grid.
fn report_numeric_columns(table: &ParsedTable, result: &mut CheckResult) {
    let columns = table.column_count();
    let numeric: Vec<usize> = (0..columns)
        .filter(|&col| {
            table
                .rows()
                .iter()
                .all(|row| is_numeric(&row[col]))
        })
        .collect();

    if numeric.len() < 2 {
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Warning,
                format!(
                    "only {} of {} column(s) parse as numeric; two are needed for x/y extraction",
                    numeric.len(),
                    columns
                ),
            )
            .with_suggestion("check the header/footer row counts or the delimiter"),
        );
    } else {
        let names: Vec<String> = numeric.iter().map(|c| c.to_string()).collect();
        result.add(Diagnostic::new(
            DiagnosticLevel::Info,
            format!("numeric columns: {}", names.join(", ")),
        ));
    }
}

/// Format check results for terminal output
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    // Summary
    if use_color {
        if result.has_errors() {
            output.push_str("\x1b[31m");
        } else if result.warnings > 0 {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", result.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_document() {
        let result = check_document("1,10\n2,20\n3,30\n4,40");
        assert!(!result.has_errors());
        assert!(result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("comma")));
    }

    #[test]
    fn test_empty_document() {
        let result = check_document("  \n ");
        assert!(result.has_errors());
    }

    #[test]
    fn test_undetectable_delimiter() {
        let result = check_document("one\ntwo\nthree");
        assert!(result.has_errors());
        assert!(result
            .diagnostics
            .iter()
            .any(|d| d.suggestion.as_deref() == Some("select a delimiter manually")));
    }

    #[test]
    fn test_degenerate_grid_reported() {
        // Detection accepts comma from the single data row, but one data
        // row is not a 2-D table.
        let result = check_document("title\n1,2\nend");
        assert!(result.has_errors());
        assert!(result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("2-D table")));
    }

    #[test]
    fn test_layout_reported() {
        let result = check_document("x,y\n1,10\n2,20\n3,30\n4,40\n5,50");
        assert!(result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("1 header row(s)")));
    }

    #[test]
    fn test_numeric_column_census() {
        let result = check_document("a,1,10\nb,2,20\nc,3,30\nd,4,40");
        assert!(result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("numeric columns: 1, 2")));
    }

    #[test]
    fn test_too_few_numeric_columns_warns() {
        let result = check_document("a,1\nb,2\nc,3\nd,4");
        assert!(result.warnings >= 1);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_priority_note_for_second_consistent_candidate() {
        let result = check_document("1,x;10\n2,y;20\n3,z;30\n4,w;40");
        assert!(result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("wins by priority")));
    }

    #[test]
    fn test_summary_format() {
        let mut result = CheckResult::new();
        result.add(Diagnostic::new(DiagnosticLevel::Error, "test"));
        result.add(Diagnostic::new(DiagnosticLevel::Warning, "test"));

        let summary = result.summary();
        assert!(summary.contains("1 error"));
        assert!(summary.contains("1 warning"));
    }
}
