//! Header and footer row detection
//!
//! Both detectors take the midpoint row as the reference - its field
//! count and per-field numeric classification - and walk outward from the
//! midpoint, upward for the header and downward for the footer. A
//! field-count mismatch marks the boundary. When the reference row is
//! entirely numeric, any row with a non-numeric field is also a boundary.
//! The header walk additionally tracks per-column type agreement so that
//! header rows which are table-shaped text (a names row, a units row) are
//! caught even though their field count matches the data.

use regex::Regex;

use crate::core::numeric::is_numeric;
use crate::core::tokenizer::split_line;
use crate::data::Delimiter;

/// Field count and numeric mask of one line
struct RowProfile {
    types: Vec<bool>,
}

impl RowProfile {
    fn of(line: &str, pattern: &Regex) -> Self {
        let types = split_line(line, pattern)
            .iter()
            .map(|field| is_numeric(field))
            .collect();
        RowProfile { types }
    }

    fn field_count(&self) -> usize {
        self.types.len()
    }

    fn all_numeric(&self) -> bool {
        self.types.iter().all(|&t| t)
    }
}

/// Per-column tally of numeric vs non-numeric observations.
///
/// Seeded with the reference row; the first five walked rows contribute.
/// A column has an established pattern once one type holds a strict
/// majority, and a row contradicting any established pattern is treated
/// as the data boundary.
struct ColumnTypeTracker {
    numeric: Vec<usize>,
    non_numeric: Vec<usize>,
    rows_observed: usize,
}

/// Rows contributing to the type tally (reference row included)
const TYPE_WINDOW: usize = 5;

impl ColumnTypeTracker {
    fn new(reference: &RowProfile) -> Self {
        let mut tracker = ColumnTypeTracker {
            numeric: vec![0; reference.field_count()],
            non_numeric: vec![0; reference.field_count()],
            rows_observed: 0,
        };
        tracker.observe(reference);
        tracker
    }

    fn observe(&mut self, profile: &RowProfile) {
        if self.rows_observed >= TYPE_WINDOW {
            return;
        }
        for (col, &numeric) in profile.types.iter().enumerate() {
            if numeric {
                self.numeric[col] += 1;
            } else {
                self.non_numeric[col] += 1;
            }
        }
        self.rows_observed += 1;
    }

    fn breaks_pattern(&self, profile: &RowProfile) -> bool {
        profile.types.iter().enumerate().any(|(col, &numeric)| {
            if self.numeric[col] > self.non_numeric[col] {
                !numeric
            } else if self.non_numeric[col] > self.numeric[col] {
                numeric
            } else {
                // Tied tally: no pattern established for this column.
                false
            }
        })
    }
}

/// Count the leading non-data lines.
pub fn detect_header_rows<S: AsRef<str>>(lines: &[S], delimiter: Delimiter) -> usize {
    if lines.is_empty() {
        return 0;
    }
    let pattern = delimiter.pattern();
    let mid = lines.len() / 2;
    let reference = RowProfile::of(lines[mid].as_ref(), pattern);
    let mut tracker = ColumnTypeTracker::new(&reference);

    for i in (0..mid).rev() {
        let profile = RowProfile::of(lines[i].as_ref(), pattern);
        if profile.field_count() != reference.field_count() {
            return i + 1;
        }
        if reference.all_numeric() && !profile.all_numeric() {
            return i + 1;
        }
        if tracker.breaks_pattern(&profile) {
            return i + 1;
        }
        tracker.observe(&profile);
    }
    0
}

/// Count the trailing non-data lines.
pub fn detect_footer_rows<S: AsRef<str>>(lines: &[S], delimiter: Delimiter) -> usize {
    if lines.is_empty() {
        return 0;
    }
    let pattern = delimiter.pattern();
    let count = lines.len();
    let mid = count / 2;
    let reference = RowProfile::of(lines[mid].as_ref(), pattern);

    for (i, line) in lines.iter().enumerate().skip(mid + 1) {
        let profile = RowProfile::of(line.as_ref(), pattern);
        if profile.field_count() != reference.field_count() {
            return count - i;
        }
        if reference.all_numeric() && !profile.all_numeric() {
            return count - i;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        text.split('\n').collect()
    }

    #[test]
    fn test_no_header_no_footer() {
        let doc = lines("1,2\n3,4\n5,6\n7,8\n9,10");
        assert_eq!(detect_header_rows(&doc, Delimiter::Comma), 0);
        assert_eq!(detect_footer_rows(&doc, Delimiter::Comma), 0);
    }

    #[test]
    fn test_free_text_header() {
        // Two header lines whose field count differs from the data
        let doc = lines("Results of run 4\nrecorded at 300 K\n1,10\n2,20\n3,30\n4,40\n5,50");
        assert_eq!(detect_header_rows(&doc, Delimiter::Comma), 2);
    }

    #[test]
    fn test_names_row_caught_by_type_pattern() {
        // The names row splits into the same field count as the data, but
        // breaks the numeric majority established below it.
        let doc = lines("x,y\n1,10\n2,20\n3,30\n4,40\n5,50");
        assert_eq!(detect_header_rows(&doc, Delimiter::Comma), 1);
    }

    #[test]
    fn test_units_row_under_names_row() {
        let doc = lines("time,height\ns,m\n1,10\n2,20\n3,30\n4,40\n5,50\n6,60");
        assert_eq!(detect_header_rows(&doc, Delimiter::Comma), 2);
    }

    #[test]
    fn test_footer_boundary() {
        let doc = lines("1,10\n2,20\n3,30\n4,40\n5,50\nEnd of data");
        assert_eq!(detect_footer_rows(&doc, Delimiter::Comma), 1);
    }

    #[test]
    fn test_footer_multiple_lines() {
        let doc = lines("1,10\n2,20\n3,30\n4,40\n5,50\n\nchecksum 0xfe");
        assert_eq!(detect_footer_rows(&doc, Delimiter::Comma), 2);
    }

    #[test]
    fn test_all_numeric_reference_rejects_text_row() {
        // Same field count, but the reference rows are fully numeric and
        // the first line is not.
        let doc = lines("a,b\n1,10\n2,20\n3,30\n4,40\n5,50");
        assert_eq!(detect_header_rows(&doc, Delimiter::Comma), 1);
    }

    #[test]
    fn test_mixed_type_column_tolerated() {
        // A genuinely non-numeric data column (labels) must not trigger
        // the boundary on its own.
        let doc = lines("run a,1\nrun b,2\nrun c,3\nrun d,4\nrun e,5");
        assert_eq!(detect_header_rows(&doc, Delimiter::Comma), 0);
        assert_eq!(detect_footer_rows(&doc, Delimiter::Comma), 0);
    }

    #[test]
    fn test_single_line_document() {
        let doc = lines("1,2");
        assert_eq!(detect_header_rows(&doc, Delimiter::Comma), 0);
        assert_eq!(detect_footer_rows(&doc, Delimiter::Comma), 0);
    }
}
