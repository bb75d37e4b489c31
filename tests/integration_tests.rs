//! Integration tests for Tabscan detection and extraction

use tabscan::{
    check_document, detect_delimiter, detect_footer_rows, detect_header_rows, detect_layout,
    extract_table, extract_xy, parse_value_list, split_line, CommentChar, Delimiter,
    TableError, TabularDocument,
};

// ============================================================================
// Tokenizer - quoting and escapes through the public API
// ============================================================================

mod tokenizer {
    use super::*;

    #[test]
    fn test_round_trip_without_delimiter() {
        let lines = ["plain text", "1.5", "a b c"];
        for line in lines {
            assert_eq!(
                split_line(line, Delimiter::Comma.pattern()),
                vec![line.to_string()],
                "'{}' must come back as a single field",
                line
            );
        }
    }

    #[test]
    fn test_quoting_invariance() {
        assert_eq!(
            split_line("a,\"b,c\",d", Delimiter::Comma.pattern()),
            vec!["a", "b,c", "d"]
        );
    }

    #[test]
    fn test_escaped_delimiter_is_preserved_literally() {
        assert_eq!(
            split_line("a\\,b,c", Delimiter::Comma.pattern()),
            vec!["a\\,b", "c"]
        );
    }

    #[test]
    fn test_regex_delimiter_whitespace_runs() {
        assert_eq!(
            split_line("1.0   2.5\t\t3.0", Delimiter::Whitespace.pattern()),
            vec!["1.0", "2.5", "3.0"]
        );
    }

    #[test]
    fn test_triple_quoted_field() {
        assert_eq!(
            split_line("\"\"\"a,b\"\"\",c", Delimiter::Comma.pattern()),
            vec!["a,b", "c"]
        );
    }
}

// ============================================================================
// Delimiter detection
// ============================================================================

mod detection {
    use super::*;

    fn comma_doc(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{},{}", i, i * i)).collect()
    }

    #[test]
    fn test_consistent_comma_detected() {
        assert_eq!(detect_delimiter(&comma_doc(25)), Some(Delimiter::Comma));
    }

    #[test]
    fn test_determinism_under_row_permutation() {
        // Field counts are identical on every line, so any permutation of
        // the data rows must give the same answer.
        let mut lines = comma_doc(25);
        for _ in 0..5 {
            lines.rotate_left(7);
            assert_eq!(detect_delimiter(&lines), Some(Delimiter::Comma));
        }
    }

    #[test]
    fn test_priority_tie_break() {
        // Both comma and semicolon split every line consistently; comma is
        // first in the fixed priority order.
        let lines: Vec<String> = (0..15).map(|i| format!("{};a,{};b", i, i)).collect();
        assert_eq!(detect_delimiter(&lines), Some(Delimiter::Comma));
    }

    #[test]
    fn test_pipe_detected_when_alone() {
        let lines: Vec<String> = (0..15).map(|i| format!("{}|{}", i, i + 1)).collect();
        assert_eq!(detect_delimiter(&lines), Some(Delimiter::Pipe));
    }

    #[test]
    fn test_no_candidate_returns_none() {
        let lines: Vec<String> = (0..10).map(|i| format!("word{}", i)).collect();
        assert_eq!(detect_delimiter(&lines), None);
    }
}

// ============================================================================
// Header and footer boundaries
// ============================================================================

mod layout {
    use super::*;

    #[test]
    fn test_two_header_lines_of_free_text() {
        let mut lines = vec![
            "Spring constant measurement".to_string(),
            "All masses in grams".to_string(),
        ];
        lines.extend((0..5).map(|i| format!("{},{}", i, 10 * i)));
        assert_eq!(detect_header_rows(&lines, Delimiter::Comma), 2);
        assert_eq!(detect_footer_rows(&lines, Delimiter::Comma), 0);
    }

    #[test]
    fn test_footer_boundary_symmetric() {
        let mut lines: Vec<String> = (0..5).map(|i| format!("{},{}", i, 10 * i)).collect();
        lines.push("total,above".to_string());
        lines.push("generated by rig 3".to_string());
        assert_eq!(detect_footer_rows(&lines, Delimiter::Comma), 2);
    }

    #[test]
    fn test_detection_idempotence() {
        let text = "x,y\n1,10\n2,20\n3,30\n4,40\n5,50\nend of run";
        let first = detect_layout(text);
        let second = detect_layout(text);
        assert_eq!(first, second);
        assert_eq!(first.delimiter, Some(Delimiter::Comma));
    }
}

// ============================================================================
// Extraction
// ============================================================================

mod extraction {
    use super::*;

    #[test]
    fn test_shape_failure_cites_row_index() {
        let text = "1,10\n2,20\n3,30,99\n4,40";
        match extract_table(text, Delimiter::Comma, 0, 0, None) {
            Err(TableError::Shape {
                row_index,
                expected,
                found,
                ..
            }) => {
                assert_eq!(row_index, 2);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected a shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_ragged_table_is_never_truncated() {
        let text = "1,10\n2,20\n3\n4,40";
        assert!(extract_table(text, Delimiter::Comma, 0, 0, None).is_err());
    }

    #[test]
    fn test_comment_and_header_are_independent() {
        let text = "title line\n# units: seconds\n1,10\n2,20\n# checkpoint\n3,30";
        let table = extract_table(
            text,
            Delimiter::Comma,
            1,
            0,
            Some(CommentChar::Python),
        )
        .unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_empty_cells_become_zero() {
        let text = "1,\n2,20\n3,30";
        let table = extract_table(text, Delimiter::Comma, 0, 0, None).unwrap();
        let (_, ys) = table.numeric_xy(0, 1).unwrap();
        assert_eq!(ys, vec![0.0, 20.0, 30.0]);
    }

    #[test]
    fn test_non_numeric_column_is_named() {
        let text = "1,a\n2,b\n3,c";
        let table = extract_table(text, Delimiter::Comma, 0, 0, None).unwrap();
        assert_eq!(
            table.numeric_xy(0, 1).unwrap_err(),
            TableError::NonNumericColumn { columns: vec![1] }
        );
    }

    #[test]
    fn test_invalid_column_index() {
        let text = "1,10\n2,20";
        let table = extract_table(text, Delimiter::Comma, 0, 0, None).unwrap();
        assert!(matches!(
            table.numeric_xy(2, 1),
            Err(TableError::InvalidColumnIndex {
                index: 2,
                column_count: 2
            })
        ));
    }
}

// ============================================================================
// Document lifecycle
// ============================================================================

mod document {
    use super::*;

    #[test]
    fn test_detect_populates_and_is_idempotent() {
        let mut doc = TabularDocument::new("h1,h2\n1,10\n2,20\n3,30\n4,40\n5,50");
        let first = doc.detect();
        let second = doc.detect();
        assert_eq!(first, second);
        assert_eq!(first.delimiter, Some(Delimiter::Comma));
        assert_eq!(first.header_rows, Some(1));
    }

    #[test]
    fn test_manual_override_recomputes_without_detection() {
        let mut doc = TabularDocument::new("1|10\n2|20\n3|30\n4|40");
        doc.detect();
        assert_eq!(doc.table().unwrap().row_count(), 4);

        // Force a header row: the grid must shrink accordingly.
        doc.set_header_rows(1);
        assert_eq!(doc.table().unwrap().row_count(), 3);
        // The detected delimiter is untouched by the override.
        assert_eq!(doc.delimiter(), Some(Delimiter::Pipe));
    }

    #[test]
    fn test_unset_delimiter_is_reported() {
        let mut doc = TabularDocument::new("plain\nwords\nonly");
        doc.detect();
        assert_eq!(doc.table().unwrap_err(), TableError::DelimiterNotFound);
    }
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

mod end_to_end {
    use super::*;

    const EXPERIMENT: &str = "Experiment Results\nTrial,Value,Unit\n1,10.2,m\n2,10.5,m\n3,9.8,m\nEnd of data";

    #[test]
    fn test_experiment_results_layout() {
        let layout = detect_layout(EXPERIMENT);
        assert_eq!(layout.delimiter, Some(Delimiter::Comma));
        // The title row differs in field count; the names row matches the
        // data's field count but breaks its numeric pattern.
        assert_eq!(layout.header_rows, Some(2));
        assert_eq!(layout.footer_rows, Some(1));
    }

    #[test]
    fn test_experiment_results_extraction() {
        let table = extract_table(EXPERIMENT, Delimiter::Comma, 2, 1, None).unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 3);

        let (trials, values) = table.numeric_xy(0, 1).unwrap();
        assert_eq!(trials, vec![1.0, 2.0, 3.0]);
        assert_eq!(values, vec![10.2, 10.5, 9.8]);

        // The units column is not numeric.
        assert!(table.numeric_column(2).is_err());
    }

    #[test]
    fn test_extract_xy_uses_detected_layout() {
        let (x, y) = extract_xy(EXPERIMENT, 0, 1).unwrap();
        assert_eq!(x, vec![1.0, 2.0, 3.0]);
        assert_eq!(y, vec![10.2, 10.5, 9.8]);
    }

    #[test]
    fn test_check_document_clean_run() {
        let result = check_document(EXPERIMENT);
        assert!(!result.has_errors());
        assert!(result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("2 header row(s), 1 footer row(s)")));
    }

    #[test]
    fn test_value_list_paste() {
        assert_eq!(
            parse_value_list("0.1, 0.2, 0.3\n0.4").unwrap(),
            vec![0.1, 0.2, 0.3, 0.4]
        );
        assert_eq!(
            parse_value_list("1 2 three"),
            Err(TableError::NonNumericValue {
                value: "three".to_string()
            })
        );
    }
}
