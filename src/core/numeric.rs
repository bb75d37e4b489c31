//! Numeric cell classification
//!
//! The shared predicate behind row detection and column conversion: a cell
//! counts as numeric when it parses as a float or when its trimmed,
//! case-insensitive form is one of the sentinels `inf`, `-inf`, `nan`, or
//! the empty string. Empty cells become zero when a column is converted.

/// Sentinel tokens accepted as numeric by convention
const NUMERIC_SENTINELS: [&str; 3] = ["inf", "-inf", "nan"];

/// Is this cell parseable as a number (or one of the numeric sentinels)?
pub fn is_numeric(cell: &str) -> bool {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return true;
    }
    let lower = trimmed.to_ascii_lowercase();
    if NUMERIC_SENTINELS.contains(&lower.as_str()) {
        return true;
    }
    trimmed.parse::<f64>().is_ok()
}

/// Convert a cell to a float, substituting zero for an empty cell.
///
/// Returns `None` for cells that are neither numeric nor sentinels.
pub fn parse_cell(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert!(is_numeric("1"));
        assert!(is_numeric("-3.5"));
        assert!(is_numeric("1.5e10"));
        assert!(is_numeric(" 42 "));
    }

    #[test]
    fn test_sentinels() {
        assert!(is_numeric("inf"));
        assert!(is_numeric("-inf"));
        assert!(is_numeric("NaN"));
        assert!(is_numeric("nan"));
        assert!(is_numeric(""));
        assert!(is_numeric("   "));
    }

    #[test]
    fn test_non_numeric() {
        assert!(!is_numeric("abc"));
        assert!(!is_numeric("1.2.3"));
        assert!(!is_numeric("12 m"));
    }

    #[test]
    fn test_parse_cell_empty_is_zero() {
        assert_eq!(parse_cell(""), Some(0.0));
        assert_eq!(parse_cell("  "), Some(0.0));
    }

    #[test]
    fn test_parse_cell_values() {
        assert_eq!(parse_cell("10.5"), Some(10.5));
        assert_eq!(parse_cell(" 9.8 "), Some(9.8));
        assert!(parse_cell("inf").unwrap().is_infinite());
        assert!(parse_cell("nan").unwrap().is_nan());
        assert_eq!(parse_cell("m"), None);
    }
}
