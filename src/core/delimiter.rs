//! Delimiter detection
//!
//! Tries the fixed candidate set against a sample of lines and picks the
//! first candidate (in priority order) that yields a consistent field
//! count. The sample is ordered from the middle of the document outward:
//! data rows cluster around the middle, away from header and footer
//! noise, so the earliest samples are the most likely to be genuine data.

use crate::core::tokenizer::split_line;
use crate::data::{Delimiter, ALL_DELIMITERS};

/// Sample-line indices ordered from the midpoint outward
/// (mid, mid-1, mid+1, mid-2, mid+2, ...).
pub(crate) fn midpoint_ordering(line_count: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(line_count);
    if line_count == 0 {
        return order;
    }
    let mid = line_count / 2;
    order.push(mid);
    let mut step = 1;
    loop {
        let mut pushed = false;
        if step <= mid {
            order.push(mid - step);
            pushed = true;
        }
        if mid + step < line_count {
            order.push(mid + step);
            pushed = true;
        }
        if !pushed {
            break;
        }
        step += 1;
    }
    order
}

/// How many sampled lines must agree before a candidate is accepted.
///
/// `min(max(10, n/3), n - 2)` - at least 10 lines (or a third of the
/// document), but never more than exist minus two, reserving room for one
/// header and one footer line. Floored at 1 so degenerate documents still
/// test their first sampled line.
pub(crate) fn sample_threshold(line_count: usize) -> usize {
    let base = std::cmp::max(10, line_count / 3);
    std::cmp::min(base, line_count.saturating_sub(2)).max(1)
}

/// Detect the delimiter for a document, or `None` if no candidate yields
/// a consistent field count across the threshold sample.
pub fn detect_delimiter<S: AsRef<str>>(lines: &[S]) -> Option<Delimiter> {
    let ordered = midpoint_ordering(lines.len());
    if ordered.is_empty() {
        return None;
    }
    let threshold = sample_threshold(lines.len());

    'candidates: for candidate in ALL_DELIMITERS {
        let pattern = candidate.pattern();
        let first = split_line(lines[ordered[0]].as_ref(), pattern);
        // A single field means the delimiter is absent from the line.
        if first.len() <= 1 {
            continue;
        }
        let expected = first.len();
        for &idx in ordered.iter().take(threshold).skip(1) {
            if split_line(lines[idx].as_ref(), pattern).len() != expected {
                continue 'candidates;
            }
        }
        return Some(candidate);
    }
    None
}
