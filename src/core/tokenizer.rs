//! Quote-aware line tokenizer
//!
//! Splits a single line into fields on a regex delimiter while honoring
//! quoted substrings and backslash escapes. Quote openers are recognized
//! in priority order `"""`, `'''`, `"`, `'` (triple quotes first, so
//! `"""text"""` is not read as an empty quoted string followed by text).
//! The delimiter pattern is never consulted inside a quote. A backslash
//! copies itself and the following character into the field verbatim,
//! everywhere, so an escaped delimiter survives in the output including
//! its backslash.
//!
//! If the delimiter never matches, the whole line comes back as a single
//! field - callers use that as the signal that the delimiter is wrong for
//! this line.

use regex::Regex;

/// Quote markers, longest first
const QUOTE_MARKERS: [&str; 4] = ["\"\"\"", "'''", "\"", "'"];

/// Split one line into fields on `delimiter`.
///
/// Fast path: a line containing no quote characters is split with plain
/// regex-split semantics. Otherwise the line is consumed left to right one
/// token at a time: quote openers are tested first, then the delimiter
/// (with match-at-current-position semantics), then a single literal
/// character is taken into the current field.
pub fn split_line(line: &str, delimiter: &Regex) -> Vec<String> {
    if !line.contains('"') && !line.contains('\'') {
        return delimiter.split(line).map(str::to_string).collect();
    }

    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quote: Option<&str> = None;
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];

        // Backslash escape: copy the backslash and the next character
        // verbatim, with no delimiter or quote interpretation.
        if let Some(stripped) = rest.strip_prefix('\\') {
            current.push('\\');
            match stripped.chars().next() {
                Some(c) => {
                    current.push(c);
                    pos += 1 + c.len_utf8();
                }
                None => pos += 1,
            }
            continue;
        }

        if let Some(closer) = in_quote {
            if rest.starts_with(closer) {
                pos += closer.len();
                in_quote = None;
            } else {
                let c = first_char(rest);
                current.push(c);
                pos += c.len_utf8();
            }
            continue;
        }

        if let Some(&marker) = QUOTE_MARKERS.iter().find(|m| rest.starts_with(**m)) {
            in_quote = Some(marker);
            pos += marker.len();
            continue;
        }

        // Delimiter match anchored at the current position ends the field.
        if let Some(m) = delimiter.find_at(line, pos) {
            if m.start() == pos && !m.is_empty() {
                fields.push(std::mem::take(&mut current));
                pos = m.end();
                continue;
            }
        }

        let c = first_char(rest);
        current.push(c);
        pos += c.len_utf8();
    }

    fields.push(current);
    fields
}

fn first_char(s: &str) -> char {
    // Callers only reach here with a non-empty remainder.
    s.chars().next().unwrap_or('\0')
}
