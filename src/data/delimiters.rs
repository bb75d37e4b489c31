//! Delimiter candidates
//!
//! The fixed set of field separators the detector tries, in priority
//! order: comma, tab, whitespace-run, semicolon, pipe. Each candidate is
//! a pre-compiled regular expression; literal separators are escaped at
//! definition time so the tokenizer never needs to distinguish literal
//! from pattern delimiters.

use lazy_static::lazy_static;
use phf::phf_map;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref COMMA_PATTERN: Regex = Regex::new(",").unwrap();
    static ref TAB_PATTERN: Regex = Regex::new(r"\t").unwrap();
    static ref WHITESPACE_PATTERN: Regex = Regex::new(r"\s+").unwrap();
    static ref SEMICOLON_PATTERN: Regex = Regex::new(";").unwrap();
    static ref PIPE_PATTERN: Regex = Regex::new(r"\|").unwrap();
}

/// A candidate field separator
///
/// Variant order is the detection priority order: when several candidates
/// split a sample consistently, the first one listed here wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Comma,
    Tab,
    /// One or more whitespace characters
    Whitespace,
    Semicolon,
    Pipe,
}

/// All candidates in detection priority order
pub const ALL_DELIMITERS: [Delimiter; 5] = [
    Delimiter::Comma,
    Delimiter::Tab,
    Delimiter::Whitespace,
    Delimiter::Semicolon,
    Delimiter::Pipe,
];

/// Lowercase name to delimiter, for CLI and WASM option parsing
pub static DELIMITER_NAMES: phf::Map<&'static str, Delimiter> = phf_map! {
    "comma" => Delimiter::Comma,
    "tab" => Delimiter::Tab,
    "whitespace" => Delimiter::Whitespace,
    "space" => Delimiter::Whitespace,
    "semicolon" => Delimiter::Semicolon,
    "pipe" => Delimiter::Pipe,
};

impl Delimiter {
    /// The compiled split pattern for this candidate
    pub fn pattern(&self) -> &'static Regex {
        match self {
            Delimiter::Comma => &COMMA_PATTERN,
            Delimiter::Tab => &TAB_PATTERN,
            Delimiter::Whitespace => &WHITESPACE_PATTERN,
            Delimiter::Semicolon => &SEMICOLON_PATTERN,
            Delimiter::Pipe => &PIPE_PATTERN,
        }
    }

    /// Human-readable name (matches the keys in [`DELIMITER_NAMES`])
    pub fn name(&self) -> &'static str {
        match self {
            Delimiter::Comma => "comma",
            Delimiter::Tab => "tab",
            Delimiter::Whitespace => "whitespace",
            Delimiter::Semicolon => "semicolon",
            Delimiter::Pipe => "pipe",
        }
    }

    /// Look up a delimiter by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Delimiter> {
        DELIMITER_NAMES.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Position in the priority order
    pub fn index(&self) -> usize {
        ALL_DELIMITERS.iter().position(|d| d == self).unwrap_or(0)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
