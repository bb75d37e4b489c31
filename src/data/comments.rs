//! Comment characters
//!
//! Single-line comment markers recognized during table extraction. A line
//! is truncated at the first occurrence of the active marker; lines left
//! blank by the truncation are dropped entirely. Comment stripping and
//! header/footer removal are independent settings.

use phf::phf_map;
use std::fmt;

/// A single-line comment marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentChar {
    /// `#`
    Python,
    /// `%`
    Matlab,
    /// `//`
    JavaScript,
    /// `!`
    Fortran,
}

/// All markers, in the order they are offered to users
pub const ALL_COMMENT_CHARS: [CommentChar; 4] = [
    CommentChar::Python,
    CommentChar::Matlab,
    CommentChar::JavaScript,
    CommentChar::Fortran,
];

/// Name or literal marker to comment character, for CLI and WASM parsing
pub static COMMENT_CHAR_NAMES: phf::Map<&'static str, CommentChar> = phf_map! {
    "python" => CommentChar::Python,
    "#" => CommentChar::Python,
    "matlab" => CommentChar::Matlab,
    "%" => CommentChar::Matlab,
    "javascript" => CommentChar::JavaScript,
    "//" => CommentChar::JavaScript,
    "fortran" => CommentChar::Fortran,
    "!" => CommentChar::Fortran,
};

impl CommentChar {
    /// The literal marker text
    pub fn marker(&self) -> &'static str {
        match self {
            CommentChar::Python => "#",
            CommentChar::Matlab => "%",
            CommentChar::JavaScript => "//",
            CommentChar::Fortran => "!",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            CommentChar::Python => "python",
            CommentChar::Matlab => "matlab",
            CommentChar::JavaScript => "javascript",
            CommentChar::Fortran => "fortran",
        }
    }

    /// Look up a comment character by name or literal marker
    pub fn from_name(name: &str) -> Option<CommentChar> {
        COMMENT_CHAR_NAMES
            .get(name.to_ascii_lowercase().as_str())
            .copied()
    }

    /// Strip this comment from a line: everything from the first marker
    /// occurrence onward is removed.
    pub fn strip<'a>(&self, line: &'a str) -> &'a str {
        match line.find(self.marker()) {
            Some(pos) => &line[..pos],
            None => line,
        }
    }
}

impl fmt::Display for CommentChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}
