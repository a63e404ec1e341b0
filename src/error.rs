//! Error types for INI parsing and document lookups.
//!
//! Two error kinds are kept apart:
//!
//! - [`ParseError`]: malformed input, raised only by the parser
//! - [`RangeError`]: a strict lookup on a [`Document`](crate::Document) or
//!   [`Section`](crate::Section) found nothing
//!
//! Auto-creating accessors, existence checks, deletion and encoding never fail.
//!
//! ## Examples
//!
//! ```rust
//! use ini_doc::{from_str, ParseError};
//!
//! let err = from_str("[s").unwrap_err();
//! assert!(matches!(err, ParseError::UnexpectedEndOfSection { .. }));
//! assert_eq!(err.line(), Some(1));
//! ```

use bstr::BString;
use thiserror::Error;

/// Malformed INI input.
///
/// Positions are 1-based. Columns count bytes, not characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A section header reached the end of its line before `]`.
    #[error("Unexpected end of section at line {line}, column {col}")]
    UnexpectedEndOfSection { line: usize, col: usize },

    /// A `;` appeared inside a section header before `]`.
    #[error("Unexpected comment at line {line}, column {col}")]
    UnexpectedComment { line: usize, col: usize },

    /// Something other than blanks or a comment followed `]`.
    #[error(
        "Unexpected character after section at line {line}, column {col}: '{}'",
        .found.escape_ascii()
    )]
    UnexpectedCharacterAfterSection { line: usize, col: usize, found: u8 },

    /// The section name was empty after trimming.
    #[error("Invalid section name at line {line}, column {col}")]
    InvalidSectionName { line: usize, col: usize },

    /// A second `=` on a key/value line.
    #[error("Unexpected character at line {line}, column {col}: '{}'", .found.escape_ascii())]
    UnexpectedCharacter { line: usize, col: usize, found: u8 },

    /// The key was empty after trimming.
    #[error("Invalid key name at line {line}, column {col}")]
    InvalidKeyName { line: usize, col: usize },

    /// Reading the input failed
    #[error("IO error: {0}")]
    Io(String),
}

impl ParseError {
    /// Creates an I/O error for reader failures.
    pub fn io(msg: &str) -> Self {
        ParseError::Io(msg.to_string())
    }

    /// Line the error was detected on, if the error is positional.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        self.position().map(|(line, _)| line)
    }

    /// Column the error was detected at, if the error is positional.
    #[must_use]
    pub fn column(&self) -> Option<usize> {
        self.position().map(|(_, col)| col)
    }

    fn position(&self) -> Option<(usize, usize)> {
        match *self {
            ParseError::UnexpectedEndOfSection { line, col }
            | ParseError::UnexpectedComment { line, col }
            | ParseError::UnexpectedCharacterAfterSection { line, col, .. }
            | ParseError::InvalidSectionName { line, col }
            | ParseError::UnexpectedCharacter { line, col, .. }
            | ParseError::InvalidKeyName { line, col } => Some((line, col)),
            ParseError::Io(_) => None,
        }
    }
}

/// A strict lookup found no such section or value. Carries the name that
/// was looked up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Section does not exist: {0:?}")]
    SectionNotFound(BString),

    #[error("Value does not exist: {0:?}")]
    ValueNotFound(BString),
}

pub type Result<T, E = ParseError> = std::result::Result<T, E>;
