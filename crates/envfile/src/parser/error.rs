//! Error types for `.env` parsing.
//!
//! Responsibilities:
//! - Define error variants for tokenizer failures.
//!
//! Does NOT handle:
//! - File-level failures (missing or unreadable files live in
//!   `loader::FileError`), so parser tests never touch the filesystem.
//!
//! Invariants:
//! - Every variant carries the offending raw line text and its 1-based
//!   line number.

use thiserror::Error;

/// Errors that can occur while tokenizing `.env` text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A non-blank, non-comment line has no `=` separator.
    #[error("line {line_number} is missing an '=' separator: {line:?}")]
    MalformedLine { line: String, line_number: usize },

    /// A line's key, or its unquoted value, is empty after trimming.
    ///
    /// An intentionally empty value must be quoted (`KEY=""`).
    #[error("line {line_number} has an empty key or empty unquoted value: {line:?}")]
    EmptyPair { line: String, line_number: usize },
}

impl ParseError {
    /// The raw text of the line that failed to parse.
    pub fn line(&self) -> &str {
        match self {
            ParseError::MalformedLine { line, .. } => line,
            ParseError::EmptyPair { line, .. } => line,
        }
    }

    /// The 1-based line number of the failing line.
    pub fn line_number(&self) -> usize {
        match self {
            ParseError::MalformedLine { line_number, .. } => *line_number,
            ParseError::EmptyPair { line_number, .. } => *line_number,
        }
    }
}
