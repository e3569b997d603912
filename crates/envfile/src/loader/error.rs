//! Error types for locating and reading `.env` files.
//!
//! Responsibilities:
//! - Define file-level error variants, distinct from parse errors.
//!
//! Does NOT handle:
//! - Tokenizer failures (see `parser::ParseError`).
//!
//! Invariants:
//! - File-level and parse-level failures stay separate categories, joined
//!   only by `LoadError` at the loader surface.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::parser::ParseError;

/// Errors raised while reading a `.env` file from disk.
#[derive(Error, Debug)]
pub enum FileError {
    /// No file exists at the resolved path.
    #[error("no .env file found at {path}")]
    Missing { path: PathBuf },

    /// The file exists but could not be read (permissions, encoding, ...).
    #[error("failed to read .env file at {path}: {kind}")]
    Unreadable { path: PathBuf, kind: ErrorKind },
}

/// Any failure of the load operation: a file problem or a parse problem.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
