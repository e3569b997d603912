//! File resolution and loading for `.env` files.
//!
//! Responsibilities:
//! - Resolve the default `.env` path from the process environment.
//! - Read a file and hand its contents to the parser.
//!
//! Does NOT handle:
//! - Tokenizing or type inference (see `parser` and `store`).
//! - Deciding whether a failure is fatal; that is the caller's call.
//!
//! Invariants:
//! - The parser never sees a path or an I/O error; it receives in-memory
//!   text only.
//! - The working directory comes from the `PWD` environment variable when
//!   set and non-empty, falling back to `std::env::current_dir()`.

mod error;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::constants::ENV_FILENAME;
use crate::store::EnvStore;

pub use error::{FileError, LoadError};

/// Resolve the default `.env` path: the working directory with the fixed
/// filename appended.
pub fn resolve_default_path() -> PathBuf {
    let dir = match std::env::var("PWD") {
        Ok(pwd) if !pwd.trim().is_empty() => PathBuf::from(pwd),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    dir.join(ENV_FILENAME)
}

/// Read and parse the `.env` file at `path`.
///
/// # Errors
///
/// - [`FileError::Missing`] if no file exists at `path`.
/// - [`FileError::Unreadable`] if the file exists but cannot be read
///   (permissions, invalid UTF-8, ...).
/// - [`LoadError::Parse`] if the contents fail to tokenize.
pub fn load(path: &Path) -> Result<EnvStore, LoadError> {
    tracing::debug!(path = %path.display(), "loading .env file");

    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FileError::Missing {
            path: path.to_path_buf(),
        },
        kind => FileError::Unreadable {
            path: path.to_path_buf(),
            kind,
        },
    })?;

    let store = EnvStore::parse(&contents)?;
    tracing::debug!(entries = store.len(), "loaded .env file");
    Ok(store)
}

/// Load the `.env` file at the default resolved path.
///
/// # Errors
///
/// Same as [`load`].
pub fn load_default() -> Result<EnvStore, LoadError> {
    load(&resolve_default_path())
}
