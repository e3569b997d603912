//! Typed `.env` file parsing and lookup.
//!
//! This crate tokenizes `.env`-style text into key/value pairs, classifies
//! each value as a string or an integer, and exposes the result as an
//! immutable [`EnvStore`] queryable by exact key or by a derived
//! lowerCamelCase alias (`IMAP_HOST` → `imapHost`).

pub mod constants;
mod loader;
mod parser;
mod store;
mod value;

pub use loader::{FileError, LoadError, load, load_default, resolve_default_path};
pub use parser::{ParseError, RawPair, tokenize};
pub use store::{EnvStore, derived_alias};
pub use value::{Value, ValueKind};
