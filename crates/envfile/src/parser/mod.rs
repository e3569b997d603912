//! Line tokenizer for `.env`-style text.
//!
//! Responsibilities:
//! - Split raw file text into candidate key/value pairs.
//! - Skip blank lines and `#` comments; strip matching double quotes.
//! - Reject malformed lines and empty keys/values fail-fast.
//!
//! Does NOT handle:
//! - Type inference or duplicate-key resolution (see `store.rs`).
//! - Reading files from disk (see `loader`).
//!
//! Invariants:
//! - Pairs are produced in file order; duplicates are all emitted.
//! - Parsing is all-or-nothing: the first bad line aborts with an error.
//! - A returned key is never empty; a returned value is empty only if it
//!   was explicitly quoted (`KEY=""`).

mod error;
mod tokenizer;

pub use error::ParseError;
pub use tokenizer::{RawPair, tokenize};
