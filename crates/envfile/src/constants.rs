//! Centralized constants for the envfile workspace.
//!
//! Named values shared across crates to avoid magic-string duplication.

/// Fixed filename appended to the resolved working directory.
pub const ENV_FILENAME: &str = ".env";

/// Comment marker; a line starting with this (after trimming) is skipped.
pub const COMMENT_PREFIX: char = '#';

/// Separator between key and value; split happens on the first occurrence.
pub const PAIR_SEPARATOR: char = '=';
