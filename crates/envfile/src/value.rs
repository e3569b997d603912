//! Typed values inferred from raw `.env` text.
//!
//! Responsibilities:
//! - Classify raw value text as a string or a 64-bit signed integer.
//! - Provide a canonical string rendering regardless of kind.
//!
//! Invariants:
//! - Inference never fails; anything that is not canonical decimal text
//!   (leading zeros, `+` sign, `-0`, surrounding whitespace, overflow)
//!   falls back to `Str`.
//! - `Str` renders verbatim; `Int` renders with sign preserved and no
//!   leading zeros, so inference and rendering round-trip exactly.

use std::fmt;

/// Discriminant for [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Str,
    Int,
}

/// A value parsed from a `.env` entry: plain text or a base-10 integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(i64),
}

impl Value {
    /// Classify raw value text.
    ///
    /// The text is an `Int` only when it parses as an `i64` AND formatting
    /// that integer reproduces the text byte-for-byte. The round-trip check
    /// rejects `007`, `+5`, and `-0`, which `i64::from_str` would otherwise
    /// accept.
    pub fn infer(raw: &str) -> Value {
        match raw.parse::<i64>() {
            Ok(n) if n.to_string() == raw => Value::Int(n),
            _ => Value::Str(raw.to_string()),
        }
    }

    /// The value's kind tag.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Int(_) => ValueKind::Int,
        }
    }

    /// Canonical string rendering: `Str` as-is, `Int` in base 10.
    pub fn string_value(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Int(n) => n.to_string(),
        }
    }

    /// The integer, if this value is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Str(_) => None,
        }
    }

    /// The text, if this value is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Int(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
        }
    }
}
