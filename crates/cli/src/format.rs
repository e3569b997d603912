//! Console rendering and secret masking.
//!
//! Responsibilities:
//! - Render store entries for display.
//! - Mask values whose key name indicates a secret.
//!
//! Does NOT handle:
//! - Storage or lookup; masking is a presentation-layer policy only and
//!   never changes what the store holds.

use envfile::Value;

/// Replacement text for masked values.
pub const MASK: &str = "********";

/// Key-name substrings that mark a value as secret. Keys are canonically
/// upper-snake-case, so matching is case-sensitive.
const SECRET_MARKERS: [&str; 3] = ["PASSWORD", "SECRET", "TOKEN"];

/// Whether a key's name indicates its value should be masked.
pub fn is_secret_key(key: &str) -> bool {
    SECRET_MARKERS.iter().any(|marker| key.contains(marker))
}

/// Render a value for display, masking secrets unless `show_secrets` is set.
pub fn display_value(key: &str, value: &Value, show_secrets: bool) -> String {
    if !show_secrets && is_secret_key(key) {
        MASK.to_string()
    } else {
        value.string_value()
    }
}
