//! Immutable typed store over parsed `.env` pairs.
//!
//! Responsibilities:
//! - Build a key→value map from tokenized pairs, last occurrence winning.
//! - Look up entries by exact key or by a derived lowerCamelCase alias.
//!
//! Does NOT handle:
//! - Tokenizing raw text (see `parser`) or reading files (see `loader`).
//!
//! Invariants:
//! - Keys are case-sensitive; original casing is preserved.
//! - The store is never mutated after `build`; lookups are pure and return
//!   `None` for absent keys rather than failing.
//! - Derived-alias lookup is computed lazily over the same map; there is no
//!   second index.

use std::collections::BTreeMap;

use crate::parser::{ParseError, RawPair, tokenize};
use crate::value::Value;

/// An immutable mapping from `.env` keys to typed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvStore {
    entries: BTreeMap<String, Value>,
}

impl EnvStore {
    /// Build a store from tokenized pairs.
    ///
    /// Pairs are inserted in order, so a duplicate key keeps the value of
    /// its last occurrence.
    pub fn build(pairs: Vec<RawPair>) -> EnvStore {
        let mut entries = BTreeMap::new();
        for pair in pairs {
            entries.insert(pair.key, Value::infer(&pair.value));
        }
        EnvStore { entries }
    }

    /// Tokenize text and build a store in one step.
    ///
    /// # Errors
    ///
    /// Propagates the tokenizer's [`ParseError`]; no partial store is
    /// produced.
    pub fn parse(contents: &str) -> Result<EnvStore, ParseError> {
        Ok(EnvStore::build(tokenize(contents)?))
    }

    /// Look up a value by its exact, case-sensitive key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up a value by the lowerCamelCase alias derived from its key.
    ///
    /// `IMAP_HOST` is reachable as `imapHost`. The alias is recomputed per
    /// stored key at lookup time; a query matching no canonical key returns
    /// `None`.
    pub fn get_derived(&self, alias: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| derived_alias(key) == alias)
            .map(|(_, value)| value)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in deterministic (sorted-key) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate keys in deterministic (sorted) order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Derive the lowerCamelCase alias for a canonical upper-snake-case key.
///
/// Segments are split on `_`; the first is lowercased, each later segment is
/// lowercased with its first letter capitalized, and the results are
/// concatenated: `IMAP_HOST` → `imapHost`.
pub fn derived_alias(key: &str) -> String {
    let mut alias = String::with_capacity(key.len());
    for (index, segment) in key.split('_').enumerate() {
        if index == 0 {
            alias.extend(segment.chars().flat_map(char::to_lowercase));
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                alias.extend(first.to_uppercase());
                alias.extend(chars.flat_map(char::to_lowercase));
            }
        }
    }
    alias
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    #[test]
    fn test_last_occurrence_wins_on_duplicate_keys() {
        let store = EnvStore::parse("A=1\nA=2").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("A"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_get_is_case_sensitive() {
        let store = EnvStore::parse("IMAP_HOST=localhost").unwrap();
        assert!(store.get("IMAP_HOST").is_some());
        assert!(store.get("imap_host").is_none());
    }

    #[test]
    fn test_values_are_typed() {
        let store = EnvStore::parse("IMAP_HOST=localhost\nIMAP_PORT=993").unwrap();
        assert_eq!(store.get("IMAP_HOST").unwrap().kind(), ValueKind::Str);
        assert_eq!(store.get("IMAP_PORT").unwrap().as_int(), Some(993));
    }

    #[test]
    fn test_comment_and_blank_lines_produce_single_typed_entry() {
        let store = EnvStore::parse("# comment\n\nA=1").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("A"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_quoted_empty_value_is_stored() {
        let store = EnvStore::parse("K=\"\"").unwrap();
        assert_eq!(store.get("K"), Some(&Value::Str(String::new())));
    }

    #[test]
    fn test_derived_alias_rule() {
        assert_eq!(derived_alias("IMAP_HOST"), "imapHost");
        assert_eq!(derived_alias("IMAP_PASSWORD"), "imapPassword");
        assert_eq!(derived_alias("A"), "a");
        assert_eq!(derived_alias("A_B_C"), "aBC");
        assert_eq!(derived_alias("DOUBLE__UNDERSCORE"), "doubleUnderscore");
    }

    #[test]
    fn test_get_derived_resolves_canonical_entry() {
        let store = EnvStore::parse("IMAP_HOST=localhost").unwrap();
        assert_eq!(
            store.get_derived("imapHost"),
            Some(&Value::Str("localhost".to_string()))
        );
        assert_eq!(store.get_derived("imapHosts"), None);
    }

    #[test]
    fn test_lookups_are_idempotent() {
        let store = EnvStore::parse("IMAP_PORT=993").unwrap();
        for _ in 0..3 {
            assert_eq!(store.get("IMAP_PORT"), Some(&Value::Int(993)));
            assert_eq!(store.get_derived("imapPort"), Some(&Value::Int(993)));
        }
    }

    #[test]
    fn test_iteration_is_deterministic() {
        let store = EnvStore::parse("B=2\nA=1\nC=3").unwrap();
        let keys: Vec<&str> = store.keys().collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_input_builds_empty_store() {
        let store = EnvStore::parse("# only comments\n").unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get("ANY"), None);
    }

    #[test]
    fn test_independent_stores_coexist() {
        let a = EnvStore::parse("K=1").unwrap();
        let b = EnvStore::parse("K=2").unwrap();
        assert_eq!(a.get("K"), Some(&Value::Int(1)));
        assert_eq!(b.get("K"), Some(&Value::Int(2)));
    }
}
