//! Tokenizer implementation: raw text to ordered key/value pairs.

use crate::constants::{COMMENT_PREFIX, PAIR_SEPARATOR};

use super::error::ParseError;

/// One key/value pair produced from a single non-blank, non-comment line.
///
/// The key is never empty. The value is empty only when it was explicitly
/// quoted in the source (`KEY=""`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPair {
    pub key: String,
    pub value: String,
}

/// Tokenize `.env`-style text into pairs in file order.
///
/// Blank lines and `#` comments are skipped. Each remaining line is split on
/// its first `=`; key and value are trimmed, and a value wrapped in matching
/// double quotes is taken verbatim with the quotes stripped. Duplicate keys
/// are all emitted; resolving them is the store's job.
///
/// # Errors
///
/// Fails fast on the first bad line:
/// - [`ParseError::MalformedLine`] if a line has no `=` separator.
/// - [`ParseError::EmptyPair`] if a key, or an unquoted value, is empty
///   after trimming.
pub fn tokenize(contents: &str) -> Result<Vec<RawPair>, ParseError> {
    let mut pairs = Vec::new();

    for (index, raw_line) in contents.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once(PAIR_SEPARATOR) else {
            return Err(ParseError::MalformedLine {
                line: raw_line.to_string(),
                line_number,
            });
        };

        let key = raw_key.trim();
        let (value, quoted) = unquote(raw_value.trim());

        if key.is_empty() || (value.is_empty() && !quoted) {
            return Err(ParseError::EmptyPair {
                line: raw_line.to_string(),
                line_number,
            });
        }

        pairs.push(RawPair {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    Ok(pairs)
}

/// Strip one layer of matching double quotes, reporting whether the value
/// was quoted. A lone `"` or unmatched quote is left verbatim.
fn unquote(value: &str) -> (&str, bool) {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        (&value[1..value.len() - 1], true)
    } else {
        (value, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let pairs = tokenize("# comment\n\n   \nA=1\n  # indented comment\n").unwrap();
        assert_eq!(
            pairs,
            vec![RawPair {
                key: "A".to_string(),
                value: "1".to_string(),
            }]
        );
    }

    #[test]
    fn test_splits_on_first_separator_only() {
        let pairs = tokenize("CONN=host=localhost;port=5432").unwrap();
        assert_eq!(pairs[0].key, "CONN");
        assert_eq!(pairs[0].value, "host=localhost;port=5432");
    }

    #[test]
    fn test_trims_key_and_value() {
        let pairs = tokenize("  IMAP_HOST  =  localhost  ").unwrap();
        assert_eq!(pairs[0].key, "IMAP_HOST");
        assert_eq!(pairs[0].value, "localhost");
    }

    #[test]
    fn test_quoted_value_preserves_inner_whitespace() {
        let pairs = tokenize("GREETING=\"  hello world  \"").unwrap();
        assert_eq!(pairs[0].value, "  hello world  ");
    }

    #[test]
    fn test_quoted_empty_value_is_valid() {
        let pairs = tokenize("K=\"\"").unwrap();
        assert_eq!(pairs[0].value, "");
    }

    #[test]
    fn test_unquoted_empty_value_is_error() {
        let err = tokenize("K=").unwrap_err();
        assert!(matches!(err, ParseError::EmptyPair { .. }));
        assert_eq!(err.line(), "K=");
        assert_eq!(err.line_number(), 1);
    }

    #[test]
    fn test_empty_key_is_error() {
        let err = tokenize("=value").unwrap_err();
        assert!(matches!(err, ParseError::EmptyPair { .. }));
    }

    #[test]
    fn test_missing_separator_names_exact_line() {
        let err = tokenize("A=1\nNOKEYVALUE\nB=2").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedLine {
                line: "NOKEYVALUE".to_string(),
                line_number: 2,
            }
        );
    }

    #[test]
    fn test_fail_fast_returns_no_pairs() {
        // All-or-nothing: a bad line anywhere means no output at all.
        let result = tokenize("GOOD=1\nBAD\nALSO_GOOD=2");
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicates_are_all_emitted_in_file_order() {
        let pairs = tokenize("A=1\nB=x\nA=2").unwrap();
        let keys: Vec<&str> = pairs.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["A", "B", "A"]);
        assert_eq!(pairs[2].value, "2");
    }

    #[test]
    fn test_lone_quote_is_taken_verbatim() {
        let pairs = tokenize("K=\"").unwrap();
        assert_eq!(pairs[0].value, "\"");
    }

    #[test]
    fn test_unmatched_quote_is_taken_verbatim() {
        let pairs = tokenize("K=\"open").unwrap();
        assert_eq!(pairs[0].value, "\"open");
    }

    #[test]
    fn test_empty_input_yields_no_pairs() {
        assert!(tokenize("").unwrap().is_empty());
    }
}
