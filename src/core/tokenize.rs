//! Token-set normalization for similarity scoring.
//!
//! Raw text is reduced to a set of lowercased word tokens. Term frequency is
//! deliberately ignored: two documents compare equal on a token whether it
//! appears once or fifty times. Short tokens (<= 2 chars) are dropped as
//! noise so articles and connectors never contribute to a match.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Runs of non-word characters delimit tokens.
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("static token pattern"));

/// Minimum token length, exclusive. Anything at or below this is noise.
const NOISE_LEN: usize = 2;

/// Normalize `text` into its comparable token set.
///
/// Lowercases, splits on runs of non-word characters, and discards tokens of
/// length <= 2. Empty input yields an empty set.
pub fn token_set(text: &str) -> BTreeSet<String>
{
    let lowered = text.to_lowercase();

    WORD_BOUNDARY
        .split(&lowered)
        .filter(|tok| tok.chars().count() > NOISE_LEN)
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_lowercases_and_splits_on_punctuation()
    {
        let tokens = token_set("The QUICK, brown-fox; jumps!");

        let expected: BTreeSet<String> = ["the", "quick", "brown", "fox", "jumps"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_noise_tokens_are_dropped()
    {
        // "is", "a", "to" are all <= 2 chars and must vanish
        let tokens = token_set("this is a way to win");

        assert!(tokens.contains("this"));
        assert!(tokens.contains("way"));
        assert!(tokens.contains("win"));
        assert!(!tokens.contains("is"));
        assert!(!tokens.contains("a"));
        assert!(!tokens.contains("to"));
    }

    #[test]
    fn test_duplicates_collapse()
    {
        let tokens = token_set("rust rust RUST Rust!");

        assert_eq!(tokens.len(), 1);
        assert!(tokens.contains("rust"));
    }

    #[test]
    fn test_empty_and_symbol_only_input()
    {
        assert!(token_set("").is_empty());
        assert!(token_set("   \t\n").is_empty());
        assert!(token_set("!!! ??? ... --- ;;").is_empty());
    }

    #[test]
    fn test_underscore_joins_words()
    {
        // Underscore is a word character, so snake_case stays one token
        let tokens = token_set("snake_case split.point");

        assert!(tokens.contains("snake_case"));
        assert!(tokens.contains("split"));
        assert!(tokens.contains("point"));
    }
}
