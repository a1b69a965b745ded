//! Scorer laws from the evaluation engine contract:
//! determinism, the empty-corpus rule, self-similarity, symmetry of the
//! pairwise metric, and monotonicity of the max-reduction.

use draftcheck::core::similarity::{best_match, max_similarity, pairwise};
use draftcheck::core::tokenize::token_set;

const ESSAY: &str = "The water cycle moves moisture between oceans, atmosphere, and land \
                     through evaporation, condensation, and precipitation.";

#[test]
fn test_determinism_on_identical_inputs()
{
    let corpus = vec![
        "Evaporation lifts moisture from oceans into the atmosphere.".to_string(),
        "Precipitation returns water to land and sea.".to_string(),
    ];

    let first = max_similarity(ESSAY, &corpus);
    let second = max_similarity(ESSAY, &corpus);

    assert_eq!(first, second);
}

#[test]
fn test_empty_corpus_law()
{
    assert_eq!(max_similarity(ESSAY, &[]), 0);
    assert_eq!(max_similarity("", &[]), 0);
    assert!(best_match(ESSAY, &[]).is_none());
}

#[test]
fn test_self_similarity_bound()
{
    // Any non-empty text with at least one token over 2 chars scores 100
    // against a corpus containing itself
    assert_eq!(max_similarity(ESSAY, &[ESSAY.to_string()]), 100);
    assert_eq!(max_similarity("sunflower", &["sunflower".to_string()]), 100);
}

#[test]
fn test_pairwise_metric_is_symmetric()
{
    let a = token_set("rivers carry sediment toward the delta");
    let b = token_set("the delta collects sediment from rivers upstream");

    assert_eq!(pairwise(&a, &b), pairwise(&b, &a));
}

#[test]
fn test_noise_tokens_never_contribute()
{
    // The two texts share only tokens of length <= 2 ("a", "of", "is")
    let a = token_set("a of is stalactite");
    let b = token_set("a of is limestone");

    assert_eq!(pairwise(&a, &b), 0.0);
}

#[test]
fn test_adding_entries_never_lowers_the_maximum()
{
    let base = vec!["oceans feed evaporation and atmosphere moisture".to_string()];
    let before = max_similarity(ESSAY, &base);

    // A weaker entry cannot pull the maximum down
    let mut widened = base.clone();
    widened.push("completely unrelated medieval heraldry treatise".to_string());

    assert_eq!(max_similarity(ESSAY, &widened), before);

    // A stronger entry raises it
    widened.push(ESSAY.to_string());

    assert_eq!(max_similarity(ESSAY, &widened), 100);
}

#[test]
fn test_degenerate_pair_of_empty_token_sets()
{
    // Symbol-only texts tokenize to nothing on both sides; the pair is
    // defined as zero rather than a division by zero
    assert_eq!(max_similarity("!!! ???", &["... ---".to_string()]), 0);
}

#[test]
fn test_final_rounding_to_nearest_integer()
{
    // 1 shared token, union of 3 -> 33.33% -> 33
    assert_eq!(
        max_similarity("alpha beta", &["beta gamma".to_string()]),
        33
    );

    // 2 shared tokens, union of 3 -> 66.67% -> 67
    assert_eq!(
        max_similarity("alpha beta gamma", &["alpha beta".to_string()]),
        67
    );
}
