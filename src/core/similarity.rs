//! Originality-risk scoring against a corpus of prior submissions.
//!
//! The metric is set-membership Jaccard over normalized token sets: the size
//! of the intersection over the size of the union, as a percentage. The
//! corpus score is the single highest pairwise match, not an average; the
//! concern is the closest prior submission, not a corpus-wide blend.
//!
//! Term frequency and document length are ignored by the metric. That is a
//! known precision limitation of set-membership Jaccard; callers wanting
//! frequency-aware scoring need a different metric, not a tweak here.
//!
//! Everything here is pure: no mutation of inputs, no caching, identical
//! inputs always produce identical results.

use std::collections::BTreeSet;

use anyhow::Result;
use owo_colors::OwoColorize;
use rayon::prelude::*;
use serde::Serialize;

use crate::cli::{AppContext, ScoreArgs};
use crate::core::evaluate::read_submission;
use crate::core::tokenize::token_set;
use crate::infra::{config, walk};

/// Jaccard similarity of two token sets as a percentage in [0.0, 100.0].
///
/// When both sets are empty the union is empty; that degenerate pair is
/// defined as 0.0 rather than a division by zero. The metric is symmetric.
pub fn pairwise(
    a: &BTreeSet<String>,
    b: &BTreeSet<String>,
) -> f64
{
    let intersection = a
        .intersection(b)
        .count();

    let union = a.len() + b.len() - intersection;

    if union == 0
    {
        return 0.0;
    }

    (intersection as f64 / union as f64) * 100.0
}

/// Index and unrounded score of the closest corpus entry.
///
/// Returns `None` for an empty corpus. Ties resolve to the lowest index so
/// the result matches a sequential first-wins scan even when the corpus is
/// walked in parallel.
pub fn best_match(
    new_text: &str,
    corpus: &[String],
) -> Option<(usize, f64)>
{
    if corpus.is_empty()
    {
        return None;
    }

    let new_tokens = token_set(new_text);

    corpus
        .par_iter()
        .enumerate()
        .map(|(idx, text)| (idx, pairwise(&new_tokens, &token_set(text))))
        .reduce_with(|lhs, rhs| {
            // Higher score wins; on an exact tie keep the earlier entry
            if rhs.1 > lhs.1 || (rhs.1 == lhs.1 && rhs.0 < lhs.0) { rhs } else { lhs }
        })
}

/// Maximum pairwise similarity of `new_text` against the corpus, rounded to
/// the nearest integer percentage.
///
/// An empty corpus can never indicate plagiarism, so it scores 0.
pub fn max_similarity(
    new_text: &str,
    corpus: &[String],
) -> u8
{
    best_match(new_text, corpus)
        .map(|(_, score)| score.round() as u8)
        .unwrap_or(0)
}

/// Presentation band over the similarity percentage.
///
/// Thresholds mirror the submission dashboard's display rules: anything
/// above 20% is flagged, 16-20% warrants a look, the rest passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand
{
    Low,
    Elevated,
    High,
}

impl RiskBand
{
    /// Band a rounded similarity percentage.
    pub fn from_percent(percent: u8) -> Self
    {
        if percent > 20
        {
            RiskBand::High
        }
        else if percent > 15
        {
            RiskBand::Elevated
        }
        else
        {
            RiskBand::Low
        }
    }
}

impl std::fmt::Display for RiskBand
{
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result
    {
        match self
        {
            RiskBand::Low => write!(f, "low"),
            RiskBand::Elevated => write!(f, "elevated"),
            RiskBand::High => write!(f, "high"),
        }
    }
}

/// JSON payload for the `score` command.
#[derive(Debug, Serialize)]
struct ScorePayload<'a>
{
    submission: String,
    similarity: u8,
    risk: RiskBand,
    corpus_size: usize,
    closest_match: Option<&'a str>,
}

/// Run the `score` command end-to-end.
pub fn run(
    args: ScoreArgs,
    ctx: &AppContext,
) -> Result<()>
{
    // Load persisted config (best-effort; defaults if missing)
    let cfg = config::load_config().unwrap_or_default();

    let content = read_submission(&args.file)?;

    // CLI wins, else config default corpus directory
    let corpus_dir = args
        .corpus
        .clone()
        .unwrap_or_else(|| cfg.corpus.dir.clone().into());

    let entries = walk::collect_corpus(&corpus_dir, &cfg.corpus.extensions)?;
    let texts: Vec<String> = entries
        .iter()
        .map(|e| e.content.clone())
        .collect();

    let best = best_match(&content, &texts);
    let percent = best
        .map(|(_, score)| score.round() as u8)
        .unwrap_or(0);
    let risk = RiskBand::from_percent(percent);

    let closest = best.and_then(|(idx, score)| {
        // Only attribute a match when there is actual overlap
        if score > 0.0 { entries.get(idx).map(|e| e.name.as_str()) } else { None }
    });

    if args.json
    {
        let payload = ScorePayload {
            submission: args
                .file
                .display()
                .to_string(),
            similarity: percent,
            risk,
            corpus_size: texts.len(),
            closest_match: closest,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);

        return Ok(());
    }

    let label = format!("{percent}%");
    let colored = if ctx.no_color
    {
        label
    }
    else
    {
        match risk
        {
            RiskBand::Low => label
                .green()
                .to_string(),
            RiskBand::Elevated => label
                .yellow()
                .to_string(),
            RiskBand::High => label
                .red()
                .to_string(),
        }
    };

    println!("similarity: {colored} ({risk} risk, corpus of {})", texts.len());

    if !ctx.quiet
        && let Some(name) = closest
    {
        println!("closest match: {name}");
    }

    Ok(())
}
