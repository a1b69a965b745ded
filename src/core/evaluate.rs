//! Combined evaluation command.
//!
//! Composes the two independent engine results - similarity against the
//! corpus, feedback from the orchestrator - into one report. The engine
//! persists nothing; the report is printed (JSON or human) and discarded.

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::{AppContext, EvaluateArgs};
use crate::core::feedback::{Feedback, FeedbackEngine};
use crate::core::heuristic::StructureSignals;
use crate::core::similarity::{RiskBand, best_match};
use crate::infra::{config, walk};

/// Submissions shorter than this (after trimming) are rejected up front.
const MIN_CONTENT_LEN: usize = 10;

/// Read a submission file and validate it is substantial enough to evaluate.
pub fn read_submission(path: &Path) -> Result<String>
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read submission: {}", path.display()))?;

    if content
        .trim()
        .chars()
        .count()
        < MIN_CONTENT_LEN
    {
        bail!("Submission content is too short (minimum {MIN_CONTENT_LEN} characters)");
    }

    Ok(content)
}

/// Everything the evaluation produced for one submission.
#[derive(Debug, Serialize)]
pub struct EvaluationReport
{
    /// Submission file name
    pub submission: String,

    /// Whitespace word count of the submission
    pub word_count: usize,

    /// Maximum pairwise similarity against the corpus, in percent
    pub similarity: u8,

    /// Presentation band over the similarity percentage
    pub risk: RiskBand,

    /// Corpus entry behind the maximum, when there was any overlap
    pub closest_match: Option<String>,

    /// Number of corpus entries compared
    pub corpus_size: usize,

    /// Feedback text with provenance
    pub feedback: Feedback,

    /// When this evaluation ran
    pub evaluated_at: DateTime<Utc>,
}

/// Run the `evaluate` command end-to-end.
pub fn run(
    args: EvaluateArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let cfg = config::load_config().unwrap_or_default();

    let content = read_submission(&args.file)?;

    let corpus_dir = args
        .corpus
        .clone()
        .unwrap_or_else(|| cfg.corpus.dir.clone().into());

    let entries = walk::collect_corpus(&corpus_dir, &cfg.corpus.extensions)?;
    let texts: Vec<String> = entries
        .iter()
        .map(|e| e.content.clone())
        .collect();

    // Spinner while the corpus fan-out runs (hidden in --quiet and --json)
    let pb = if ctx.quiet || args.json
    {
        ProgressBar::hidden()
    }
    else
    {
        let pb = ProgressBar::new_spinner();
        pb.set_message(format!("scoring against {} corpus entries", texts.len()));
        pb
    };

    let best = best_match(&content, &texts);
    pb.finish_and_clear();

    let similarity = best
        .map(|(_, score)| score.round() as u8)
        .unwrap_or(0);
    let risk = RiskBand::from_percent(similarity);
    let closest_match = best.and_then(|(idx, score)| {
        if score > 0.0
        {
            entries
                .get(idx)
                .map(|e| e.name.clone())
        }
        else
        {
            None
        }
    });

    let engine = FeedbackEngine::from_config(&cfg);
    let feedback = engine.generate(&content);

    let report = EvaluationReport {
        submission: args
            .file
            .display()
            .to_string(),
        word_count: StructureSignals::extract(&content).word_count,
        similarity,
        risk,
        closest_match,
        corpus_size: texts.len(),
        feedback,
        evaluated_at: Utc::now(),
    };

    if args.json
    {
        println!("{}", serde_json::to_string_pretty(&report)?);

        return Ok(());
    }

    print_report(&report, ctx);

    Ok(())
}

/// Human-readable report rendering.
fn print_report(
    report: &EvaluationReport,
    ctx: &AppContext,
)
{
    let percent = format!("{}%", report.similarity);
    let colored = if ctx.no_color
    {
        percent
    }
    else
    {
        match report.risk
        {
            RiskBand::Low => percent
                .green()
                .to_string(),
            RiskBand::Elevated => percent
                .yellow()
                .to_string(),
            RiskBand::High => percent
                .red()
                .to_string(),
        }
    };

    let header = if ctx.no_color
    {
        report
            .submission
            .clone()
    }
    else
    {
        report
            .submission
            .bold()
            .to_string()
    };

    println!("{header} ({} words)", report.word_count);
    println!(
        "similarity: {colored} ({} risk, corpus of {})",
        report.risk, report.corpus_size
    );

    if let Some(name) = report
        .closest_match
        .as_deref()
    {
        println!("closest match: {name}");
    }

    let source = match report
        .feedback
        .source
    {
        crate::core::feedback::FeedbackSource::Remote => "remote",
        crate::core::feedback::FeedbackSource::RuleBased => "rule-based",
    };

    println!();
    println!("feedback ({source}):");
    println!("{}", report.feedback.text);

    if !ctx.quiet && report.risk == RiskBand::High
    {
        let notice = "high overlap with a prior submission; review before accepting";

        println!();
        if ctx.no_color
        {
            println!("{notice}");
        }
        else
        {
            println!("{}", notice.red());
        }
    }
}
