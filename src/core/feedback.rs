//! Feedback orchestration: remote generative path with a rule-based fallback.
//!
//! The remote service is modeled as an injected `TextGenerator` capability
//! (prompt in, text out, fallible) so the fallback logic is testable without
//! a live network. Two outcomes only: the remote completion, or the
//! heuristic classifier's message. The caller never sees a remote failure;
//! it is logged and absorbed.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::{AppContext, FeedbackArgs};
use crate::core::evaluate::read_submission;
use crate::core::heuristic;
use crate::infra::config::{self, Config};
use crate::infra::remote::GeminiClient;

/// Instructional prompt wrapped around the submission for the remote call.
const PROMPT_TEMPLATE: &str = "You are an academic assignment evaluator.
Analyze the following student assignment and give exactly 2 lines of constructive feedback.
Be specific, professional, and helpful.

Assignment:
{text}

Feedback (2 lines only):";

/// Render the fixed prompt with the submission embedded verbatim.
pub fn render_prompt(text: &str) -> String {
    PROMPT_TEMPLATE.replace("{text}", text)
}

/// Failure of the external generative call.
///
/// Every variant resolves to the fallback path; none of them propagate out
/// of `FeedbackEngine::generate`.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// Endpoint answered with a non-success status
    #[error("remote endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response parsed but carried no usable completion text
    #[error("remote response contained no completion text")]
    EmptyCompletion,

    /// Transport-level failure (connect, timeout, decode)
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Injected generative capability: one prompt in, one completion out.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, RemoteError>;
}

/// Where a piece of feedback came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackSource {
    /// Remote generative service
    Remote,
    /// Heuristic classifier fallback
    RuleBased,
}

/// Feedback text with its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct Feedback {
    pub text: String,
    pub source: FeedbackSource,
}

/// Orchestrates the remote attempt and the fallback.
///
/// Holds no other state; each `generate` call is independent.
pub struct FeedbackEngine {
    remote: Option<Box<dyn TextGenerator + Send + Sync>>,
}

impl FeedbackEngine {
    /// Engine with no remote capability; every call takes the fallback path.
    pub fn heuristic_only() -> Self {
        Self { remote: None }
    }

    /// Engine that attempts `client` first.
    pub fn with_remote(client: Box<dyn TextGenerator + Send + Sync>) -> Self {
        Self {
            remote: Some(client),
        }
    }

    /// Wire the engine from configuration.
    ///
    /// A missing credential is a routing decision, not an error: the engine
    /// comes up heuristic-only. A client that fails to construct degrades
    /// the same way, with the cause logged.
    pub fn from_config(cfg: &Config) -> Self {
        let Some(api_key) = cfg.remote.api_key.clone() else {
            debug!("no remote credential configured; feedback is rule-based");
            return Self::heuristic_only();
        };

        match GeminiClient::new(&cfg.remote, api_key) {
            Ok(client) => Self::with_remote(Box::new(client)),
            Err(err) => {
                warn!(error = %err, "remote client unavailable; feedback is rule-based");
                Self::heuristic_only()
            }
        }
    }

    /// Produce feedback for a submission. Never fails.
    ///
    /// One remote attempt at most; any failure falls back to the classifier
    /// immediately. No retries, no caching.
    pub fn generate(&self, text: &str) -> Feedback {
        let Some(client) = self.remote.as_ref() else {
            return Self::fallback(text);
        };

        match client.generate(&render_prompt(text)) {
            Ok(completion) => Feedback {
                text: completion,
                source: FeedbackSource::Remote,
            },
            Err(err) => {
                warn!(error = %err, "remote feedback failed; falling back to rule-based");
                Self::fallback(text)
            }
        }
    }

    fn fallback(text: &str) -> Feedback {
        Feedback {
            text: heuristic::feedback_text(text).to_string(),
            source: FeedbackSource::RuleBased,
        }
    }
}

/// Run the `feedback` command end-to-end.
pub fn run(args: FeedbackArgs, _ctx: &AppContext) -> Result<()> {
    let cfg = config::load_config().unwrap_or_default();

    let content = read_submission(&args.file)?;

    let engine = FeedbackEngine::from_config(&cfg);
    let feedback = engine.generate(&content);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&feedback)?);
    } else {
        println!("{}", feedback.text);
    }

    Ok(())
}
