//! **draftcheck** - Evaluation engine for text submissions
//!
//! Originality scoring (set-membership Jaccard against a corpus of prior
//! submissions) plus feedback generation with a remote generative primary
//! path and a deterministic rule-based fallback. The engine is pure and
//! stateless; the CLI supplies files and prints reports.

/// Command-line interface with clap integration
pub mod cli;

/// Shell completion generation
pub mod completion;

/// Evaluation engine - scoring, classification, and orchestration
pub mod core {
    /// Token-set normalization (lowercase, `\W+` split, noise filter)
    pub mod tokenize;
    pub use tokenize::token_set;

    /// Jaccard similarity scoring and risk banding
    pub mod similarity;
    pub use similarity::{RiskBand, best_match, max_similarity, pairwise, run as score_run};

    /// Rule-based feedback classifier (fixed decision table)
    pub mod heuristic;
    pub use heuristic::{StructureSignals, Verdict, classify, feedback_text};

    /// Feedback orchestration - remote primary, heuristic fallback
    pub mod feedback;
    pub use feedback::{
        Feedback, FeedbackEngine, FeedbackSource, RemoteError, TextGenerator,
        run as feedback_run,
    };

    /// Combined evaluation command and report assembly
    pub mod evaluate;
    pub use evaluate::{EvaluationReport, run as evaluate_run};
}

/// Infrastructure - configuration, corpus IO, remote client, logging
pub mod infra {
    /// Configuration management with TOML support and env layering
    pub mod config;
    pub use config::{Config, init as config_init, load_config};

    /// Tracing subscriber setup
    pub mod logging;

    /// Blocking client for the remote generative endpoint
    pub mod remote;
    pub use remote::GeminiClient;

    /// Deterministic corpus loading from a directory
    pub mod walk;
    pub use walk::{CorpusEntry, collect_corpus};
}

// Strategic re-exports for clean CLI interface
pub use cli::{AppContext, Cli, Commands};
pub use core::{evaluate_run, feedback_run, score_run};
pub use infra::{Config, load_config};

// Core types for external consumers
pub use core::feedback::{Feedback, FeedbackEngine, FeedbackSource, TextGenerator};
pub use core::heuristic::{Verdict, classify};
pub use core::similarity::{RiskBand, max_similarity, pairwise};
pub use core::tokenize::token_set;
