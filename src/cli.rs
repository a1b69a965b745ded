use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
}

#[derive(Parser)]
#[command(name = "draftcheck")]
#[command(
    about = "Evaluate text submissions: originality scoring against a corpus plus AI feedback with a rule-based fallback"
)]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress progress indicators and non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a submission's similarity against a corpus of prior submissions
    Score(ScoreArgs),

    /// Generate feedback for a submission (remote when configured, rule-based otherwise)
    Feedback(FeedbackArgs),

    /// Full evaluation: similarity score plus feedback in one report
    Evaluate(EvaluateArgs),

    /// Initialize a draftcheck.toml config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// Submission file to score
    pub file: PathBuf,

    /// Corpus directory of prior submissions (defaults to config)
    #[arg(short, long)]
    pub corpus: Option<PathBuf>,

    /// Emit machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct FeedbackArgs {
    /// Submission file to review
    pub file: PathBuf,

    /// Emit machine-readable JSON (includes feedback provenance)
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct EvaluateArgs {
    /// Submission file to evaluate
    pub file: PathBuf,

    /// Corpus directory of prior submissions (defaults to config)
    #[arg(short, long)]
    pub corpus: Option<PathBuf>,

    /// Emit machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to place the config file in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Directory to write the completion file into
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Write the completion script to stdout instead
    #[arg(long)]
    pub stdout: bool,
}
