use anyhow::Result;
use clap::Parser;
use draftcheck::cli::{AppContext, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    draftcheck::infra::logging::init();

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
    };

    match cli.command {
        Commands::Score(args) => draftcheck::score_run(args, &ctx),
        Commands::Feedback(args) => draftcheck::feedback_run(args, &ctx),
        Commands::Evaluate(args) => draftcheck::evaluate_run(args, &ctx),
        Commands::Init(args) => draftcheck::infra::config::init(args, &ctx),
        Commands::Completions(args) => draftcheck::completion::run(args),
    }
}
