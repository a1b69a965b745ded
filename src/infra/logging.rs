//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber: env-filtered, human-readable, on stderr
/// so stdout stays clean for command output. Defaults to `warn` when
/// `RUST_LOG` is unset; safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
