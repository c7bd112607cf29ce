//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

/// Filter from `RUST_LOG`, falling back to the verbosity level
#[must_use]
pub fn env_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.log_filter()))
}

/// Installs the global subscriber, logging to stderr.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(config: &CliConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_ansi(config.color.should_color_stderr())
        .with_target(false)
        .try_init();
}
