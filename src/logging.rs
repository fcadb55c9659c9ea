//! Diagnostic logging to stderr

use crate::infrastructure::config::LOG_ENV;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Pick the log filter: UNTAG_LOG wins, otherwise `debug` when verbose and
/// `warn` by default.
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(level)
    })
}

/// Install the global subscriber. Calling this twice is harmless.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
