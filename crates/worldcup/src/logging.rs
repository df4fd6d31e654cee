//! Log filter for the CLI

use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_LOG_FILTER: &str = "worldcup=info,bracket_core=warn";

/// Build the filter from `RUST_LOG`-style directives, falling back to
/// [`DEFAULT_LOG_FILTER`].
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod logging_tests;
