//! Logging setup for processes hosting the eCloud data sources.
//!
//! Logs are written to **stderr** so that stdout stays free for whatever
//! protocol the host process speaks. Filtering follows `RUST_LOG`.
//!
//! ```bash
//! # Trace every outgoing list query
//! RUST_LOG=ecloud_provider=debug ./my-provider
//! ```

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn stderr_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

/// Initialize the global subscriber at [`DEFAULT_LOG_LEVEL`].
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_logging() {
    init_logging_with_default(DEFAULT_LOG_LEVEL);
}

/// Initialize the global subscriber, using `default_level` when `RUST_LOG`
/// is not set.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_logging_with_default(default_level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(stderr_layer())
        .init();
}

/// Try to initialize logging, returning false if a subscriber already exists.
///
/// Safe to call from tests and from hosts that may set up logging themselves.
pub fn try_init_logging() -> bool {
    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_LOG_LEVEL))
        .with(stderr_layer())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    // The global subscriber can only be set once per process, so only the
    // idempotent entry point is exercised here.

    use super::*;

    #[test]
    fn test_env_filter_parsing() {
        assert!(EnvFilter::try_new("info").is_ok());
        assert!(EnvFilter::try_new("ecloud_provider=debug").is_ok());
        assert!(EnvFilter::try_new("warn,ecloud_provider::resolve=trace").is_ok());
    }

    #[test]
    fn test_try_init_is_idempotent() {
        let _ = try_init_logging();
        assert!(!try_init_logging());
    }
}
