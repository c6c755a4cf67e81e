//! Logging setup for the gridway signing stack.
//!
//! Library crates log through `tracing` macros only; binaries and test
//! harnesses pick a subscriber here. Log lines never carry key material, so
//! the JSON output is safe to ship to an aggregator.

pub use tracing::{debug, error, info, instrument, trace, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Output format of the global subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Structured JSON, one object per line
    #[default]
    Json,
    /// Human readable, for local development
    Pretty,
}

/// Initialize the global subscriber with JSON output, honouring `RUST_LOG`
/// and defaulting to `info`
pub fn init_tracing() -> InitResult {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    init_with_filter(filter, LogFormat::Json)
}

/// Initialize the global subscriber with an explicit filter directive
pub fn init_tracing_with_level(level: &str, format: LogFormat) -> InitResult {
    init_with_filter(EnvFilter::try_new(level)?, format)
}

/// Initialize tracing for tests; output goes through the test harness writer
/// so it is captured per test. Safe to call more than once.
pub fn init_tracing_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}

fn init_with_filter(filter: EnvFilter, format: LogFormat) -> InitResult {
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .json(),
            )
            .try_init()?,
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(true).pretty())
            .try_init()?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_macros() {
        init_tracing_test();
        info!("Test info message");
        debug!(signers = 3, "Test debug message");
        warn!("Test warning message");
    }

    #[test]
    fn test_init_is_idempotent_for_tests() {
        init_tracing_test();
        init_tracing_test();
    }

    #[test]
    fn test_invalid_level_rejected() {
        assert!(init_tracing_with_level("gridway=verbose", LogFormat::Pretty).is_err());
    }
}
