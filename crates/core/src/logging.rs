//! Structured logging infrastructure for CryptoGate.
//!
//! Log level can be configured via the `RUST_LOG` environment variable and
//! defaults to `info`. The output format is chosen by the `[server]
//! log_format` setting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;

const DEFAULT_DIRECTIVES: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Initialize the logging system with human-readable output.
///
/// # Example
/// ```no_run
/// use cryptogate_core::logging;
///
/// logging::init();
/// tracing::info!("Application started");
/// ```
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .init();
}

/// Initialize the logging system with JSON output for production environments.
///
/// # Example
/// ```no_run
/// use cryptogate_core::logging;
///
/// logging::init_json();
/// tracing::info!(service = "crypto-gateway", "Service started");
/// ```
pub fn init_json() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().json().with_target(true).with_thread_ids(true))
        .init();
}

/// Initialize logging in the configured format.
pub fn init_with_format(format: LogFormat) {
    match format {
        LogFormat::Pretty => init(),
        LogFormat::Json => init_json(),
    }
}

/// Installs a test-writer subscriber; repeated calls are no-ops.
pub fn init_for_tests() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_test_writer())
        .try_init();
}
