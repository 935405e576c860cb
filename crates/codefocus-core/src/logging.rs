//! Logging setup.
//!
//! Library code only emits `tracing` events; binaries call [`init`] once.
//! Output goes to stderr so stdout stays clean for JSON.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::storage::LoggingConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this twice
/// is harmless; the second call is ignored.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();

    tracing::debug!(level = %config.level, "logging initialized");
}

/// Initialize logging for tests (captured by the test harness).
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
