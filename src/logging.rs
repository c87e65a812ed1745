//! # Structured Logging Module
//!
//! Environment-aware tracing initialization for the gate binary and tests.
//! Console output with an `EnvFilter`; production environments switch to
//! JSON lines so pipeline log collectors can parse run reports.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(&environment));

        let registry = tracing_subscriber::registry().with(filter);

        // try_init so an already-installed subscriber (tests, embedding
        // binaries) is not an error
        let result = if environment == "production" {
            registry
                .with(fmt::layer().with_target(true).with_ansi(false).json())
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_ansi(true))
                .try_init()
        };

        if result.is_ok() {
            tracing::debug!(environment = %environment, "Logging initialized");
        }
    });
}

/// Resolve the current environment name
pub fn get_environment() -> String {
    std::env::var("INTEG_GATE_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Default log filter for an environment when RUST_LOG is unset
fn default_filter(environment: &str) -> EnvFilter {
    let level = match environment {
        "production" => "info",
        _ => "debug",
    };
    EnvFilter::new(level)
}
