//! Tracing setup for hosts embedding the tab
//!
//! `RUST_LOG` takes precedence over the configured level. Output goes to
//! stderr in compact format.

use rulebooks_config::LoggingConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber
///
/// Returns `false` when a subscriber was already installed; the existing one
/// is kept.
pub fn init_tracing(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .is_ok()
}

/// Install the global subscriber at the configured level
pub fn init_from_config(config: &LoggingConfig) -> bool {
    init_tracing(&config.level)
}
