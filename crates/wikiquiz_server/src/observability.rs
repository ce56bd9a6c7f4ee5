//! Structured logging setup.

use crate::LoggingSection;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wikiquiz_error::{ConfigError, WikiQuizResult};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Output is JSON when
/// `json` is set (production deployments force it on).
///
/// # Errors
///
/// Returns a `ConfigError` if the level filter is invalid or a subscriber is
/// already installed.
pub fn init_observability(logging: &LoggingSection, json: bool) -> WikiQuizResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.log_level).map_err(|e| {
            ConfigError::new(format!("Invalid log level '{}': {}", logging.log_level, e))
        })?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json || logging.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    result.map_err(|e| ConfigError::new(format!("Failed to install subscriber: {}", e)).into())
}
