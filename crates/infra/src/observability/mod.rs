//! Logging setup
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` takes precedence
//! over the configured filter.

use freehold_domain::{FreeholdError, LoggingConfig, Result};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` when set, otherwise `config.filter`.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.filter).map_err(|e| {
        FreeholdError::Config(format!("Invalid log filter '{}': {e}", config.filter))
    })
}

/// Install the global subscriber.
///
/// # Errors
/// Returns `FreeholdError::Config` for an invalid filter, or
/// `FreeholdError::Internal` if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry.with(fmt::layer().json().with_target(true).with_current_span(false)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    installed.map_err(|e| FreeholdError::Internal(format!("Failed to install logger: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig { filter: "info,freehold=loudest".to_string(), json: false };
        assert!(matches!(env_filter(&config), Err(FreeholdError::Config(_))));
    }
}
