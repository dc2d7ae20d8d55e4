//! Tracing subscriber setup.

use qadmin_core::config::LoggingConfig;
use qadmin_core::error::{QadminError, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a global fmt subscriber filtered by `directive`.
///
/// Fails on an unparsable directive or when a global subscriber is already set.
pub fn init_tracing(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| QadminError::config(format!("Invalid log filter '{}': {}", directive, e)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| QadminError::config(format!("Failed to install tracing subscriber: {}", e)))
}

/// [`init_tracing`] with the `[logging]` section of the config.
pub fn init_from_config(config: &LoggingConfig) -> Result<()> {
    init_tracing(&config.level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_directive_is_config_error() {
        let err = init_tracing("qadmin=[[").unwrap_err();
        assert!(matches!(err, QadminError::Config(_)));
    }

    #[test]
    fn test_second_install_fails() {
        // The first install may already have happened in another test
        let _ = init_tracing("debug");
        assert!(init_tracing("info").is_err());
    }
}
