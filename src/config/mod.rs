//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `NEWSLETTER_DISPATCH` prefix and nested values use
//! double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use newsletter_dispatch::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Batch size: {}", config.delivery.batch_size);
//! ```

mod delivery;
mod error;
mod provider;

pub use delivery::DeliveryConfig;
pub use error::{ConfigError, ValidationError};
pub use provider::ProviderConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Delivery orchestration configuration (batching, lock, timeouts)
    #[serde(default)]
    pub delivery: DeliveryConfig,

    /// Messaging provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `NEWSLETTER_DISPATCH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `NEWSLETTER_DISPATCH__DELIVERY__BATCH_SIZE=300`
    /// - `NEWSLETTER_DISPATCH__PROVIDER__API_KEY=...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("NEWSLETTER_DISPATCH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.delivery.validate()?;
        self.provider.validate()?;
        Ok(())
    }
}
