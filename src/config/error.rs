//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Batch size must be greater than zero")]
    InvalidBatchSize,

    #[error("Second batch delay must be greater than zero")]
    InvalidBatchDelay,

    #[error("Send lock TTL must be greater than zero")]
    InvalidLockTtl,

    #[error("Provider timeout must be greater than zero")]
    InvalidProviderTimeout,

    #[error("Invalid from email address")]
    InvalidFromEmail,
}
