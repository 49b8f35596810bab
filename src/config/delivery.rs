//! Delivery configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Delivery orchestration configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryConfig {
    /// Maximum recipients per provider campaign
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Hours between the immediate batch and the deferred batch
    #[serde(default = "default_second_batch_delay")]
    pub second_batch_delay_hours: i64,

    /// Send lock lease duration in seconds
    #[serde(default = "default_lock_ttl")]
    pub lock_ttl_secs: u64,

    /// Upper bound on each provider call in seconds
    #[serde(default = "default_provider_timeout")]
    pub provider_timeout_secs: u64,
}

impl DeliveryConfig {
    /// Validate delivery configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.batch_size == 0 {
            return Err(ValidationError::InvalidBatchSize);
        }
        if self.second_batch_delay_hours <= 0 {
            return Err(ValidationError::InvalidBatchDelay);
        }
        if self.lock_ttl_secs == 0 {
            return Err(ValidationError::InvalidLockTtl);
        }
        if self.provider_timeout_secs == 0 {
            return Err(ValidationError::InvalidProviderTimeout);
        }
        Ok(())
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            second_batch_delay_hours: default_second_batch_delay(),
            lock_ttl_secs: default_lock_ttl(),
            provider_timeout_secs: default_provider_timeout(),
        }
    }
}

fn default_batch_size() -> usize {
    300
}

fn default_second_batch_delay() -> i64 {
    24
}

fn default_lock_ttl() -> u64 {
    900
}

fn default_provider_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_rate_safe() {
        let config = DeliveryConfig::default();
        assert_eq!(config.batch_size, 300);
        assert_eq!(config.second_batch_delay_hours, 24);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let config = DeliveryConfig {
            batch_size: 0,
            ..DeliveryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBatchSize)
        ));
    }

    #[test]
    fn zero_lock_ttl_is_rejected() {
        let config = DeliveryConfig {
            lock_ttl_secs: 0,
            ..DeliveryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLockTtl)
        ));
    }
}
