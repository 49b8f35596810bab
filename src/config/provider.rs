//! Messaging provider configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Messaging provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Provider API key
    pub api_key: String,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Tag attached to campaigns for provider-side reporting
    #[serde(default = "default_campaign_tag")]
    pub campaign_tag: String,
}

impl ProviderConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("PROVIDER_API_KEY"));
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        Ok(())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            campaign_tag: default_campaign_tag(),
        }
    }
}

fn default_from_email() -> String {
    "newsletter@example.org".to_string()
}

fn default_from_name() -> String {
    "Newsletter".to_string()
}

fn default_campaign_tag() -> String {
    "newsletter".to_string()
}
