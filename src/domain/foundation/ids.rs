//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Numeric sequence number identifying a newsletter issue.
///
/// Numbers are unique and assigned monotonically by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewsletterNumber(u64);

impl NewsletterNumber {
    /// Creates a newsletter number from a raw sequence value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw sequence value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the number following this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for NewsletterNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NewsletterNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("newsletter_number", e.to_string()))
    }
}

/// Unique identifier for a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentItemId(Uuid);

impl ContentItemId {
    /// Creates a new random ContentItemId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a ContentItemId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ContentItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContentItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContentItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Provider-assigned identifier for a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(String);

impl CampaignId {
    /// Creates a campaign ID from a provider-assigned value.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the value is empty
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("campaign_id"));
        }
        Ok(Self(value))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Provider-assigned identifier for a distribution list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistributionListId(String);

impl DistributionListId {
    /// Creates a distribution list ID from a provider-assigned value.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the value is empty
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("distribution_list_id"));
        }
        Ok(Self(value))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DistributionListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newsletter_number_next_increments() {
        let n = NewsletterNumber::new(41);
        assert_eq!(n.next(), NewsletterNumber::new(42));
    }

    #[test]
    fn newsletter_number_parses_from_string() {
        let n: NewsletterNumber = "17".parse().unwrap();
        assert_eq!(n.value(), 17);
    }

    #[test]
    fn newsletter_number_rejects_non_numeric() {
        let result = "seventeen".parse::<NewsletterNumber>();
        assert!(result.is_err());
    }

    #[test]
    fn content_item_ids_are_unique() {
        assert_ne!(ContentItemId::new(), ContentItemId::new());
    }

    #[test]
    fn content_item_id_round_trips_through_string() {
        let id = ContentItemId::new();
        let parsed: ContentItemId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn campaign_id_rejects_empty() {
        assert!(CampaignId::new("").is_err());
        assert!(CampaignId::new("   ").is_err());
    }

    #[test]
    fn campaign_id_preserves_value() {
        let id = CampaignId::new("cmp-123").unwrap();
        assert_eq!(id.as_str(), "cmp-123");
    }

    #[test]
    fn distribution_list_id_rejects_empty() {
        assert!(DistributionListId::new("").is_err());
    }
}
