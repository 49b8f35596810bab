//! Messaging provider port.
//!
//! Client contract for the external email campaign provider. The
//! provider does not confirm per-recipient delivery synchronously;
//! accepting a campaign (immediate or scheduled) is the success signal.

use crate::domain::foundation::{CampaignId, DistributionListId, DomainError, Timestamp};
use async_trait::async_trait;

/// Request to create and send (or schedule) one campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignRequest {
    /// Distribution lists to address.
    pub list_ids: Vec<DistributionListId>,
    /// Subject line.
    pub subject: String,
    /// Rendered HTML body.
    pub html: String,
    /// Provider-side tag for reporting.
    pub tag: String,
    /// Future-dated delivery time; `None` sends immediately.
    pub scheduled_at: Option<Timestamp>,
}

/// Provider acknowledgement of an accepted campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignReceipt {
    /// Provider-assigned campaign ID.
    pub campaign_id: CampaignId,
}

/// Client port for the campaign provider.
#[async_trait]
pub trait MessagingProvider: Send + Sync {
    /// Create a named distribution list.
    ///
    /// # Errors
    ///
    /// - `ProviderError` if the provider rejects the request
    async fn create_distribution_list(
        &self,
        name: &str,
    ) -> Result<DistributionListId, DomainError>;

    /// Add recipient addresses to a distribution list.
    async fn add_recipients(
        &self,
        list_id: &DistributionListId,
        addresses: &[String],
    ) -> Result<(), DomainError>;

    /// Create a campaign and submit it for delivery.
    ///
    /// A request with `scheduled_at` set is accepted now and delivered
    /// by the provider at that time, out of process.
    async fn create_and_send_campaign(
        &self,
        request: &CampaignRequest,
    ) -> Result<CampaignReceipt, DomainError>;
}
