//! Delivery statistics value objects.
//!
//! Statistics travel with the Newsletter aggregate and carry per-batch
//! detail, so a caller can distinguish full, partial, and failed sends.

use std::collections::BTreeMap;

use crate::domain::foundation::{CampaignId, Timestamp};
use serde::{Deserialize, Serialize};

/// Outcome state of one submitted batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchState {
    /// Accepted by the provider for immediate delivery.
    Dispatched,
    /// Accepted by the provider for future-dated delivery.
    Scheduled,
    /// Submission failed.
    Failed,
}

/// Recorded outcome of one delivery batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Number of recipients in the batch.
    pub size: usize,
    /// How the submission ended.
    pub state: BatchState,
    /// Provider campaign ID, when submission was accepted.
    pub campaign_id: Option<CampaignId>,
    /// Provider-side delivery time for scheduled batches.
    pub scheduled_for: Option<Timestamp>,
    /// Error text for failed submissions.
    pub error: Option<String>,
}

impl BatchOutcome {
    /// Outcome for a batch accepted for immediate delivery.
    pub fn dispatched(size: usize, campaign_id: CampaignId) -> Self {
        Self {
            size,
            state: BatchState::Dispatched,
            campaign_id: Some(campaign_id),
            scheduled_for: None,
            error: None,
        }
    }

    /// Outcome for a batch accepted for future-dated delivery.
    ///
    /// Provider acceptance of the scheduling request counts as sent;
    /// there is no later reconciliation of actual delivery.
    pub fn scheduled(size: usize, campaign_id: CampaignId, at: Timestamp) -> Self {
        Self {
            size,
            state: BatchState::Scheduled,
            campaign_id: Some(campaign_id),
            scheduled_for: Some(at),
            error: None,
        }
    }

    /// Outcome for a failed batch submission.
    pub fn failed(size: usize, error: impl Into<String>) -> Self {
        Self {
            size,
            state: BatchState::Failed,
            campaign_id: None,
            scheduled_for: None,
            error: Some(error.into()),
        }
    }

    /// Returns true if the provider accepted the batch.
    pub fn is_success(&self) -> bool {
        matches!(self.state, BatchState::Dispatched | BatchState::Scheduled)
    }
}

/// Aggregate delivery statistics for a newsletter issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DeliveryStatistics {
    /// Recipients resolved for the send.
    pub recipient_count: usize,
    /// Recipients in batches the provider accepted.
    pub sent_count: usize,
    /// Recipients in batches whose submission failed.
    pub failed_count: usize,
    /// Overall error text, set when the send as a whole failed.
    pub error: Option<String>,
    /// Per-batch detail, keyed by batch name.
    pub batches: BTreeMap<String, BatchOutcome>,
}

impl DeliveryStatistics {
    /// Creates empty statistics for a resolved recipient set.
    pub fn for_recipients(recipient_count: usize) -> Self {
        Self {
            recipient_count,
            ..Self::default()
        }
    }

    /// Records one batch outcome and updates the counters.
    pub fn record_batch(&mut self, name: impl Into<String>, outcome: BatchOutcome) {
        if outcome.is_success() {
            self.sent_count += outcome.size;
        } else {
            self.failed_count += outcome.size;
        }
        self.batches.insert(name.into(), outcome);
    }

    /// Returns true if at least one batch was accepted by the provider.
    pub fn any_batch_succeeded(&self) -> bool {
        self.batches.values().any(BatchOutcome::is_success)
    }

    /// Returns the latest provider-side delivery time among scheduled batches.
    pub fn latest_scheduled_for(&self) -> Option<Timestamp> {
        self.batches
            .values()
            .filter_map(|outcome| outcome.scheduled_for)
            .max()
    }

    /// Returns the error texts of failed batches, keyed by batch name.
    pub fn batch_errors(&self) -> Vec<(String, String)> {
        self.batches
            .iter()
            .filter_map(|(name, outcome)| {
                outcome
                    .error
                    .as_ref()
                    .map(|error| (name.clone(), error.clone()))
            })
            .collect()
    }

    /// Merges a newer attempt into this record.
    ///
    /// Batch keys from the newer attempt overwrite older ones; counters
    /// are recomputed from the merged batches so prior partial detail is
    /// never lost.
    pub fn merge(&mut self, newer: DeliveryStatistics) {
        if newer.recipient_count > 0 {
            self.recipient_count = newer.recipient_count;
        }
        if newer.error.is_some() {
            self.error = newer.error;
        }
        self.batches.extend(newer.batches);
        self.sent_count = self
            .batches
            .values()
            .filter(|o| o.is_success())
            .map(|o| o.size)
            .sum();
        self.failed_count = self
            .batches
            .values()
            .filter(|o| !o.is_success())
            .map(|o| o.size)
            .sum();
    }
}
