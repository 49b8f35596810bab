//! Aggregate result of one send request.

use crate::domain::foundation::Timestamp;
use crate::domain::newsletter::DeliveryStatistics;
use serde::{Deserialize, Serialize};

/// Tagged outcome handed back to the caller of a send request.
///
/// Partial split-send success (one batch accepted, one failed) is still
/// `Success`; the per-batch detail in `statistics` lets the caller
/// distinguish it from a full success and retry only what failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeliveryResult {
    /// At least one batch was accepted by the provider.
    Success {
        recipient_count: usize,
        sent_count: usize,
        statistics: DeliveryStatistics,
    },
    /// The send was deferred: the newsletter is now Scheduled and no
    /// provider call was made.
    Scheduled { scheduled_for: Timestamp },
    /// Every batch failed.
    Failure {
        errors: Vec<String>,
        recipient_count: usize,
        sent_count: usize,
    },
}

impl DeliveryResult {
    /// Returns true for full or partial success.
    pub fn is_success(&self) -> bool {
        matches!(self, DeliveryResult::Success { .. })
    }

    /// Returns the number of recipients the provider accepted.
    pub fn sent_count(&self) -> usize {
        match self {
            DeliveryResult::Success { sent_count, .. }
            | DeliveryResult::Failure { sent_count, .. } => *sent_count,
            DeliveryResult::Scheduled { .. } => 0,
        }
    }
}
