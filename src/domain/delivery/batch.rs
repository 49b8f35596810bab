//! Batch planning for rate-safe delivery.

use crate::domain::foundation::Timestamp;

use super::Recipient;

/// Name of the immediate batch.
pub const BATCH_ONE: &str = "batch1";
/// Name of the deferred batch of a split send.
pub const BATCH_TWO: &str = "batch2";

/// When a batch is handed to the provider for delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchSchedule {
    /// Deliver as soon as the provider accepts the campaign.
    Immediate,
    /// Provider-side future-dated delivery.
    At(Timestamp),
}

impl BatchSchedule {
    /// Returns the scheduled time, if any.
    pub fn at(&self) -> Option<Timestamp> {
        match self {
            BatchSchedule::Immediate => None,
            BatchSchedule::At(ts) => Some(*ts),
        }
    }
}

/// One slice of the recipient set, submitted as a single campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryBatch {
    /// Stable batch name used as the statistics key.
    pub name: &'static str,
    /// Recipients in this batch.
    pub recipients: Vec<Recipient>,
    /// Target delivery time.
    pub schedule: BatchSchedule,
}

impl DeliveryBatch {
    /// Number of recipients in the batch.
    pub fn size(&self) -> usize {
        self.recipients.len()
    }
}

/// Splits a recipient set into rate-safe batches.
///
/// Up to `batch_size` recipients fit one immediate batch. Beyond that,
/// the first `batch_size` go out immediately and the remainder is
/// scheduled for `second_batch_at`. An empty set yields no batches.
pub fn plan_batches(
    recipients: Vec<Recipient>,
    batch_size: usize,
    second_batch_at: Timestamp,
) -> Vec<DeliveryBatch> {
    if recipients.is_empty() {
        return Vec::new();
    }

    if recipients.len() <= batch_size {
        return vec![DeliveryBatch {
            name: BATCH_ONE,
            recipients,
            schedule: BatchSchedule::Immediate,
        }];
    }

    let mut first = recipients;
    let second = first.split_off(batch_size);
    vec![
        DeliveryBatch {
            name: BATCH_ONE,
            recipients: first,
            schedule: BatchSchedule::Immediate,
        },
        DeliveryBatch {
            name: BATCH_TWO,
            recipients: second,
            schedule: BatchSchedule::At(second_batch_at),
        },
    ]
}
