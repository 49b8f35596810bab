//! Delivery module - Batch planning and send results.
//!
//! Ephemeral values used during one send orchestration: the recipient
//! set, the batch plan, and the aggregate result handed back to the
//! caller.

mod recipient;
mod batch;
mod result;
mod errors;

pub use recipient::{Recipient, RecipientFilter};
pub use batch::{plan_batches, BatchSchedule, DeliveryBatch, BATCH_ONE, BATCH_TWO};
pub use result::DeliveryResult;
pub use errors::DeliveryError;
