//! Newsletter module - Aggregate, delivery statistics, and lifecycle.
//!
//! The `Newsletter` aggregate owns the lifecycle state machine; its
//! transition methods are the only place timestamps and statistics are
//! mutated.

mod aggregate;
mod statistics;
mod errors;
mod presentation;

pub use aggregate::{Newsletter, MAX_HEADER_LENGTH};
pub use statistics::{BatchOutcome, BatchState, DeliveryStatistics};
pub use errors::NewsletterError;
pub use presentation::{status_color, status_label};
