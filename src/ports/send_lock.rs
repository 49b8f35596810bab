//! Send lock port - per-newsletter mutual exclusion.
//!
//! At most one send orchestration may run per newsletter number. The
//! lock is a lease: acquisition carries a TTL so a crashed orchestration
//! cannot wedge the newsletter forever.

use crate::domain::foundation::{DomainError, NewsletterNumber};
use async_trait::async_trait;

/// Lease-based lock keyed by newsletter number.
///
/// The send handler acquires before transitioning to Sending and
/// releases on every exit path; a failed acquisition surfaces as
/// `AlreadySending` to the caller.
#[async_trait]
pub trait SendLock: Send + Sync {
    /// Try to acquire the lease.
    ///
    /// Returns false if another holder has a live lease.
    async fn acquire(
        &self,
        number: NewsletterNumber,
        ttl_secs: u64,
    ) -> Result<bool, DomainError>;

    /// Release the lease. Releasing an expired or absent lease is a no-op.
    async fn release(&self, number: NewsletterNumber) -> Result<(), DomainError>;
}
