//! In-memory send lock.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::domain::foundation::{DomainError, NewsletterNumber};
use crate::ports::SendLock;
use async_trait::async_trait;

/// Process-local lease table keyed by newsletter number.
///
/// Expired leases are treated as free and overwritten on the next
/// acquisition, so a crashed holder never wedges the newsletter past
/// its TTL.
#[derive(Default)]
pub struct InMemorySendLock {
    leases: Mutex<HashMap<NewsletterNumber, Instant>>,
}

impl InMemorySendLock {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SendLock for InMemorySendLock {
    async fn acquire(
        &self,
        number: NewsletterNumber,
        ttl_secs: u64,
    ) -> Result<bool, DomainError> {
        let mut leases = self.leases.lock().unwrap();
        let now = Instant::now();
        if let Some(deadline) = leases.get(&number) {
            if *deadline > now {
                return Ok(false);
            }
        }
        leases.insert(number, now + Duration::from_secs(ttl_secs));
        Ok(true)
    }

    async fn release(&self, number: NewsletterNumber) -> Result<(), DomainError> {
        self.leases.lock().unwrap().remove(&number);
        Ok(())
    }
}
