//! In-memory recipient directory.

use crate::domain::delivery::{Recipient, RecipientFilter};
use crate::domain::foundation::DomainError;
use crate::ports::RecipientDirectory;
use async_trait::async_trait;

/// Fixed recipient roster with filter support.
#[derive(Default)]
pub struct InMemoryRecipientDirectory {
    recipients: Vec<Recipient>,
}

impl InMemoryRecipientDirectory {
    pub fn new(recipients: Vec<Recipient>) -> Self {
        Self { recipients }
    }
}

#[async_trait]
impl RecipientDirectory for InMemoryRecipientDirectory {
    async fn find_recipients(
        &self,
        filter: &RecipientFilter,
    ) -> Result<Vec<Recipient>, DomainError> {
        let mut matched: Vec<Recipient> = self
            .recipients
            .iter()
            .filter(|recipient| {
                filter
                    .group
                    .as_deref()
                    .map_or(true, |group| recipient.group == group)
            })
            .cloned()
            .collect();
        if let Some(cap) = filter.cap {
            matched.truncate(cap);
        }
        Ok(matched)
    }
}
