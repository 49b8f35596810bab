//! CancelNewsletterHandler - Withdraws a scheduled issue.

use std::sync::Arc;

use crate::domain::foundation::NewsletterNumber;
use crate::domain::newsletter::{Newsletter, NewsletterError};
use crate::ports::NewsletterRepository;

/// Command cancelling a scheduled issue.
#[derive(Debug, Clone, Copy)]
pub struct CancelNewsletterCommand {
    pub number: NewsletterNumber,
}

/// Handler cancelling one issue.
pub struct CancelNewsletterHandler {
    repository: Arc<dyn NewsletterRepository>,
}

impl CancelNewsletterHandler {
    pub fn new(repository: Arc<dyn NewsletterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CancelNewsletterCommand,
    ) -> Result<Newsletter, NewsletterError> {
        let mut newsletter = self
            .repository
            .find_by_number(cmd.number)
            .await?
            .ok_or(NewsletterError::NotFound(cmd.number))?;

        newsletter.cancel()?;
        self.repository.save(&newsletter).await?;
        Ok(newsletter)
    }
}
