//! ComposeNewsletterHandler - Builds a sendable issue.
//!
//! Creates or loads the issue, allocates the selected items into slots,
//! renders the HTML body, and persists the result. Composition never
//! touches the messaging provider.

use std::sync::Arc;

use crate::domain::content::{allocate, CategoryLimits};
use crate::domain::foundation::{ContentItemId, NewsletterNumber};
use crate::domain::newsletter::{Newsletter, NewsletterError};
use crate::ports::{ContentCatalog, NewsletterRepository, TemplateRenderer};

/// Command to compose (or re-compose) a newsletter issue.
#[derive(Debug, Clone)]
pub struct ComposeNewsletterCommand {
    /// Issue to re-compose; `None` creates a new issue with the next
    /// number in the sequence.
    pub number: Option<NewsletterNumber>,
    pub header_text: String,
    /// Editorial selection in presentation order.
    pub selected_items: Vec<ContentItemId>,
}

/// Handler composing one newsletter issue.
pub struct ComposeNewsletterHandler {
    repository: Arc<dyn NewsletterRepository>,
    catalog: Arc<dyn ContentCatalog>,
    renderer: Arc<dyn TemplateRenderer>,
    limits: CategoryLimits,
}

impl ComposeNewsletterHandler {
    pub fn new(
        repository: Arc<dyn NewsletterRepository>,
        catalog: Arc<dyn ContentCatalog>,
        renderer: Arc<dyn TemplateRenderer>,
        limits: CategoryLimits,
    ) -> Self {
        Self {
            repository,
            catalog,
            renderer,
            limits,
        }
    }

    pub async fn handle(
        &self,
        cmd: ComposeNewsletterCommand,
    ) -> Result<Newsletter, NewsletterError> {
        let mut newsletter = match cmd.number {
            Some(number) => {
                let mut existing = self
                    .repository
                    .find_by_number(number)
                    .await?
                    .ok_or(NewsletterError::NotFound(number))?;
                existing.update_header(cmd.header_text)?;
                existing
            }
            None => {
                let number = self.repository.next_number().await?;
                Newsletter::new(number, cmd.header_text)?
            }
        };

        newsletter.select_items(cmd.selected_items.clone())?;

        let items = self.catalog.fetch_items(&cmd.selected_items).await?;
        let categorized = allocate(&items, &cmd.selected_items, &self.limits)?;

        let html = self.renderer.render(&newsletter, &categorized).await?;
        newsletter.set_categorized(categorized)?;
        newsletter.set_html(html)?;

        self.repository.save(&newsletter).await?;
        Ok(newsletter)
    }
}
