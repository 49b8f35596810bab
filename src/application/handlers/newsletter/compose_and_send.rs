//! ComposeAndSendHandler - Composes a fresh issue and sends it in one
//! operation.

use std::sync::Arc;

use super::{
    ComposeNewsletterCommand, ComposeNewsletterHandler, SendNewsletterCommand,
    SendNewsletterHandler,
};
use crate::domain::delivery::{DeliveryError, DeliveryResult, RecipientFilter};
use crate::domain::foundation::{ContentItemId, NewsletterNumber, Timestamp};

/// Command composing and sending an issue.
#[derive(Debug, Clone)]
pub struct ComposeAndSendCommand {
    /// Issue to re-compose before sending; `None` creates a new issue.
    pub number: Option<NewsletterNumber>,
    pub header_text: String,
    /// Editorial selection in presentation order.
    pub selected_items: Vec<ContentItemId>,
    pub filter: RecipientFilter,
    /// Future-dated send; `None` sends now.
    pub schedule_at: Option<Timestamp>,
}

/// Handler chaining composition and delivery.
pub struct ComposeAndSendHandler {
    composer: Arc<ComposeNewsletterHandler>,
    sender: Arc<SendNewsletterHandler>,
}

impl ComposeAndSendHandler {
    pub fn new(composer: Arc<ComposeNewsletterHandler>, sender: Arc<SendNewsletterHandler>) -> Self {
        Self { composer, sender }
    }

    /// Composes the issue from the selection (creating it when no
    /// number is given), then delegates to the send orchestration. A
    /// composition failure aborts before any delivery work starts.
    pub async fn handle(&self, cmd: ComposeAndSendCommand) -> Result<DeliveryResult, DeliveryError> {
        let newsletter = self
            .composer
            .handle(ComposeNewsletterCommand {
                number: cmd.number,
                header_text: cmd.header_text,
                selected_items: cmd.selected_items,
            })
            .await?;

        self.sender
            .handle(SendNewsletterCommand {
                number: newsletter.number(),
                filter: cmd.filter,
                schedule_at: cmd.schedule_at,
            })
            .await
    }
}
