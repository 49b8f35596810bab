//! SendNewsletterHandler - The delivery orchestrator.
//!
//! Decides between a single send and a two-batch split, drives the
//! lifecycle, and folds per-batch provider outcomes into one aggregate
//! result. Batch submissions are sequential and independent: a failure
//! in one never prevents submission of the other.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{DeliveryConfig, ProviderConfig};
use crate::domain::delivery::{
    plan_batches, BatchSchedule, DeliveryBatch, DeliveryError, DeliveryResult, RecipientFilter,
};
use crate::domain::foundation::{DomainError, NewsletterNumber, Timestamp};
use crate::domain::newsletter::{BatchOutcome, DeliveryStatistics, Newsletter, NewsletterError};
use crate::ports::{
    CampaignReceipt, CampaignRequest, MessagingProvider, NewsletterRepository, RecipientDirectory,
    SendLock,
};

/// Command to send (or schedule) a composed newsletter.
#[derive(Debug, Clone)]
pub struct SendNewsletterCommand {
    pub number: NewsletterNumber,
    pub filter: RecipientFilter,
    /// Future-dated send; `None` sends now.
    pub schedule_at: Option<Timestamp>,
}

/// Handler orchestrating one send request.
pub struct SendNewsletterHandler {
    repository: Arc<dyn NewsletterRepository>,
    directory: Arc<dyn RecipientDirectory>,
    provider: Arc<dyn MessagingProvider>,
    lock: Arc<dyn SendLock>,
    delivery: DeliveryConfig,
    provider_config: ProviderConfig,
}

impl SendNewsletterHandler {
    pub fn new(
        repository: Arc<dyn NewsletterRepository>,
        directory: Arc<dyn RecipientDirectory>,
        provider: Arc<dyn MessagingProvider>,
        lock: Arc<dyn SendLock>,
        delivery: DeliveryConfig,
        provider_config: ProviderConfig,
    ) -> Self {
        Self {
            repository,
            directory,
            provider,
            lock,
            delivery,
            provider_config,
        }
    }

    pub async fn handle(
        &self,
        cmd: SendNewsletterCommand,
    ) -> Result<DeliveryResult, DeliveryError> {
        let mut newsletter = self
            .repository
            .find_by_number(cmd.number)
            .await
            .map_err(DeliveryError::from)?
            .ok_or(DeliveryError::Newsletter(NewsletterError::NotFound(
                cmd.number,
            )))?;

        // Composition preconditions hold before any provider call.
        newsletter.ensure_sendable()?;

        let now = Timestamp::now();

        // A scheduled request only records the time; the provider is
        // invoked when the schedule fires.
        if let Some(at) = cmd.schedule_at {
            newsletter.schedule(at, now)?;
            self.repository
                .save(&newsletter)
                .await
                .map_err(DeliveryError::from)?;
            return Ok(DeliveryResult::Scheduled { scheduled_for: at });
        }

        if !self
            .lock
            .acquire(cmd.number, self.delivery.lock_ttl_secs)
            .await
            .map_err(DeliveryError::from)?
        {
            return Err(DeliveryError::AlreadySending(cmd.number));
        }

        let result = self.execute_send(&mut newsletter, &cmd.filter, now).await;

        // The lease is released on every exit path.
        if let Err(err) = self.lock.release(cmd.number).await {
            tracing::warn!(
                newsletter = %cmd.number,
                error = %err,
                "Failed to release send lock"
            );
        }

        result
    }

    async fn execute_send(
        &self,
        newsletter: &mut Newsletter,
        filter: &RecipientFilter,
        now: Timestamp,
    ) -> Result<DeliveryResult, DeliveryError> {
        newsletter.mark_as_sending()?;
        self.repository
            .save(newsletter)
            .await
            .map_err(DeliveryError::from)?;

        let recipients = self
            .directory
            .find_recipients(filter)
            .await
            .map_err(DeliveryError::from)?;

        if recipients.is_empty() {
            newsletter.mark_as_failed(
                DeliveryError::NoRecipients.message(),
                DeliveryStatistics::default(),
            )?;
            self.repository
                .save(newsletter)
                .await
                .map_err(DeliveryError::from)?;
            return Err(DeliveryError::NoRecipients);
        }

        let recipient_count = recipients.len();
        let html = newsletter
            .html_content()
            .ok_or(NewsletterError::NotRendered)?
            .to_string();

        let second_batch_at = now.plus_hours(self.delivery.second_batch_delay_hours);
        let plan = plan_batches(recipients, self.delivery.batch_size, second_batch_at);

        let mut stats = DeliveryStatistics::for_recipients(recipient_count);
        for batch in &plan {
            let outcome = self.submit_batch(newsletter, batch, &html).await;
            if let Some(error) = outcome.error.as_deref() {
                tracing::warn!(
                    newsletter = %newsletter.number(),
                    batch = batch.name,
                    error,
                    "Batch submission failed"
                );
            }
            stats.record_batch(batch.name, outcome);
        }

        if stats.any_batch_succeeded() {
            let sent_count = stats.sent_count;
            newsletter.mark_as_sent(stats, now)?;
            self.repository
                .save(newsletter)
                .await
                .map_err(DeliveryError::from)?;
            Ok(DeliveryResult::Success {
                recipient_count,
                sent_count,
                statistics: newsletter.statistics().clone(),
            })
        } else {
            let errors: Vec<String> = stats
                .batch_errors()
                .into_iter()
                .map(|(name, error)| format!("{}: {}", name, error))
                .collect();
            let combined = errors.join("; ");
            tracing::error!(
                newsletter = %newsletter.number(),
                error = %combined,
                "All batches failed"
            );
            newsletter.mark_as_failed(combined, stats)?;
            self.repository
                .save(newsletter)
                .await
                .map_err(DeliveryError::from)?;
            Ok(DeliveryResult::Failure {
                errors,
                recipient_count,
                sent_count: 0,
            })
        }
    }

    /// Submits one batch; any failure becomes that batch's outcome and
    /// never propagates to the sibling batch.
    async fn submit_batch(
        &self,
        newsletter: &Newsletter,
        batch: &DeliveryBatch,
        html: &str,
    ) -> BatchOutcome {
        match self.try_submit(newsletter, batch, html).await {
            Ok(receipt) => match batch.schedule {
                BatchSchedule::Immediate => {
                    BatchOutcome::dispatched(batch.size(), receipt.campaign_id)
                }
                BatchSchedule::At(at) => {
                    BatchOutcome::scheduled(batch.size(), receipt.campaign_id, at)
                }
            },
            Err(err) => BatchOutcome::failed(batch.size(), err.message()),
        }
    }

    async fn try_submit(
        &self,
        newsletter: &Newsletter,
        batch: &DeliveryBatch,
        html: &str,
    ) -> Result<CampaignReceipt, DeliveryError> {
        let list_name = format!("newsletter-{}-{}", newsletter.number(), batch.name);
        let list_id = self
            .bounded(self.provider.create_distribution_list(&list_name))
            .await?;

        let addresses: Vec<String> = batch
            .recipients
            .iter()
            .map(|recipient| recipient.address.clone())
            .collect();
        self.bounded(self.provider.add_recipients(&list_id, &addresses))
            .await?;

        let request = CampaignRequest {
            list_ids: vec![list_id],
            subject: newsletter.header_text().to_string(),
            html: html.to_string(),
            tag: self.provider_config.campaign_tag.clone(),
            scheduled_at: batch.schedule.at(),
        };
        self.bounded(self.provider.create_and_send_campaign(&request))
            .await
    }

    /// Bounds one provider call by the configured timeout. A timeout is
    /// a batch failure, not a crash.
    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, DomainError>>,
    ) -> Result<T, DeliveryError> {
        let secs = self.delivery.provider_timeout_secs;
        match tokio::time::timeout(Duration::from_secs(secs), call).await {
            Ok(result) => result.map_err(DeliveryError::from),
            Err(_) => Err(DeliveryError::Timeout { secs }),
        }
    }
}
