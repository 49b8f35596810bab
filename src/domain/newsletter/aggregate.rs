//! Newsletter aggregate entity.
//!
//! The aggregate root for one newsletter issue. It owns the selection
//! order, the categorized content, the rendered HTML, and the lifecycle
//! status. Transition methods are the only place timestamps and
//! statistics are mutated.
//!
//! # Ownership
//!
//! Newsletters reference content items by ID but do NOT own them.
//! Items live in the content catalog.

use crate::domain::content::CategorizedContent;
use crate::domain::foundation::{
    ContentItemId, NewsletterNumber, NewsletterStatus, StateMachine, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

use super::{DeliveryStatistics, NewsletterError};

/// Maximum length for the header text.
pub const MAX_HEADER_LENGTH: usize = 500;

/// Newsletter aggregate - one issue of the editorial newsletter.
///
/// # Invariants
///
/// - `number` is unique and assigned monotonically by the repository
/// - `header_text` is 1-500 characters, non-empty
/// - `categorized` is non-empty only after successful allocation
/// - `html_content` is non-empty only after successful rendering
/// - both must hold before a send is permitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Newsletter {
    /// Sequence number identifying this issue.
    number: NewsletterNumber,

    /// Header text shown at the top of the issue.
    header_text: String,

    /// Selected item IDs in selection order (order is meaningful).
    selected_items: Vec<ContentItemId>,

    /// Categorized content, present after successful allocation.
    categorized: Option<CategorizedContent>,

    /// Rendered HTML, present after successful rendering.
    html_content: Option<String>,

    /// Current lifecycle status.
    status: NewsletterStatus,

    /// Requested future delivery time, if any.
    scheduled_at: Option<Timestamp>,

    /// When the issue was sent.
    sent_at: Option<Timestamp>,

    /// Delivery statistics, mutated only by transitions.
    statistics: DeliveryStatistics,

    /// When the issue was created.
    created_at: Timestamp,

    /// When the issue was last updated.
    updated_at: Timestamp,
}

impl Newsletter {
    /// Creates a new draft issue.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the header text is empty or too long
    pub fn new(number: NewsletterNumber, header_text: String) -> Result<Self, NewsletterError> {
        Self::validate_header(&header_text)?;

        let now = Timestamp::now();
        Ok(Self {
            number,
            header_text,
            selected_items: Vec::new(),
            categorized: None,
            html_content: None,
            status: NewsletterStatus::Draft,
            scheduled_at: None,
            sent_at: None,
            statistics: DeliveryStatistics::default(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute an issue from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        number: NewsletterNumber,
        header_text: String,
        selected_items: Vec<ContentItemId>,
        categorized: Option<CategorizedContent>,
        html_content: Option<String>,
        status: NewsletterStatus,
        scheduled_at: Option<Timestamp>,
        sent_at: Option<Timestamp>,
        statistics: DeliveryStatistics,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            number,
            header_text,
            selected_items,
            categorized,
            html_content,
            status,
            scheduled_at,
            sent_at,
            statistics,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn number(&self) -> NewsletterNumber {
        self.number
    }

    pub fn header_text(&self) -> &str {
        &self.header_text
    }

    pub fn selected_items(&self) -> &[ContentItemId] {
        &self.selected_items
    }

    pub fn categorized(&self) -> Option<&CategorizedContent> {
        self.categorized.as_ref()
    }

    pub fn html_content(&self) -> Option<&str> {
        self.html_content.as_deref()
    }

    pub fn status(&self) -> NewsletterStatus {
        self.status
    }

    pub fn scheduled_at(&self) -> Option<&Timestamp> {
        self.scheduled_at.as_ref()
    }

    pub fn sent_at(&self) -> Option<&Timestamp> {
        self.sent_at.as_ref()
    }

    pub fn statistics(&self) -> &DeliveryStatistics {
        &self.statistics
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Composition (editable states only)
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the header text.
    ///
    /// # Errors
    ///
    /// - `NotEditable` if the issue is not editable
    /// - `ValidationFailed` if the text is empty or too long
    pub fn update_header(&mut self, header_text: String) -> Result<(), NewsletterError> {
        self.ensure_editable()?;
        Self::validate_header(&header_text)?;

        self.header_text = header_text;
        self.touch();
        Ok(())
    }

    /// Replace the selected items.
    ///
    /// Invalidates any previous allocation and rendering, since both
    /// derive from the selection.
    ///
    /// # Errors
    ///
    /// - `NotEditable` if the issue is not editable
    /// - `ValidationFailed` if the selection is empty
    pub fn select_items(&mut self, items: Vec<ContentItemId>) -> Result<(), NewsletterError> {
        self.ensure_editable()?;
        if items.is_empty() {
            return Err(NewsletterError::validation(
                "selected_items",
                "Selection cannot be empty",
            ));
        }

        self.selected_items = items;
        self.categorized = None;
        self.html_content = None;
        self.touch();
        Ok(())
    }

    /// Record the result of a successful allocation.
    ///
    /// # Errors
    ///
    /// - `NotEditable` if the issue is not editable
    pub fn set_categorized(&mut self, categorized: CategorizedContent) -> Result<(), NewsletterError> {
        self.ensure_editable()?;

        self.categorized = Some(categorized);
        self.touch();
        Ok(())
    }

    /// Record the rendered HTML body.
    ///
    /// # Errors
    ///
    /// - `NotEditable` if the issue is not editable
    /// - `ValidationFailed` if the HTML is empty
    pub fn set_html(&mut self, html: String) -> Result<(), NewsletterError> {
        self.ensure_editable()?;
        if html.trim().is_empty() {
            return Err(NewsletterError::validation(
                "html_content",
                "Rendered HTML cannot be empty",
            ));
        }

        self.html_content = Some(html);
        self.touch();
        Ok(())
    }

    /// Validates the send preconditions: categorized content and
    /// rendered HTML must both be present.
    ///
    /// # Errors
    ///
    /// - `NotCategorized` / `NotRendered` if either is missing
    pub fn ensure_sendable(&self) -> Result<(), NewsletterError> {
        match self.categorized {
            Some(ref categorized) if !categorized.is_empty() => {}
            _ => return Err(NewsletterError::NotCategorized),
        }
        match self.html_content {
            Some(ref html) if !html.trim().is_empty() => Ok(()),
            _ => Err(NewsletterError::NotRendered),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Schedule the issue for a future-dated send.
    ///
    /// Rescheduling an already scheduled issue updates the time without
    /// a state change.
    ///
    /// # Errors
    ///
    /// - `InvalidScheduleTime` if `at` is not strictly after `now`
    ///   (checked regardless of state)
    /// - `IllegalTransition` if the issue is not editable
    pub fn schedule(&mut self, at: Timestamp, now: Timestamp) -> Result<(), NewsletterError> {
        if !at.is_after(&now) {
            return Err(NewsletterError::InvalidScheduleTime { requested: at });
        }
        if !self.status.can_edit() {
            return Err(NewsletterError::illegal_transition(
                self.status,
                NewsletterStatus::Scheduled,
            ));
        }

        if self.status != NewsletterStatus::Scheduled {
            self.transition(NewsletterStatus::Scheduled)?;
        }
        self.scheduled_at = Some(at);
        self.touch();
        Ok(())
    }

    /// Begin a send orchestration.
    ///
    /// The send guard is re-checked here, at call time.
    ///
    /// # Errors
    ///
    /// - `IllegalTransition` if a send is not allowed from the current state
    pub fn mark_as_sending(&mut self) -> Result<(), NewsletterError> {
        self.transition(NewsletterStatus::Sending)
    }

    /// Record a successful send.
    ///
    /// Merges the attempt's statistics and derives `scheduled_at` from
    /// the latest scheduled batch, if any (a split send's second batch
    /// stays visible at the statistics level rather than through an
    /// extra lifecycle state).
    ///
    /// # Errors
    ///
    /// - `IllegalTransition` if the issue is not Sending
    pub fn mark_as_sent(
        &mut self,
        stats: DeliveryStatistics,
        now: Timestamp,
    ) -> Result<(), NewsletterError> {
        self.transition(NewsletterStatus::Sent)?;

        self.statistics.merge(stats);
        self.scheduled_at = self.statistics.latest_scheduled_for().or(self.scheduled_at);
        self.sent_at = Some(now);
        Ok(())
    }

    /// Record a failed send.
    ///
    /// The reason and per-batch detail are merged into the statistics
    /// without clearing detail from earlier attempts.
    ///
    /// # Errors
    ///
    /// - `IllegalTransition` if the issue is not Sending
    pub fn mark_as_failed(
        &mut self,
        reason: impl Into<String>,
        stats: DeliveryStatistics,
    ) -> Result<(), NewsletterError> {
        self.transition(NewsletterStatus::Failed)?;

        self.statistics.merge(stats);
        self.statistics.error = Some(reason.into());
        Ok(())
    }

    /// Cancel the issue before any provider call.
    ///
    /// # Errors
    ///
    /// - `IllegalTransition` if the issue cannot be cancelled
    pub fn cancel(&mut self) -> Result<(), NewsletterError> {
        if !self.status.can_cancel() {
            return Err(NewsletterError::illegal_transition(
                self.status,
                NewsletterStatus::Cancelled,
            ));
        }
        self.transition(NewsletterStatus::Cancelled)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn transition(&mut self, target: NewsletterStatus) -> Result<(), NewsletterError> {
        if !self.status.can_transition_to(&target) {
            return Err(NewsletterError::illegal_transition(self.status, target));
        }
        self.status = target;
        self.touch();
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), NewsletterError> {
        if self.status.can_edit() {
            Ok(())
        } else {
            Err(NewsletterError::NotEditable {
                status: self.status,
            })
        }
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    fn validate_header(header_text: &str) -> Result<(), NewsletterError> {
        let trimmed = header_text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("header_text").into());
        }
        if trimmed.len() > MAX_HEADER_LENGTH {
            return Err(
                ValidationError::too_large("header_text", MAX_HEADER_LENGTH, trimmed.len()).into(),
            );
        }
        Ok(())
    }
}
