//! Newsletter lifecycle state machine.
//!
//! Defines all possible newsletter states and valid transitions
//! according to the dispatch lifecycle.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a newsletter issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NewsletterStatus {
    /// Being composed. Content and header may still change.
    #[default]
    Draft,

    /// Queued for a future-dated send. Still editable.
    Scheduled,

    /// A send orchestration is in flight.
    Sending,

    /// Delivery accepted by the provider. Terminal.
    Sent,

    /// The last send attempt failed. May be retried.
    Failed,

    /// Cancelled before any provider call. Terminal.
    Cancelled,
}

impl NewsletterStatus {
    /// Returns true if the newsletter content may be modified.
    pub fn can_edit(&self) -> bool {
        matches!(self, NewsletterStatus::Draft | NewsletterStatus::Scheduled)
    }

    /// Returns true if a send may be started from this state.
    ///
    /// The rendered-HTML precondition is enforced by the aggregate,
    /// not by the status itself.
    pub fn can_send(&self) -> bool {
        matches!(
            self,
            NewsletterStatus::Draft | NewsletterStatus::Scheduled | NewsletterStatus::Failed
        )
    }

    /// Returns true if the newsletter may be cancelled.
    ///
    /// Submitted batches cannot be recalled, so a cancel attempted from
    /// Sending still fails at the transition matrix.
    pub fn can_cancel(&self) -> bool {
        matches!(self, NewsletterStatus::Scheduled | NewsletterStatus::Sending)
    }
}

impl StateMachine for NewsletterStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use NewsletterStatus::*;
        matches!(
            (self, target),
            // From DRAFT
            (Draft, Scheduled)
                | (Draft, Sending)
            // From SCHEDULED
                | (Scheduled, Sending)
                | (Scheduled, Cancelled)
            // From SENDING
                | (Sending, Sent)
                | (Sending, Failed)
            // From FAILED (retry)
                | (Failed, Sending)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use NewsletterStatus::*;
        match self {
            Draft => vec![Scheduled, Sending],
            Scheduled => vec![Sending, Cancelled],
            Sending => vec![Sent, Failed],
            Failed => vec![Sending],
            Sent => vec![],
            Cancelled => vec![],
        }
    }
}

impl fmt::Display for NewsletterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NewsletterStatus::Draft => "Draft",
            NewsletterStatus::Scheduled => "Scheduled",
            NewsletterStatus::Sending => "Sending",
            NewsletterStatus::Sent => "Sent",
            NewsletterStatus::Failed => "Failed",
            NewsletterStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", s)
    }
}
