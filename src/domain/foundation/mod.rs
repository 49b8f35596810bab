//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the newsletter dispatch domain.

mod ids;
mod timestamp;
mod newsletter_status;
mod state_machine;
mod errors;

pub use ids::{CampaignId, ContentItemId, DistributionListId, NewsletterNumber};
pub use timestamp::Timestamp;
pub use newsletter_status::NewsletterStatus;
pub use state_machine::StateMachine;
pub use errors::{DomainError, ErrorCode, ValidationError};
