//! Newsletter-specific error types.

use crate::domain::content::AllocationError;
use crate::domain::foundation::{
    DomainError, ErrorCode, NewsletterNumber, NewsletterStatus, Timestamp, ValidationError,
};

/// Newsletter lifecycle and composition errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsletterError {
    /// No newsletter with the given number exists.
    NotFound(NewsletterNumber),
    /// A transition was attempted from a state that does not allow it.
    IllegalTransition {
        from: NewsletterStatus,
        to: NewsletterStatus,
    },
    /// A composition edit was attempted in a non-editable state.
    NotEditable { status: NewsletterStatus },
    /// The requested schedule time is not strictly in the future.
    InvalidScheduleTime { requested: Timestamp },
    /// The newsletter has no categorized content yet.
    NotCategorized,
    /// The newsletter has no rendered HTML yet.
    NotRendered,
    /// Slot allocation failed.
    Allocation(AllocationError),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl NewsletterError {
    pub fn illegal_transition(from: NewsletterStatus, to: NewsletterStatus) -> Self {
        NewsletterError::IllegalTransition { from, to }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        NewsletterError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        NewsletterError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            NewsletterError::NotFound(_) => ErrorCode::NewsletterNotFound,
            NewsletterError::IllegalTransition { .. } => ErrorCode::InvalidStateTransition,
            NewsletterError::NotEditable { .. } => ErrorCode::InvalidStateTransition,
            NewsletterError::InvalidScheduleTime { .. } => ErrorCode::InvalidScheduleTime,
            NewsletterError::NotCategorized => ErrorCode::NotCategorized,
            NewsletterError::NotRendered => ErrorCode::NotRendered,
            NewsletterError::Allocation(err) => err.code(),
            NewsletterError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            NewsletterError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            NewsletterError::NotFound(number) => format!("Newsletter not found: {}", number),
            NewsletterError::IllegalTransition { from, to } => {
                format!("Cannot transition newsletter from {} to {}", from, to)
            }
            NewsletterError::NotEditable { status } => {
                format!("Newsletter in status {} cannot be edited", status)
            }
            NewsletterError::InvalidScheduleTime { requested } => {
                format!("Schedule time must be in the future, got {}", requested)
            }
            NewsletterError::NotCategorized => {
                "Newsletter content has not been categorized".to_string()
            }
            NewsletterError::NotRendered => {
                "Newsletter HTML has not been rendered".to_string()
            }
            NewsletterError::Allocation(err) => err.message(),
            NewsletterError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            NewsletterError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for NewsletterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for NewsletterError {}

impl From<AllocationError> for NewsletterError {
    fn from(err: AllocationError) -> Self {
        NewsletterError::Allocation(err)
    }
}

impl From<ValidationError> for NewsletterError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyField { ref field }
            | ValidationError::TooLarge { ref field, .. }
            | ValidationError::InvalidFormat { ref field, .. } => NewsletterError::ValidationFailed {
                field: field.clone(),
                message: err.to_string(),
            },
        }
    }
}

impl From<DomainError> for NewsletterError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::NewsletterNotFound => {
                NewsletterError::Infrastructure(err.to_string())
            }
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                NewsletterError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            _ => NewsletterError::Infrastructure(err.to_string()),
        }
    }
}
