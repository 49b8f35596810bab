//! Delivery-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, NewsletterNumber};
use crate::domain::newsletter::NewsletterError;

/// Errors raised by the send orchestration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The resolved recipient set was empty.
    NoRecipients,
    /// Another send orchestration holds the lock for this newsletter.
    AlreadySending(NewsletterNumber),
    /// The provider rejected a request.
    ProviderFailure(String),
    /// A provider call exceeded the configured timeout.
    Timeout { secs: u64 },
    /// A lifecycle or composition precondition failed.
    Newsletter(NewsletterError),
    /// Infrastructure error.
    Infrastructure(String),
}

impl DeliveryError {
    pub fn provider(message: impl Into<String>) -> Self {
        DeliveryError::ProviderFailure(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        DeliveryError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DeliveryError::NoRecipients => ErrorCode::NoRecipients,
            DeliveryError::AlreadySending(_) => ErrorCode::AlreadySending,
            DeliveryError::ProviderFailure(_) => ErrorCode::ProviderError,
            DeliveryError::Timeout { .. } => ErrorCode::ProviderTimeout,
            DeliveryError::Newsletter(err) => err.code(),
            DeliveryError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            DeliveryError::NoRecipients => "No recipients matched the filter".to_string(),
            DeliveryError::AlreadySending(number) => {
                format!("A send is already in flight for newsletter {}", number)
            }
            DeliveryError::ProviderFailure(msg) => format!("Provider failure: {}", msg),
            DeliveryError::Timeout { secs } => {
                format!("Provider call timed out after {}s", secs)
            }
            DeliveryError::Newsletter(err) => err.message(),
            DeliveryError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DeliveryError {}

impl From<NewsletterError> for DeliveryError {
    fn from(err: NewsletterError) -> Self {
        DeliveryError::Newsletter(err)
    }
}

impl From<DomainError> for DeliveryError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ProviderError => DeliveryError::ProviderFailure(err.message),
            _ => DeliveryError::Infrastructure(err.to_string()),
        }
    }
}
