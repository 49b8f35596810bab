//! Recipient directory port.

use crate::domain::delivery::{Recipient, RecipientFilter};
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Resolves the recipient set for a send.
///
/// Implementations apply the group scope and the optional hard cap;
/// the orchestrator treats the returned set as final.
#[async_trait]
pub trait RecipientDirectory: Send + Sync {
    /// Find recipients matching the filter.
    async fn find_recipients(
        &self,
        filter: &RecipientFilter,
    ) -> Result<Vec<Recipient>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipient_directory_is_object_safe() {
        fn _accepts_dyn(_directory: &dyn RecipientDirectory) {}
    }
}
