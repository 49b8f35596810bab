//! Newsletter repository port (write side).
//!
//! Defines the contract for persisting and retrieving Newsletter
//! aggregates. Implementations handle the actual storage.

use crate::domain::foundation::{DomainError, NewsletterNumber};
use crate::domain::newsletter::Newsletter;
use async_trait::async_trait;

/// Repository port for Newsletter aggregate persistence.
///
/// Implementations must assign sequence numbers monotonically and keep
/// them unique.
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    /// Find a newsletter by its sequence number.
    ///
    /// Returns `None` if not found.
    async fn find_by_number(
        &self,
        number: NewsletterNumber,
    ) -> Result<Option<Newsletter>, DomainError>;

    /// Save a newsletter, inserting or replacing.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, newsletter: &Newsletter) -> Result<(), DomainError>;

    /// Reserve and return the next sequence number.
    async fn next_number(&self) -> Result<NewsletterNumber, DomainError>;

    /// Delete a newsletter. Deletion is always explicit, never implied
    /// by a lifecycle transition.
    ///
    /// # Errors
    ///
    /// - `NewsletterNotFound` if no such newsletter exists
    async fn delete(&self, number: NewsletterNumber) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn newsletter_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn NewsletterRepository) {}
    }
}
