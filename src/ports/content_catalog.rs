//! Content catalog port (read side).
//!
//! Read access to the editorial content store. The catalog owns content
//! items; newsletters only reference them by ID.

use crate::domain::content::ContentItem;
use crate::domain::foundation::{ContentItemId, DomainError};
use async_trait::async_trait;

/// Read port for editorial content.
#[async_trait]
pub trait ContentCatalog: Send + Sync {
    /// Fetch the items with the given IDs.
    ///
    /// Missing IDs are simply absent from the result; the allocator
    /// reports them as unknown.
    async fn fetch_items(&self, ids: &[ContentItemId]) -> Result<Vec<ContentItem>, DomainError>;

    /// Fetch up to `limit` published candidates for recommendation,
    /// newest first.
    async fn find_candidates(&self, limit: usize) -> Result<Vec<ContentItem>, DomainError>;
}
