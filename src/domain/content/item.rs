//! Content item value object.
//!
//! An opaque unit of editorial content selected into a newsletter.
//! Immutable once constructed; selection and allocation never mutate it.

use crate::domain::foundation::{ContentItemId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

use super::SlotCategory;

/// Maximum length for a content item title.
pub const MAX_TITLE_LENGTH: usize = 500;

/// An editorial content item eligible for newsletter placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique identifier.
    id: ContentItemId,

    /// Item title.
    title: String,

    /// Preferred display category.
    affinity: SlotCategory,

    /// Topical line tag used for balanced recommendation.
    topical_line: Option<String>,

    /// Whether the item is published and thus eligible for a newsletter.
    published: bool,

    /// Whether the item carries a hero image.
    has_hero_image: bool,

    /// When the item was published.
    published_at: Timestamp,
}

impl ContentItem {
    /// Creates a content item.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `TooLarge` if the title is invalid
    pub fn new(
        id: ContentItemId,
        title: String,
        affinity: SlotCategory,
        topical_line: Option<String>,
        published: bool,
        has_hero_image: bool,
        published_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if trimmed.len() > MAX_TITLE_LENGTH {
            return Err(ValidationError::too_large(
                "title",
                MAX_TITLE_LENGTH,
                trimmed.len(),
            ));
        }

        Ok(Self {
            id,
            title,
            affinity,
            topical_line,
            published,
            has_hero_image,
            published_at,
        })
    }

    /// Returns the item ID.
    pub fn id(&self) -> &ContentItemId {
        &self.id
    }

    /// Returns the item title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the preferred display category.
    pub fn affinity(&self) -> SlotCategory {
        self.affinity
    }

    /// Returns the topical line tag, if any.
    pub fn topical_line(&self) -> Option<&str> {
        self.topical_line.as_deref()
    }

    /// Returns true if the item may appear in a newsletter.
    pub fn is_eligible(&self) -> bool {
        self.published
    }

    /// Returns true if the item carries a hero image.
    pub fn has_hero_image(&self) -> bool {
        self.has_hero_image
    }

    /// Returns when the item was published.
    pub fn published_at(&self) -> &Timestamp {
        &self.published_at
    }
}
