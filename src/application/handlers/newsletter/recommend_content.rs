//! RecommendContentHandler - Suggests a topically balanced selection.

use std::sync::Arc;

use crate::domain::content::{recommend, ContentItem, RecommendOptions};
use crate::domain::newsletter::NewsletterError;
use crate::ports::ContentCatalog;

/// How many candidates to pull from the catalog per recommendation.
const CANDIDATE_POOL_SIZE: usize = 100;

/// Command requesting a recommended selection.
#[derive(Debug, Clone, Default)]
pub struct RecommendContentCommand {
    /// Number of items to recommend.
    pub target: usize,
    pub require_image: bool,
    pub sort_by_recency: bool,
}

/// Handler producing a balanced recommendation from recent candidates.
pub struct RecommendContentHandler {
    catalog: Arc<dyn ContentCatalog>,
}

impl RecommendContentHandler {
    pub fn new(catalog: Arc<dyn ContentCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        cmd: RecommendContentCommand,
    ) -> Result<Vec<ContentItem>, NewsletterError> {
        let pool = self.catalog.find_candidates(CANDIDATE_POOL_SIZE).await?;
        let options = RecommendOptions {
            require_image: cmd.require_image,
            sort_by_recency: cmd.sort_by_recency,
        };
        Ok(recommend(&pool, cmd.target, &options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::SlotCategory;
    use crate::domain::foundation::{ContentItemId, DomainError, Timestamp};
    use async_trait::async_trait;

    struct MockCatalog {
        items: Vec<ContentItem>,
    }

    #[async_trait]
    impl ContentCatalog for MockCatalog {
        async fn fetch_items(
            &self,
            ids: &[ContentItemId],
        ) -> Result<Vec<ContentItem>, DomainError> {
            Ok(self
                .items
                .iter()
                .filter(|item| ids.contains(item.id()))
                .cloned()
                .collect())
        }

        async fn find_candidates(&self, limit: usize) -> Result<Vec<ContentItem>, DomainError> {
            Ok(self.items.iter().take(limit).cloned().collect())
        }
    }

    fn lined_item(line: &str, has_image: bool) -> ContentItem {
        ContentItem::new(
            ContentItemId::new(),
            format!("{} story", line),
            SlotCategory::Normal,
            Some(line.to_string()),
            true,
            has_image,
            Timestamp::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn balances_across_topical_lines() {
        let items = vec![
            lined_item("tech", true),
            lined_item("tech", true),
            lined_item("tech", true),
            lined_item("culture", true),
            lined_item("culture", true),
            lined_item("culture", true),
        ];
        let handler = RecommendContentHandler::new(Arc::new(MockCatalog { items }));

        let recommended = handler
            .handle(RecommendContentCommand {
                target: 4,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(recommended.len(), 4);
        let tech = recommended
            .iter()
            .filter(|i| i.topical_line() == Some("tech"))
            .count();
        assert_eq!(tech, 2);
    }

    #[tokio::test]
    async fn image_requirement_filters_the_pool() {
        let items = vec![lined_item("tech", true), lined_item("tech", false)];
        let handler = RecommendContentHandler::new(Arc::new(MockCatalog { items }));

        let recommended = handler
            .handle(RecommendContentCommand {
                target: 5,
                require_image: true,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(recommended.len(), 1);
        assert!(recommended[0].has_hero_image());
    }

    #[tokio::test]
    async fn empty_catalog_recommends_nothing() {
        let handler = RecommendContentHandler::new(Arc::new(MockCatalog { items: vec![] }));

        let recommended = handler
            .handle(RecommendContentCommand {
                target: 10,
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(recommended.is_empty());
    }
}
