//! In-memory newsletter repository.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, NewsletterNumber};
use crate::domain::newsletter::Newsletter;
use crate::ports::NewsletterRepository;
use async_trait::async_trait;

/// Map-backed repository with a monotonic sequence counter.
#[derive(Default)]
pub struct InMemoryNewsletterRepository {
    newsletters: Mutex<BTreeMap<NewsletterNumber, Newsletter>>,
    sequence: AtomicU64,
}

impl InMemoryNewsletterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository whose next assigned number follows the given one.
    pub fn starting_after(number: NewsletterNumber) -> Self {
        Self {
            newsletters: Mutex::new(BTreeMap::new()),
            sequence: AtomicU64::new(number.value()),
        }
    }

    pub fn count(&self) -> usize {
        self.newsletters.lock().unwrap().len()
    }
}

#[async_trait]
impl NewsletterRepository for InMemoryNewsletterRepository {
    async fn find_by_number(
        &self,
        number: NewsletterNumber,
    ) -> Result<Option<Newsletter>, DomainError> {
        Ok(self.newsletters.lock().unwrap().get(&number).cloned())
    }

    async fn save(&self, newsletter: &Newsletter) -> Result<(), DomainError> {
        self.newsletters
            .lock()
            .unwrap()
            .insert(newsletter.number(), newsletter.clone());
        Ok(())
    }

    async fn next_number(&self) -> Result<NewsletterNumber, DomainError> {
        let next = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(NewsletterNumber::new(next))
    }

    async fn delete(&self, number: NewsletterNumber) -> Result<(), DomainError> {
        match self.newsletters.lock().unwrap().remove(&number) {
            Some(_) => Ok(()),
            None => Err(DomainError::new(
                ErrorCode::NewsletterNotFound,
                format!("Newsletter not found: {}", number),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn newsletter(number: u64) -> Newsletter {
        Newsletter::new(NewsletterNumber::new(number), "Header".to_string()).unwrap()
    }

    #[tokio::test]
    async fn save_then_find_round_trips() {
        let repo = InMemoryNewsletterRepository::new();
        repo.save(&newsletter(1)).await.unwrap();

        let found = repo.find_by_number(NewsletterNumber::new(1)).await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().header_text(), "Header");
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let repo = InMemoryNewsletterRepository::new();
        let found = repo.find_by_number(NewsletterNumber::new(9)).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn next_number_is_monotonic() {
        let repo = InMemoryNewsletterRepository::starting_after(NewsletterNumber::new(10));
        assert_eq!(repo.next_number().await.unwrap(), NewsletterNumber::new(11));
        assert_eq!(repo.next_number().await.unwrap(), NewsletterNumber::new(12));
    }

    #[tokio::test]
    async fn delete_missing_fails() {
        let repo = InMemoryNewsletterRepository::new();
        let result = repo.delete(NewsletterNumber::new(1)).await;
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code, ErrorCode::NewsletterNotFound);
    }

    #[tokio::test]
    async fn delete_removes_the_newsletter() {
        let repo = InMemoryNewsletterRepository::new();
        repo.save(&newsletter(2)).await.unwrap();
        repo.delete(NewsletterNumber::new(2)).await.unwrap();
        assert_eq!(repo.count(), 0);
    }
}
