//! The fetched book collection together with its load state

use crate::error::{FetchFailure, Result};
use crate::load::LoadState;
use crate::source::BookSource;
use crate::types::Book;

/// Owns the read-only collection. `revision` changes whenever the books or the
/// load state change, so views can be memoized on it.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    load: LoadState,
    revision: u64,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn load(&self) -> &LoadState {
        &self.load
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Store the fetched collection and start warm-up (`Idle → Loading`)
    pub fn books_fetched(&mut self, books: Vec<Book>) -> Result<()> {
        self.load.fetched()?;
        self.books = books;
        self.revision += 1;
        Ok(())
    }

    pub fn fetch_failed(&mut self, error: FetchFailure) -> Result<()> {
        self.load.fail(error)?;
        self.revision += 1;
        Ok(())
    }

    pub fn set_progress(&mut self, progress: u8) -> Result<()> {
        let before = self.load.clone();
        self.load.set_progress(progress)?;
        if self.load != before {
            self.revision += 1;
        }
        Ok(())
    }

    /// Run the one-shot fetch against `source` and record the outcome.
    /// Returns the number of books on success.
    pub async fn fetch_from(&mut self, source: &dyn BookSource) -> Result<usize> {
        match source.fetch_books().await {
            Ok(books) => {
                let count = books.len();
                tracing::info!("Fetched {} books from {}", count, source.describe());
                self.books_fetched(books)?;
                Ok(count)
            }
            Err(e) => {
                tracing::error!("Failed to fetch books from {}: {}", source.describe(), e);
                self.fetch_failed(e.clone())?;
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::source::MemorySource;

    #[tokio::test]
    async fn test_fetch_from_success() {
        let mut catalog = Catalog::new();
        let source = MemorySource::new(vec![Book::new("1", "T", "A", "C")]);
        assert_eq!(catalog.fetch_from(&source).await.unwrap(), 1);
        assert_eq!(catalog.load(), &LoadState::Loading { progress: 0 });
        assert!(catalog.book("1").is_some());
        assert!(catalog.book("2").is_none());
    }

    #[tokio::test]
    async fn test_fetch_from_failure_is_terminal() {
        let mut catalog = Catalog::new();
        let err = catalog
            .fetch_from(&MemorySource::failing("503"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Fetch(_)));
        assert!(catalog.load().error().is_some());
        assert!(catalog.books().is_empty());
        assert!(catalog.books_fetched(Vec::new()).is_err());
    }

    #[test]
    fn test_revision_tracks_changes() {
        let mut catalog = Catalog::new();
        catalog.books_fetched(Vec::new()).unwrap();
        let r = catalog.revision();
        catalog.set_progress(10).unwrap();
        assert_eq!(catalog.revision(), r + 1);
        // Backwards reading leaves the state unchanged
        catalog.set_progress(4).unwrap();
        assert_eq!(catalog.revision(), r + 1);
    }
}
