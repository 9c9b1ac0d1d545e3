//! Book data sources
//!
//! The collection is fetched once at startup. Every failure collapses into a
//! single `FetchFailure`; callers do not retry.

mod http;

pub use http::HttpSource;

use crate::error::FetchFailure;
use crate::types::Book;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

/// Result type for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchFailure>;

/// Abstract provider of the book collection
#[async_trait]
pub trait BookSource: Send + Sync {
    /// Fetch the full collection
    async fn fetch_books(&self) -> FetchResult<Vec<Book>>;

    /// Human readable location, used in logs
    fn describe(&self) -> String;
}

/// Pick a source for `location`: `http(s)://` URLs go over the network,
/// anything else is read as a local JSON file.
pub fn source_for(location: &str, timeout: Duration) -> Box<dyn BookSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location, timeout))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Decode a JSON array of books
pub fn parse_books(data: &[u8]) -> FetchResult<Vec<Book>> {
    Ok(serde_json::from_slice(data)?)
}

/// Local JSON file source
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BookSource for FileSource {
    async fn fetch_books(&self) -> FetchResult<Vec<Book>> {
        let data = tokio::fs::read(&self.path).await?;
        let books = parse_books(&data)?;
        tracing::debug!("Read {} books from {}", books.len(), self.path.display());
        Ok(books)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory source (for testing)
#[derive(Default)]
pub struct MemorySource {
    books: Vec<Book>,
    failure: Option<FetchFailure>,
}

impl MemorySource {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
            failure: None,
        }
    }

    /// A source whose fetch always fails
    pub fn failing(detail: impl Into<String>) -> Self {
        Self {
            books: Vec::new(),
            failure: Some(FetchFailure::new(detail)),
        }
    }
}

#[async_trait]
impl BookSource for MemorySource {
    async fn fetch_books(&self) -> FetchResult<Vec<Book>> {
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(self.books.clone()),
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
