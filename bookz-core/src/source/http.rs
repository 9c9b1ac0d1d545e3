//! Remote JSON source over HTTP

use super::{BookSource, FetchResult};
use crate::error::FetchFailure;
use crate::types::Book;
use async_trait::async_trait;
use std::time::Duration;

/// Fetches a JSON array of books with a single GET request
pub struct HttpSource {
    url: String,
    /// A client that failed to build surfaces as a fetch failure
    client: FetchResult<reqwest::Client>,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let builder = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bookz/", env!("CARGO_PKG_VERSION")));

        Self::from_builder(url, builder)
    }

    fn from_builder(url: impl Into<String>, builder: reqwest::ClientBuilder) -> Self {
        let url = url.into();
        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client for {}: {}", url, e);
            FetchFailure::from(e)
        });

        Self { url, client }
    }
}

#[async_trait]
impl BookSource for HttpSource {
    async fn fetch_books(&self) -> FetchResult<Vec<Book>> {
        let client = self.client.as_ref().map_err(Clone::clone)?;

        let response = client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchFailure::new(format!(
                "HTTP {} from {}",
                response.status(),
                self.url
            )));
        }

        let books: Vec<Book> = response.json().await?;
        tracing::debug!("Fetched {} books from {}", books.len(), self.url);
        Ok(books)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
