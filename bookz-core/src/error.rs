//! Error types for Bookz Core

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Message shown to readers whenever the collection could not be fetched
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to load books. Please try again later.";

/// Top-level error type for all Bookz operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchFailure),

    #[error("Invalid load transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

/// The single failure kind of the book data source.
///
/// Network, decoding and timeout failures are not distinguished; `detail` is kept
/// for logs only and never shown to readers. Serializes as the static message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to fetch books: {detail}")]
pub struct FetchFailure {
    pub detail: String,
}

impl FetchFailure {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// Static reader-facing message
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILURE_MESSAGE
    }
}

impl Serialize for FetchFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FetchFailure", 1)?;
        state.serialize_field("message", self.user_message())?;
        state.end()
    }
}

impl From<std::io::Error> for FetchFailure {
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("io: {}", err))
    }
}

impl From<serde_json::Error> for FetchFailure {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("decode: {}", err))
    }
}

impl From<reqwest::Error> for FetchFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(format!("timeout: {}", err))
        } else {
            Self::new(format!("http: {}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_failure_hides_detail() {
        let failure = FetchFailure::new("HTTP 503 from https://internal.example/books.json");
        let json = serde_json::to_value(&failure).unwrap();

        assert_eq!(json, serde_json::json!({ "message": FETCH_FAILURE_MESSAGE }));
        assert!(!json.to_string().contains("internal.example"));
    }

    #[test]
    fn test_display_keeps_detail_for_logs() {
        let failure = FetchFailure::new("decode: expected array");
        assert_eq!(failure.to_string(), "failed to fetch books: decode: expected array");
    }
}
