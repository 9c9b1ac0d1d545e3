//! The Book record as served by the catalog data source

use serde::{Deserialize, Serialize};

/// A single catalog entry
///
/// Immutable once fetched. Field names follow the camelCase layout of the
/// upstream JSON (`coverUrl`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier
    pub id: String,

    pub title: String,

    pub author: String,

    /// Name of the category this book belongs to
    pub category: String,

    #[serde(default)]
    pub cover_url: String,

    #[serde(default)]
    pub description: String,
}

impl Book {
    /// Create a book with the required fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            category: category.into(),
            cover_url: String::new(),
            description: String::new(),
        }
    }

    /// Set cover image URL
    pub fn with_cover_url(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = cover_url.into();
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Empty stand-in rendered while the collection has not been fetched
    pub fn placeholder(index: usize) -> Self {
        Self::new(format!("placeholder-{}", index), "", "", "")
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.starts_with("placeholder-") && self.title.is_empty() && self.author.is_empty()
    }

    /// Case-insensitive match of an already lowercased needle against title or author
    pub(crate) fn matches_lowered(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
    }
}
