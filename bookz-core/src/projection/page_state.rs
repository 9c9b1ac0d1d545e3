//! Transient browsing state driven by reader interaction

use serde::{Deserialize, Serialize};

/// Query, category filter and 1-based page number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    query: String,
    category: Option<String>,
    page: usize,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            category: None,
            page: 1,
        }
    }

    /// Build a state directly, e.g. from request parameters
    pub fn from_parts(query: impl Into<String>, category: Option<String>, page: usize) -> Self {
        Self {
            query: query.into(),
            category,
            page: page.max(1),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replace the query. A different value resets the page to 1.
    /// Returns whether the query changed.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.query {
            return false;
        }
        self.query = query;
        self.page = 1;
        true
    }

    /// Replace the category filter. A different value resets the page to 1.
    /// Returns whether the filter changed.
    pub fn set_category(&mut self, category: Option<String>) -> bool {
        if category == self.category {
            return false;
        }
        self.category = category;
        self.page = 1;
        true
    }

    /// Set the page directly. Zero is treated as 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// First page with no query and no category: the only view the priority
    /// list applies to
    pub fn is_default_view(&self) -> bool {
        self.page == 1 && self.query.is_empty() && self.category.is_none()
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}
