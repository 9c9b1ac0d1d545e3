//! Composed per-page view of the catalog

use super::{filter, paginate, prioritize, total_pages, PageState};
use crate::config::CatalogConfig;
use crate::load::LoadState;
use crate::types::{Book, PriorityList};
use serde::Serialize;

/// Shown when a fetched collection has no matches for the current filters
pub const EMPTY_STATE_MESSAGE: &str = "No books found. Try adjusting your search or filters.";

/// Everything needed to render one page of the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub items: Vec<Book>,
    pub total_matches: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub show_pagination: bool,
    pub show_placeholders: bool,
    pub is_empty: bool,
    pub message: Option<&'static str>,
    pub load: LoadState,
}

/// Projection settings: page size and the priority list
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProjection {
    page_size: usize,
    priority: PriorityList,
}

impl CatalogProjection {
    /// `page_size` of zero is treated as 1
    pub fn new(page_size: usize, priority: PriorityList) -> Self {
        Self {
            page_size: page_size.max(1),
            priority,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.page_size, config.priority.clone())
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn priority(&self) -> &PriorityList {
        &self.priority
    }

    /// Filtered and prioritized full result list
    pub fn ordered<'a>(&self, books: &'a [Book], state: &PageState) -> Vec<&'a Book> {
        let matches = filter(books, state.query(), state.category());
        prioritize(matches, state, &self.priority)
    }

    pub fn project(&self, books: &[Book], state: &PageState, load: &LoadState) -> CatalogView {
        let ordered = self.ordered(books, state);
        let total_matches = ordered.len();
        let total_pages = total_pages(total_matches, self.page_size);
        let page = state.page();
        let items = paginate(&ordered, page, self.page_size, load);

        let fetched = load.is_fetched();
        let message = match load {
            LoadState::Failed { error } => Some(error.user_message()),
            _ if fetched && total_matches == 0 => Some(EMPTY_STATE_MESSAGE),
            _ => None,
        };

        CatalogView {
            items,
            total_matches,
            total_pages,
            page,
            page_size: self.page_size,
            has_previous: page > 1,
            has_next: page < total_pages,
            show_pagination: fetched && total_pages > 1,
            show_placeholders: matches!(load, LoadState::Idle),
            is_empty: fetched && total_matches == 0,
            message,
            load: load.clone(),
        }
    }
}

impl Default for CatalogProjection {
    fn default() -> Self {
        Self::from_config(&CatalogConfig::default())
    }
}
