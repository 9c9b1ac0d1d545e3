//! Interactive browsing session
//!
//! Holds the catalog, the reader's page state and the last computed view. The view
//! is recomputed only when one of its inputs changed.

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::error::{FetchFailure, Result};
use crate::load::LoadState;
use crate::projection::{total_pages, CatalogProjection, CatalogView, PageState};
use crate::types::Book;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewKey {
    revision: u64,
    state: PageState,
}

#[derive(Debug)]
pub struct CatalogSession {
    catalog: Catalog,
    state: PageState,
    projection: CatalogProjection,
    memo: Option<(ViewKey, CatalogView)>,
}

impl CatalogSession {
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_projection(CatalogProjection::from_config(config))
    }

    pub fn with_projection(projection: CatalogProjection) -> Self {
        Self {
            catalog: Catalog::new(),
            state: PageState::new(),
            projection,
            memo: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn load(&self) -> &LoadState {
        self.catalog.load()
    }

    pub fn books_fetched(&mut self, books: Vec<Book>) -> Result<()> {
        self.catalog.books_fetched(books)
    }

    pub fn fetch_failed(&mut self, error: FetchFailure) -> Result<()> {
        self.catalog.fetch_failed(error)
    }

    pub fn set_progress(&mut self, progress: u8) -> Result<()> {
        self.catalog.set_progress(progress)
    }

    /// Change the search text; returns whether it changed (and the page reset)
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        self.state.set_query(query)
    }

    /// Change the category filter; returns whether it changed (and the page reset)
    pub fn set_category(&mut self, category: Option<String>) -> bool {
        self.state.set_category(category)
    }

    /// Number of pages for the current filters
    pub fn total_pages(&self) -> usize {
        let ordered = self.projection.ordered(self.catalog.books(), &self.state);
        total_pages(ordered.len(), self.projection.page_size())
    }

    /// Move forward one page unless already on the last page
    pub fn next_page(&mut self) -> bool {
        let page = self.state.page();
        if page >= self.total_pages() {
            return false;
        }
        self.state.set_page(page + 1);
        true
    }

    /// Move back one page unless already on the first page
    pub fn previous_page(&mut self) -> bool {
        let page = self.state.page();
        if page <= 1 {
            return false;
        }
        self.state.set_page(page - 1);
        true
    }

    /// Jump to `page`, clamped to `[1, total_pages]`. Returns the page landed on.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        let last = self.total_pages().max(1);
        self.state.set_page(page.clamp(1, last));
        self.state.page()
    }

    /// Current view, memoized on the catalog revision and page state
    pub fn view(&mut self) -> &CatalogView {
        let key = ViewKey {
            revision: self.catalog.revision(),
            state: self.state.clone(),
        };

        let stale = !matches!(&self.memo, Some((cached, _)) if *cached == key);
        if stale {
            tracing::debug!(
                "Recomputing view: page={} query={:?} category={:?}",
                key.state.page(),
                key.state.query(),
                key.state.category()
            );
            self.memo = None;
        }

        let (_, view) = self.memo.get_or_insert_with(|| {
            let view = self
                .projection
                .project(self.catalog.books(), &key.state, self.catalog.load());
            (key, view)
        });
        view
    }

    /// Reader-facing error message, if the fetch failed
    pub fn error_message(&self) -> Option<&'static str> {
        self.catalog.load().error().map(FetchFailure::user_message)
    }
}
