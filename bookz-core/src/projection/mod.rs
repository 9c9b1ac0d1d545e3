//! Filtering, prioritization and pagination of the book collection
//!
//! Every function here is pure and total: any combination of inputs produces a
//! result, never an error or a panic.

mod page_state;
mod view;

pub use page_state::PageState;
pub use view::{CatalogProjection, CatalogView, EMPTY_STATE_MESSAGE};

use crate::load::LoadState;
use crate::types::{Book, PriorityList};

/// Books whose title or author contains `query` (case-insensitive) and whose
/// category equals `category` when one is selected. Collection order is kept.
pub fn filter<'a>(books: &'a [Book], query: &str, category: Option<&str>) -> Vec<&'a Book> {
    let needle = query.to_lowercase();
    books
        .iter()
        .filter(|book| book.matches_lowered(&needle))
        .filter(|book| category.map_or(true, |c| book.category == c))
        .collect()
}

/// Move priority titles to the front on the default view (first page, no query,
/// no category). Priority books are ordered by the first list entry they match;
/// ties and the remaining books keep their relative order.
pub fn prioritize<'a>(
    matches: Vec<&'a Book>,
    state: &PageState,
    priority: &PriorityList,
) -> Vec<&'a Book> {
    if !state.is_default_view() || priority.is_empty() {
        return matches;
    }

    let mut ranked: Vec<(usize, &Book)> = Vec::new();
    let mut rest: Vec<&Book> = Vec::with_capacity(matches.len());
    for book in matches {
        match priority.first_match(&book.title) {
            Some(rank) => ranked.push((rank, book)),
            None => rest.push(book),
        }
    }

    // sort_by_key is stable
    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, book)| book).chain(rest).collect()
}

/// `ceil(len / page_size)`; zero when there is nothing to show
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Items rendered for `page` (1-based).
///
/// Before the collection is fetched the page is filled with placeholders. While the
/// warm-up progress is still running, pages past the second are capped at twice the
/// page size.
pub fn paginate(ordered: &[&Book], page: usize, page_size: usize, load: &LoadState) -> Vec<Book> {
    if matches!(load, LoadState::Idle) {
        return (0..page_size).map(Book::placeholder).collect();
    }

    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(ordered.len());
    let end = page.saturating_mul(page_size).min(ordered.len());
    let mut items: Vec<Book> = ordered[start..end].iter().map(|b| (*b).clone()).collect();

    if !load.is_complete() && page > 2 {
        items.truncate(page_size.saturating_mul(2));
    }

    items
}
