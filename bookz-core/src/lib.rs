//! Bookz Core Library
//!
//! This crate provides the catalog types and the projection pipeline for the Bookz
//! digital library. A fetched book collection is filtered by query and category,
//! promoted by the priority list on the default first page, then paginated against
//! the current load state.

pub mod catalog;
pub mod config;
pub mod error;
pub mod load;
pub mod projection;
pub mod quiz;
pub mod session;
pub mod source;
pub mod types;

pub use catalog::Catalog;
pub use config::{CatalogConfig, Mode};
pub use error::{CatalogError, FetchFailure, Result};
pub use load::{LoadState, ProgressHandle, ProgressSimulator};
pub use projection::{CatalogProjection, CatalogView, PageState};
pub use quiz::QuizLink;
pub use session::CatalogSession;
pub use source::{source_for, BookSource, FileSource, HttpSource, MemorySource};
pub use types::{Book, Category, CategoryCatalog, DisplayStyle, PriorityList};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new("b1", "Test Book", "Jane Doe", "REASONING");
        assert_eq!(book.title, "Test Book");
        assert_eq!(book.category, "REASONING");
    }
}
