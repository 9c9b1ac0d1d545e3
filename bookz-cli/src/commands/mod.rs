//! CLI command implementations

mod browse;
mod categories;
mod quiz;
mod show;
mod validate;

pub use browse::{browse, BrowseOptions};
pub use categories::categories;
pub use quiz::quiz_url;
pub use show::show;
pub use validate::validate;

use anyhow::{Context, Result};
use bookz_core::{source_for, Book, CategoryCatalog};
use std::time::Duration;

/// Timeout for remote catalog sources
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch the collection from a file path or URL
pub(crate) async fn fetch(location: &str) -> Result<Vec<Book>> {
    let source = source_for(location, FETCH_TIMEOUT);
    let books = source
        .fetch_books()
        .await
        .with_context(|| format!("Failed to load books from {}", location))?;
    Ok(books)
}

/// Load a category list from a JSON file, or the built-in list
pub(crate) fn load_categories(file: Option<&str>) -> Result<CategoryCatalog> {
    match file {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read categories from {}", path))?;
            CategoryCatalog::from_json(&data)
                .with_context(|| format!("Invalid category list in {}", path))
        }
        None => Ok(CategoryCatalog::default()),
    }
}
