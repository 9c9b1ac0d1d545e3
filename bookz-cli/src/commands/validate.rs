//! Validate command implementation

use super::{fetch, load_categories};
use anyhow::{bail, Result};
use bookz_core::{Book, CategoryCatalog};
use std::collections::HashSet;

/// Problems found in a catalog
#[derive(Debug, Default)]
struct Report {
    errors: Vec<String>,
    warnings: Vec<String>,
}

fn check(books: &[Book], categories: Option<&CategoryCatalog>) -> Report {
    let mut report = Report::default();
    let mut seen = HashSet::new();

    for book in books {
        if !seen.insert(book.id.as_str()) {
            report.errors.push(format!("Duplicate id: {}", book.id));
        }
        if book.title.trim().is_empty() {
            report.errors.push(format!("Book {} has no title", book.id));
        }
        if book.author.trim().is_empty() {
            report.warnings.push(format!("Book {} has no author", book.id));
        }
        if book.cover_url.is_empty() {
            report.warnings.push(format!("Book {} has no cover", book.id));
        }
        if let Some(categories) = categories {
            if !categories.contains(&book.category) {
                report
                    .warnings
                    .push(format!("Book {} has unknown category {}", book.id, book.category));
            }
        }
    }

    report
}

/// Validate a catalog
pub async fn validate(location: &str, categories: Option<&str>, strict: bool) -> Result<()> {
    let books = fetch(location).await?;
    let categories = match categories {
        Some(path) => Some(load_categories(Some(path))?),
        None => None,
    };

    let report = check(&books, categories.as_ref());

    for warning in &report.warnings {
        println!("Warning: {}", warning);
    }
    for error in &report.errors {
        println!("Error: {}", error);
    }

    if !report.errors.is_empty() {
        bail!("Validation failed with {} errors", report.errors.len());
    }
    if strict && !report.warnings.is_empty() {
        bail!("Validation failed (strict mode): {} warnings", report.warnings.len());
    }

    println!("Catalog is valid ({} books)", books.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_duplicates_and_titles() {
        let books = vec![
            Book::new("1", "A", "X", "REASONING").with_cover_url("c"),
            Book::new("1", "", "X", "REASONING").with_cover_url("c"),
        ];
        let report = check(&books, None);
        assert_eq!(report.errors.len(), 2);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_check_unknown_category() {
        let books = vec![Book::new("1", "A", "X", "ASTROLOGY").with_cover_url("c")];
        let report = check(&books, Some(&CategoryCatalog::default()));
        assert!(report.errors.is_empty());
        assert_eq!(report.warnings.len(), 1);
    }
}
