//! Show command implementation

use super::fetch;
use anyhow::{Context, Result};

/// Display a single book from a catalog
pub async fn show(location: &str, id: &str, json: bool) -> Result<()> {
    let books = fetch(location).await?;
    let book = books
        .iter()
        .find(|b| b.id == id)
        .with_context(|| format!("No book with id {}", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(book)?);
    } else {
        println!("Title:       {}", book.title);
        println!("Author:      {}", book.author);
        println!("Category:    {}", book.category);
        if !book.cover_url.is_empty() {
            println!("Cover:       {}", book.cover_url);
        }
        if !book.description.is_empty() {
            println!("Description: {}", book.description);
        }
    }

    Ok(())
}
