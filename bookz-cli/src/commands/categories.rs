//! Categories command implementation

use super::load_categories;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct CategoryGroups<'a> {
    main: Vec<&'a str>,
    more: Vec<&'a str>,
}

/// List the main categories and the "more" group
pub fn categories(file: Option<&str>, json: bool) -> Result<()> {
    let catalog = load_categories(file)?;
    let groups = CategoryGroups {
        main: catalog.main().map(|c| c.name.as_str()).collect(),
        more: catalog.more().map(|c| c.name.as_str()).collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else {
        println!("Main:");
        for name in &groups.main {
            println!("  {}", name);
        }
        if !groups.more.is_empty() {
            println!("More Categories:");
            for name in &groups.more {
                println!("  {}", name);
            }
        }
    }

    Ok(())
}
