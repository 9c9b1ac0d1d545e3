//! Static category list and its main/more grouping

use serde::{Deserialize, Serialize};

/// Categories given their own button; every other category lives under "more"
pub const MAIN_CATEGORIES: [&str; 4] = [
    "QUANTITATIVE APTITUDE",
    "REASONING",
    "GENERAL KNOWLEDGE",
    "GENERAL ENGLISH",
];

/// Opaque presentation tokens attached to a category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DisplayStyle {
    pub color: String,
    pub ring_color: String,
}

impl DisplayStyle {
    pub fn new(color: impl Into<String>, ring_color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            ring_color: ring_color.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique name, compared exactly against `Book::category`
    pub name: String,

    #[serde(default)]
    pub display_style: DisplayStyle,
}

impl Category {
    pub fn new(name: impl Into<String>, display_style: DisplayStyle) -> Self {
        Self {
            name: name.into(),
            display_style,
        }
    }

    pub fn is_main(&self) -> bool {
        MAIN_CATEGORIES.contains(&self.name.as_str())
    }
}

/// The category list supplied at startup. Never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// Build a catalog, keeping the first occurrence of each name
    pub fn new(categories: Vec<Category>) -> Self {
        let mut unique: Vec<Category> = Vec::with_capacity(categories.len());
        for category in categories {
            if !unique.iter().any(|c| c.name == category.name) {
                unique.push(category);
            }
        }
        Self { categories: unique }
    }

    /// Parse a JSON array of categories
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        let categories: Vec<Category> = serde_json::from_str(data)?;
        Ok(Self::new(categories))
    }

    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Categories shown as top-level buttons, in list order
    pub fn main(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.is_main())
    }

    /// Categories grouped under "More Categories", in list order
    pub fn more(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| !c.is_main())
    }

    /// The selected category when it belongs to the "more" group
    pub fn selected_more(&self, selected: Option<&str>) -> Option<&Category> {
        let selected = selected?;
        self.more().find(|c| c.name == selected)
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::new(vec![
            Category::new(
                "QUANTITATIVE APTITUDE",
                DisplayStyle::new("bg-gradient-to-r from-emerald-500 to-teal-600", "ring-emerald-500"),
            ),
            Category::new(
                "REASONING",
                DisplayStyle::new("bg-gradient-to-r from-orange-500 to-red-600", "ring-orange-500"),
            ),
            Category::new(
                "GENERAL KNOWLEDGE",
                DisplayStyle::new("bg-gradient-to-r from-sky-500 to-blue-600", "ring-sky-500"),
            ),
            Category::new(
                "GENERAL ENGLISH",
                DisplayStyle::new("bg-gradient-to-r from-rose-500 to-pink-600", "ring-rose-500"),
            ),
        ])
    }
}
