//! Curated titles promoted to the front of the default first page

use serde::{Deserialize, Serialize};

/// Titles promoted on the unfiltered first page, most preferred first
pub const DEFAULT_PRIORITY_TITLES: [&str; 7] = [
    "Indian Polity by Laxmikanth 6th Edition McGraw Hill",
    "History of Modern India 2020 Edition Bipan Chandra",
    "Geography of India Majid Husain 9th Edition",
    "Ecology Environment Quick Revision Material Disha Experts",
    "Magbook Indian History Janmenjay Sahni",
    "Magbook General Science Poonam Singh",
    "Indian Economy by Ramesh Singh 12th Edition",
];

/// Ordered list of title substrings with first-match semantics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PriorityList {
    entries: Vec<String>,
    lowered: Vec<String>,
}

impl PriorityList {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        let lowered = entries.iter().map(|e| e.to_lowercase()).collect();
        Self { entries, lowered }
    }

    pub fn empty() -> Self {
        Self::new(Vec::<String>::new())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the first entry contained in `title`, case-insensitively
    pub fn first_match(&self, title: &str) -> Option<usize> {
        if self.lowered.is_empty() {
            return None;
        }
        let title = title.to_lowercase();
        self.lowered.iter().position(|entry| title.contains(entry.as_str()))
    }
}

impl Default for PriorityList {
    fn default() -> Self {
        Self::new(DEFAULT_PRIORITY_TITLES)
    }
}

impl From<Vec<String>> for PriorityList {
    fn from(entries: Vec<String>) -> Self {
        Self::new(entries)
    }
}

impl From<PriorityList> for Vec<String> {
    fn from(list: PriorityList) -> Self {
        list.entries
    }
}
