//! Core types for the Bookz catalog

mod book;
mod category;
mod priority;

pub use book::Book;
pub use category::{Category, CategoryCatalog, DisplayStyle, MAIN_CATEGORIES};
pub use priority::{PriorityList, DEFAULT_PRIORITY_TITLES};
