//! Catalog browsing handlers

use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Redirect,
    Json,
};
use bookz_core::{Book, CatalogView, Category, PageState, QuizLink};
use serde::{Deserialize, Serialize};

/// Query parameters for the catalog view
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Free-text search over title and author
    #[serde(default)]
    pub query: String,

    /// Exact category name; empty means all categories
    pub category: Option<String>,

    /// Page number (1-indexed, 0 treated as 1)
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

impl CatalogQuery {
    fn page_state(&self) -> PageState {
        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        PageState::from_parts(self.query.clone(), category, self.page)
    }
}

/// Navigation links for a catalog page
#[derive(Debug, Serialize)]
pub struct PageLinks {
    #[serde(rename = "self")]
    pub self_: String,
    pub previous: Option<String>,
    pub next: Option<String>,
}

/// Catalog response: the view plus navigation links
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    #[serde(flatten)]
    pub view: CatalogView,
    pub query: String,
    pub category: Option<String>,
    pub links: PageLinks,
}

/// Build the URL of `page` for the given filters
fn page_url(state: &PageState, page: usize) -> String {
    let mut url = format!("/api/v1/catalog?page={}", page);
    if !state.query().is_empty() {
        url.push_str(&format!("&query={}", urlencoding::encode(state.query())));
    }
    if let Some(category) = state.category() {
        url.push_str(&format!("&category={}", urlencoding::encode(category)));
    }
    url
}

fn page_links(state: &PageState, view: &CatalogView) -> PageLinks {
    PageLinks {
        self_: page_url(state, view.page),
        previous: view.has_previous.then(|| page_url(state, view.page - 1)),
        next: view.has_next.then(|| page_url(state, view.page + 1)),
    }
}

/// Render one page of the catalog
pub async fn get_catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<CatalogResponse> {
    let page_state = query.page_state();

    let view = {
        let catalog = state.catalog.read().await;
        state
            .projection
            .project(catalog.books(), &page_state, catalog.load())
    };

    let links = page_links(&page_state, &view);
    Json(CatalogResponse {
        view,
        query: page_state.query().to_string(),
        category: page_state.category().map(str::to_string),
        links,
    })
}

/// Get a single book
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, StatusCode> {
    let catalog = state.catalog.read().await;
    catalog
        .book(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

#[derive(Debug, Deserialize)]
pub struct CategoriesQuery {
    /// Currently selected category, if any
    pub selected: Option<String>,
}

/// Category list split into the main buttons and the "more" group
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesResponse {
    pub main: Vec<Category>,
    pub more: Vec<Category>,
    /// The selected category when it lives in the "more" group
    pub selected_more: Option<Category>,
}

pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<CategoriesQuery>,
) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        main: state.categories.main().cloned().collect(),
        more: state.categories.more().cloned().collect(),
        selected_more: state
            .categories
            .selected_more(query.selected.as_deref())
            .cloned(),
    })
}

/// Load progress response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub state: &'static str,
    pub progress: u8,
    pub books: usize,
    pub error: Option<&'static str>,
}

pub async fn load_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let catalog = state.catalog.read().await;
    let load = catalog.load();
    Json(StatusResponse {
        state: load.name(),
        progress: load.progress(),
        books: catalog.books().len(),
        error: load.error().map(|e| e.user_message()),
    })
}

/// Redirect to the external quiz application
pub async fn quiz_redirect(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&QuizLink::for_mode(state.config.mode).url())
}
