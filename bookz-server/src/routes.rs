//! API routes

use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Origins allowed when `BOOKZ_CORS_ORIGINS` is unset
const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// Build the CORS layer from `BOOKZ_CORS_ORIGINS`: `*` for any origin, or a
/// comma-separated list. Defaults to local development origins.
fn cors_layer() -> CorsLayer {
    let origins = std::env::var("BOOKZ_CORS_ORIGINS").ok();
    let allow_origin = match origins.as_deref() {
        Some("*") => AllowOrigin::any(),
        Some(list) => AllowOrigin::list(
            list.split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect::<Vec<_>>(),
        ),
        None => AllowOrigin::list(DEV_ORIGINS.iter().filter_map(|s| s.parse().ok())),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Catalog endpoints
        .route("/catalog", get(handlers::get_catalog))
        .route("/books/:id", get(handlers::get_book))
        .route("/categories", get(handlers::list_categories))
        .route("/status", get(handlers::load_status))
        .route("/quiz", get(handlers::quiz_redirect))
        // SSE endpoint
        .route("/sync", get(handlers::sync_events));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
