//! Bookz Server - JSON API for browsing the book catalog

use anyhow::Result;
use bookz_server::{routes, state};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookz_server=debug,bookz_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = state::ServerSettings::from_env();

    // Create application state
    let state = state::AppState::from_settings(&settings).await?;

    // One-shot fetch plus warm-up progress, in the background
    let source = bookz_core::source_for(&settings.source, settings.fetch_timeout);
    let _loader = state.spawn_loader(source);

    // Build router
    let app = routes::create_router(state);

    // Start server
    tracing::info!("Starting server on {}", settings.addr);

    let listener = tokio::net::TcpListener::bind(settings.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
