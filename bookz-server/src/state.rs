//! Application state

use anyhow::{Context, Result};
use bookz_core::{
    BookSource, Catalog, CatalogConfig, CatalogProjection, CategoryCatalog, LoadState,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;

/// Process-level settings read from `BOOKZ_*` environment variables
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// File path or URL of the book collection
    pub source: String,

    pub addr: SocketAddr,

    /// Optional JSON file with the category list
    pub categories_path: Option<String>,

    pub fetch_timeout: Duration,

    pub catalog: CatalogConfig,
}

impl ServerSettings {
    pub fn from_env() -> Self {
        let source =
            std::env::var("BOOKZ_SOURCE").unwrap_or_else(|_| "./data/books.json".to_string());

        let addr = match std::env::var("BOOKZ_ADDR") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid BOOKZ_ADDR {}, using default", raw);
                default_addr()
            }),
            Err(_) => default_addr(),
        };

        Self {
            source,
            addr,
            categories_path: std::env::var("BOOKZ_CATEGORIES").ok(),
            fetch_timeout: Duration::from_secs(30),
            catalog: CatalogConfig::from_env(),
        }
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

/// Server-sent events
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// Warm-up progress advanced
    Progress { progress: u8 },

    /// Warm-up finished
    Loaded { books: usize },

    /// The fetch failed; carries the reader-facing message
    Failed { message: String },
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Fetched collection and its load state
    pub catalog: Arc<RwLock<Catalog>>,

    /// Static category list
    pub categories: Arc<CategoryCatalog>,

    pub projection: Arc<CatalogProjection>,

    pub config: Arc<CatalogConfig>,

    /// Channel for SSE events
    pub event_tx: broadcast::Sender<ServerEvent>,
}

impl AppState {
    /// Create new application state with an empty (`Idle`) catalog
    pub fn new(config: CatalogConfig, categories: CategoryCatalog) -> Self {
        let (event_tx, _) = broadcast::channel(128);

        Self {
            catalog: Arc::new(RwLock::new(Catalog::new())),
            categories: Arc::new(categories),
            projection: Arc::new(CatalogProjection::from_config(&config)),
            config: Arc::new(config),
            event_tx,
        }
    }

    /// Build state from settings, loading the category list if one is configured
    pub async fn from_settings(settings: &ServerSettings) -> Result<Self> {
        let categories = match &settings.categories_path {
            Some(path) => {
                let data = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read categories from {}", path))?;
                CategoryCatalog::from_json(&data)
                    .with_context(|| format!("Invalid category list in {}", path))?
            }
            None => CategoryCatalog::default(),
        };

        Ok(Self::new(settings.catalog.clone(), categories))
    }

    /// Fetch the collection once, then run the warm-up progress to completion.
    /// A failed fetch is terminal; nothing is retried.
    pub async fn load(&self, source: &dyn BookSource) {
        // Fetch without holding the lock so readers keep seeing placeholders
        let fetched = source.fetch_books().await;

        {
            let mut catalog = self.catalog.write().await;
            match fetched {
                Ok(books) => {
                    tracing::info!("Fetched {} books from {}", books.len(), source.describe());
                    if let Err(e) = catalog.books_fetched(books) {
                        tracing::error!("Unexpected load state: {}", e);
                        return;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to fetch books from {}: {}", source.describe(), e);
                    let message = e.user_message().to_string();
                    if let Err(e) = catalog.fetch_failed(e) {
                        tracing::error!("Unexpected load state: {}", e);
                    }
                    self.broadcast(ServerEvent::Failed { message });
                    return;
                }
            }
        }

        let mut progress = self.config.simulator().spawn();
        while let Some(value) = progress.next().await {
            let mut catalog = self.catalog.write().await;
            if let Err(e) = catalog.set_progress(value) {
                tracing::warn!("Dropping progress update {}: {}", value, e);
                break;
            }
            self.broadcast(ServerEvent::Progress { progress: value });
        }

        let books = self.catalog.read().await.books().len();
        tracing::info!("Catalog ready with {} books", books);
        self.broadcast(ServerEvent::Loaded { books });
    }

    /// Run `load` on a background task
    pub fn spawn_loader(&self, source: Box<dyn BookSource>) -> JoinHandle<()> {
        let state = self.clone();
        tokio::spawn(async move { state.load(source.as_ref()).await })
    }

    /// Event describing the current load state, if anything has happened yet
    pub async fn current_event(&self) -> Option<ServerEvent> {
        let catalog = self.catalog.read().await;
        match catalog.load() {
            LoadState::Idle => None,
            LoadState::Loading { progress } => Some(ServerEvent::Progress {
                progress: *progress,
            }),
            LoadState::Loaded => Some(ServerEvent::Loaded {
                books: catalog.books().len(),
            }),
            LoadState::Failed { error } => Some(ServerEvent::Failed {
                message: error.user_message().to_string(),
            }),
        }
    }

    /// Subscribe to server events
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.event_tx.subscribe()
    }

    /// Broadcast an event
    pub fn broadcast(&self, event: ServerEvent) {
        // Ignore errors (no subscribers)
        let _ = self.event_tx.send(event);
    }
}
