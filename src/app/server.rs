use crate::app::handlers;
use crate::core::scan::CatalogScanner;
use crate::domain::ports::{Catalog, ScanTrigger};
use crate::utils::error::{PkgscanError, Result};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;

/// Shared state behind every handler. The catalog is immutable after
/// startup, so plain `Arc` sharing is enough.
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub scanner: Arc<dyn ScanTrigger>,
    pub max_world_entries: usize,
}

impl AppState {
    pub fn new(catalog: Arc<dyn Catalog>, max_world_entries: usize) -> Self {
        let scanner = Arc::new(CatalogScanner::new(Arc::clone(&catalog)));
        Self {
            catalog,
            scanner,
            max_world_entries,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/about", get(handlers::about))
        .route("/world", get(handlers::world_page))
        .route("/world/scan", post(handlers::world_scan))
        .route("/package", get(handlers::package))
        .route("/categories", get(handlers::categories))
        .route("/category", get(handlers::category))
        .route("/herds", get(handlers::herds))
        .route("/herd", get(handlers::herd))
        .route("/maintainers", get(handlers::maintainers))
        .route("/maintainer", get(handlers::maintainer))
        .route("/overlays", get(handlers::overlays))
        .route("/overlay", get(handlers::overlay))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Binds and serves until ctrl-c.
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| PkgscanError::ServerError {
            message: format!("failed to bind {}: {}", addr, e),
        })?;

    tracing::info!("pkgscan listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PkgscanError::ServerError {
            message: format!("server failed: {}", e),
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl-c: {}", e);
        return;
    }
    tracing::info!("Shutting down");
}
