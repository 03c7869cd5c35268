//! cdiapi-http — the axum router layer.
//!
//! Stateless request handling: one request is one filter build, one adapter
//! call, one envelope wrap. Adapters arrive through [`AppState`] by
//! explicit injection (tests swap in in-memory fakes); nothing here holds
//! cross-request state or retries anything.

pub mod error;
pub mod headers;
pub mod params;
pub mod routes;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use cdiapi_core::Settings;
use cdiapi_stores::{CatalogRegistry, EntryStore, SearchIndex};

pub use error::ApiError;

/// Shared per-process state: long-lived store clients plus settings,
/// constructed once at startup and cloned cheaply per request.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn CatalogRegistry>,
    pub entries: Arc<dyn EntryStore>,
    pub index: Arc<dyn SearchIndex>,
    pub settings: Arc<Settings>,
}

/// Assemble the full route table. Paths mirror the upstream API exactly,
/// trailing slash on `/search/catalogs/` included.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/catalog/{catalog_id}", get(routes::catalog::fetch_catalog))
        .route("/search/catalogs/", get(routes::catalog::search_catalogs))
        .route("/raw/0.1/entry/{entry_id}", get(routes::raw::fetch_entry))
        // Alias kept for compatibility with the original route table.
        .route("/search/0.1/entry/{entry_id}", get(routes::raw::fetch_entry))
        .route("/raw/0.1/search", get(routes::raw::search_entries))
        .route("/index/0.1/query", get(routes::index::query_index))
        .layer(axum::middleware::map_response(headers::attach_cache_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let port = state.settings.port;
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
