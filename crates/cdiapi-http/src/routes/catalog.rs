//! Data catalogs registry endpoints.

use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::Query;

use cdiapi_core::{CatalogRecord, CatalogSummary, Envelope};

use crate::error::ApiError;
use crate::params::CatalogSearchQuery;
use crate::AppState;

/// `GET /catalog/{catalog_id}` — a single registry record in full.
///
/// A catalog merged into another canonical entity is documented upstream as
/// answering with a 307 redirect; the redirect mapping is a declared but
/// unimplemented contract point (no `merged_into` rules exist yet), so this
/// handler only ever answers 200 or 404.
pub async fn fetch_catalog(
    State(state): State<AppState>,
    Path(catalog_id): Path<String>,
) -> Result<Json<CatalogRecord>, ApiError> {
    let item = state
        .registry
        .fetch(&catalog_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No such data catalog!".to_string()))?;
    tracing::info!(action = "catalog", catalog_id = %catalog_id, name = %item.name);
    Ok(Json(item))
}

/// `GET /search/catalogs/` — filtered, paginated registry search returning
/// `{uid, name, link}` summaries.
pub async fn search_catalogs(
    State(state): State<AppState>,
    Query(params): Query<CatalogSearchQuery>,
) -> Result<Json<Envelope<CatalogSummary>>, ApiError> {
    let page = params.page();
    page.validate(state.settings.max_page, state.settings.max_offset)?;

    let filter = params.filter_params().filter();
    let (items, total) = state.registry.search(&filter, page).await?;
    if items.is_empty() {
        return Err(ApiError::NotFound("No such data catalog!".to_string()));
    }
    tracing::info!(action = "catalogsearch", query = ?filter, num = items.len());
    Ok(Json(Envelope::new(page, items, total)))
}
