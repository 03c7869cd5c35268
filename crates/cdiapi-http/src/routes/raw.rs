//! Search index data access endpoints (raw, unranked reads).

use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::Query;

use cdiapi_core::{Envelope, SearchEntry};

use crate::error::ApiError;
use crate::params::RawSearchQuery;
use crate::AppState;

/// `GET /raw/0.1/entry/{entry_id}` (also aliased at
/// `/search/0.1/entry/{entry_id}`) — one indexed dataset entry, looked up
/// by the composite `id` field.
pub async fn fetch_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<String>,
) -> Result<Json<SearchEntry>, ApiError> {
    let item = state
        .entries
        .fetch(&entry_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No such entry!".to_string()))?;
    Ok(Json(item))
}

/// `GET /raw/0.1/search` — filtered, paginated dataset search over the raw
/// indexed entries.
pub async fn search_entries(
    State(state): State<AppState>,
    Query(params): Query<RawSearchQuery>,
) -> Result<Json<Envelope<SearchEntry>>, ApiError> {
    let page = params.page();
    page.validate(state.settings.max_page, state.settings.max_offset)?;

    let filter = params.filter_params().filter();
    let (items, total) = state.entries.search(&filter, page).await?;
    if items.is_empty() {
        return Err(ApiError::NotFound("Nothing found".to_string()));
    }
    tracing::info!(action = "rawsearch", query = ?filter, num = items.len());
    Ok(Json(Envelope::new(page, items, total)))
}
