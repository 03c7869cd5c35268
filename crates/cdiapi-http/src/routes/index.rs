//! Ranked dataset search, passed through to the faceted search engine.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::Query;

use crate::error::ApiError;
use crate::params::IndexQueryParams;
use crate::AppState;

/// `GET /index/0.1/query` — full-text/faceted search. The engine's response
/// body (hits, totals, facet distribution) is returned verbatim; sort and
/// filter tokens are forwarded without local validation, and engine errors
/// propagate as backend failures.
pub async fn query_index(
    State(state): State<AppState>,
    Query(params): Query<IndexQueryParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    params.validate(&state.settings)?;

    let query = params.to_index_query(&state.settings);
    let results = state.index.query(&query).await?;
    tracing::info!(action = "indexquery", q = %query.q, page = query.page);
    Ok(Json(results))
}
