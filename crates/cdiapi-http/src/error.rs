//! Error-to-status mapping.
//!
//! Three-way taxonomy: NotFound → 404, parameter bounds violation → 422,
//! backend failure → 500. Every error body has the same `{detail}` shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use cdiapi_core::{PageBoundsError, StoreError};

/// Structured error body returned with every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Request failure as seen by the router layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No record matches the id or filter.
    #[error("{0}")]
    NotFound(String),

    /// A query parameter fell outside the configured bounds.
    #[error(transparent)]
    Validation(#[from] PageBoundsError),

    /// The store adapter failed; surfaced directly, no retries.
    #[error(transparent)]
    Backend(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "backend failure");
        }
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
