//! Store-level error taxonomy.
//!
//! Adapter failures carry enough detail for the HTTP layer to build its
//! `{detail}` error body; no retries happen anywhere, every backend failure
//! surfaces directly to the caller.

use thiserror::Error;

/// Failure reported by a store adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document store rejected the connection or query.
    #[error("document store failure: {0}")]
    Document(String),

    /// The search engine returned a non-success response. The backend's own
    /// message is propagated verbatim (invalid sort syntax, for example, is
    /// never validated locally).
    #[error("search engine failure: {detail}")]
    Search { status: u16, detail: String },

    /// The search engine could not be reached at the transport level.
    #[error("search engine unreachable: {0}")]
    Transport(String),
}
