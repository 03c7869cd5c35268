//! cdiapi-stores — adapters for the two external read-only backends.
//!
//! Each adapter is a thin translation layer: the document store executes
//! filter + projection + skip/limit reads, the search engine executes
//! full-text/faceted queries. Handlers depend on the traits below and
//! receive concrete adapters (or in-memory fakes in tests) by injection;
//! no client is ever ambient global state.
//!
//! Clients are constructed once at startup and shared across requests.
//! Requests never mutate shared state, so no locking is needed.

pub mod meili;
pub mod mongo;

use async_trait::async_trait;
use cdiapi_core::{
    CatalogRecord, CatalogSummary, Filter, IndexQuery, PageParams, SearchEntry, StoreError,
};

/// Read access to the registry of data catalogs.
#[async_trait]
pub trait CatalogRegistry: Send + Sync {
    /// Exact lookup by registry `uid`.
    async fn fetch(&self, uid: &str) -> Result<Option<CatalogRecord>, StoreError>;

    /// Filtered, paginated search returning `{uid, name, link}` summaries in
    /// the store's natural order, plus the total count matching the filter.
    async fn search(
        &self,
        filter: &Filter,
        page: PageParams,
    ) -> Result<(Vec<CatalogSummary>, u64), StoreError>;
}

/// Read access to the raw indexed dataset entries.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Exact lookup by the composite `id` field (never `int_id`).
    async fn fetch(&self, id: &str) -> Result<Option<SearchEntry>, StoreError>;

    /// Filtered, paginated search returning full entries plus the total
    /// count matching the filter.
    async fn search(
        &self,
        filter: &Filter,
        page: PageParams,
    ) -> Result<(Vec<SearchEntry>, u64), StoreError>;
}

/// Full-text/faceted queries against the search engine. The response body
/// is passed through verbatim, facet distribution included.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    async fn query(&self, query: &IndexQuery) -> Result<serde_json::Value, StoreError>;
}

pub use meili::MeiliIndex;
pub use mongo::{MongoEntries, MongoRegistry};
