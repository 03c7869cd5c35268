//! cdiapi-core — shared types for the Common Data Index API façade.
//!
//! This crate holds everything that is pure computation: the settings
//! model, the pass-through record shapes, the query-parameter-to-filter
//! builders, and the pagination envelope. No I/O happens here; the store
//! adapters and the HTTP layer live in their own crates.
//!
//! # Architecture
//!
//! ```text
//! HTTP params ──► Filter Builder ──► Store Adapter ──► Envelope ──► JSON
//! ```
//!
//! The filter builders are near-literal translations of the upstream API's
//! parameter-to-field tables; those mappings define wire compatibility and
//! must not drift.

pub mod error;
pub mod filter;
pub mod model;
pub mod page;
pub mod settings;

pub use error::StoreError;
pub use filter::{CatalogSearchParams, EntrySearchParams, Filter, FilterClause, IndexQuery};
pub use model::{CatalogRecord, CatalogSummary, SearchEntry};
pub use page::{Envelope, PageBoundsError, PageParams, SearchMeta};
pub use settings::Settings;
