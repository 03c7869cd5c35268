//! Pass-through record shapes.
//!
//! Nothing in this module is owned or mutated by the service: catalog
//! records come from the registry-update process, search entries from the
//! indexing pipeline. Each struct types the documented fields and carries a
//! flattened extra map so upstream metadata this service does not know
//! about survives the read untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Extra fields preserved verbatim on a pass-through record.
///
/// `BTreeMap` rather than `HashMap` so repeated reads of the same record
/// serialize byte-identically.
pub type Extra = BTreeMap<String, Value>;

// ---------------------------------------------------------------------------
// Catalog registry
// ---------------------------------------------------------------------------

/// A data catalog registry record, returned in full by `/catalog/{id}`.
///
/// Owner, coverage, and software sub-documents ride along in `extra`; only
/// the fields this service filters or projects on are typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Registry UID, e.g. `cdi00001616`. Unique lookup key.
    pub uid: String,
    pub name: String,
    /// Public URL of the catalog, e.g. `https://catalog.data.gov`.
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_type: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// The `{uid, name, link}` projection returned by registry search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub uid: String,
    pub name: String,
    pub link: String,
}

// ---------------------------------------------------------------------------
// Search index entries
// ---------------------------------------------------------------------------

/// A dataset entry from the search index, keyed by the composite `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
    /// Composite unique id: `<catalog-uid>-<dataset-id>`.
    pub id: String,
    /// Dataset-local id, NOT a lookup key for this API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub int_id: Option<String>,
    pub source: SourceRecord,
    pub dataset: DatasetRecord,
    #[serde(default)]
    pub resources: Vec<ResourceRecord>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Descriptor of the catalog an entry was harvested from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub uid: String,
    pub name: String,
    pub url: String,
    pub catalog_type: String,
    #[serde(default)]
    pub langs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software: Option<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// The harvested dataset metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geotopics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible: Option<Vec<PartyRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A party responsible for a dataset (publisher, maintainer, …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub role: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A downloadable resource attached to a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasize: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
