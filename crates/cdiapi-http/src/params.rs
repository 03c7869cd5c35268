//! Query-parameter shapes, one per endpoint family.
//!
//! List-valued parameters arrive as repeated query keys
//! (`?countries=France&countries=Chad`), which is why handlers use
//! `axum_extra`'s `Query` extractor. Parameter names here are wire
//! contract; do not rename.

use cdiapi_core::{
    CatalogSearchParams, EntrySearchParams, IndexQuery, PageBoundsError, PageParams, Settings,
};
use serde::Deserialize;

fn default_q() -> String {
    String::new()
}

fn default_limit() -> u32 {
    10
}

fn default_index_limit() -> u32 {
    1000
}

fn default_page() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

/// `GET /search/catalogs/` parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSearchQuery {
    #[serde(default = "default_q")]
    pub q: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub software: Option<String>,
    #[serde(default)]
    pub owner_type: Option<String>,
    #[serde(default)]
    pub catalog_type: Option<String>,
    #[serde(default)]
    pub owner_country: Vec<String>,
    #[serde(default)]
    pub coverage_country: Vec<String>,
}

impl CatalogSearchQuery {
    pub fn page(&self) -> PageParams {
        PageParams::new(self.offset, self.limit)
    }

    pub fn filter_params(&self) -> CatalogSearchParams {
        CatalogSearchParams {
            q: self.q.clone(),
            software: self.software.clone(),
            owner_type: self.owner_type.clone(),
            catalog_type: self.catalog_type.clone(),
            owner_country: self.owner_country.clone(),
            coverage_country: self.coverage_country.clone(),
        }
    }
}

/// `GET /raw/0.1/search` parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchQuery {
    #[serde(default = "default_q")]
    pub q: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub software: Option<String>,
    #[serde(default)]
    pub owner_type: Option<String>,
    #[serde(default)]
    pub catalog_type: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub geotopics: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub langs: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RawSearchQuery {
    pub fn page(&self) -> PageParams {
        PageParams::new(self.offset, self.limit)
    }

    pub fn filter_params(&self) -> EntrySearchParams {
        EntrySearchParams {
            q: self.q.clone(),
            software: self.software.clone(),
            owner_type: self.owner_type.clone(),
            catalog_type: self.catalog_type.clone(),
            topics: self.topics.clone(),
            geotopics: self.geotopics.clone(),
            countries: self.countries.clone(),
            langs: self.langs.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// `GET /index/0.1/query` parameters.
///
/// `limit` and `offset` stay optional here because only caller-supplied
/// values are bounds-checked: the engine-side default of 1000 predates the
/// 500 page ceiling and must keep working when no `limit` is sent, exactly
/// as upstream behaves.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexQueryParams {
    #[serde(default = "default_q")]
    pub q: String,
    #[serde(default)]
    pub filters: Vec<String>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_true")]
    pub facets: bool,
    #[serde(default)]
    pub sort_by: Option<String>,
}

impl IndexQueryParams {
    /// Bounds-check the caller-supplied pagination values, if any.
    pub fn validate(&self, settings: &Settings) -> Result<(), PageBoundsError> {
        if let Some(limit) = self.limit {
            PageParams::new(0, limit).validate(settings.max_page, settings.max_offset)?;
        }
        if let Some(offset) = self.offset {
            PageParams::new(offset, 1).validate(settings.max_page, settings.max_offset)?;
        }
        Ok(())
    }

    /// Resolve defaults from settings and split the sort specification.
    /// Sort tokens are not validated locally; the engine owns that.
    pub fn to_index_query(&self, settings: &Settings) -> IndexQuery {
        let sort_by = self
            .sort_by
            .clone()
            .unwrap_or_else(|| settings.default_sort.clone());
        IndexQuery {
            q: self.q.clone(),
            filters: self.filters.clone(),
            offset: self.offset.unwrap_or(0),
            limit: self.limit.unwrap_or_else(default_index_limit),
            page: self.page,
            sort: sort_by.split(',').map(str::to_string).collect(),
            facets: self.facets.then(|| settings.default_facets.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
