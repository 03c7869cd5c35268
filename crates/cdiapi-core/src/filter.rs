//! Filter Builder — query parameters to store-native filter clauses.
//!
//! Each endpoint family has a static parameter-to-field table, translated
//! here into an ordered clause list. The field names define API
//! compatibility with the upstream service and must be reproduced exactly.
//! All present clauses combine with implicit AND; membership tests within a
//! list-valued clause are OR. An empty clause list matches every record.

use serde::Serialize;

/// One conjunct of a store filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterClause {
    /// Full-text match against the store's text index.
    Text(String),
    /// Equality on a mapped field.
    Eq { field: &'static str, value: String },
    /// Field value is a member of (or, for array fields, intersects) the
    /// given list.
    AnyOf {
        field: &'static str,
        values: Vec<String>,
    },
}

/// Conjunction of clauses, derived deterministically from request
/// parameters. No persisted form exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filter {
    pub clauses: Vec<FilterClause>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    fn push_text(&mut self, q: &str) {
        if !q.is_empty() {
            self.clauses.push(FilterClause::Text(q.to_string()));
        }
    }

    fn push_eq(&mut self, field: &'static str, value: &Option<String>) {
        if let Some(value) = value {
            if !value.is_empty() {
                self.clauses.push(FilterClause::Eq {
                    field,
                    value: value.clone(),
                });
            }
        }
    }

    fn push_any_of(&mut self, field: &'static str, values: &[String]) {
        if !values.is_empty() {
            self.clauses.push(FilterClause::AnyOf {
                field,
                values: values.to_vec(),
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Registry search (/search/catalogs/)
// ---------------------------------------------------------------------------

/// Parameters accepted by the catalog registry search.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogSearchParams {
    pub q: String,
    pub software: Option<String>,
    pub owner_type: Option<String>,
    pub catalog_type: Option<String>,
    pub owner_country: Vec<String>,
    pub coverage_country: Vec<String>,
}

impl CatalogSearchParams {
    /// Build the registry filter. Field mapping table:
    ///
    /// | parameter          | field                       |
    /// |--------------------|-----------------------------|
    /// | `software`         | `software.id`               |
    /// | `owner_type`       | `owner_type`                |
    /// | `catalog_type`     | `catalog_type`              |
    /// | `owner_country`    | `owner.location.country`    |
    /// | `coverage_country` | `coverage.location.country` |
    pub fn filter(&self) -> Filter {
        let mut filter = Filter::default();
        filter.push_text(&self.q);
        filter.push_eq("software.id", &self.software);
        filter.push_eq("owner_type", &self.owner_type);
        filter.push_eq("catalog_type", &self.catalog_type);
        filter.push_any_of("owner.location.country", &self.owner_country);
        filter.push_any_of("coverage.location.country", &self.coverage_country);
        filter
    }
}

// ---------------------------------------------------------------------------
// Raw entry search (/raw/0.1/search)
// ---------------------------------------------------------------------------

/// Parameters accepted by the raw indexed-entry search.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EntrySearchParams {
    pub q: String,
    pub software: Option<String>,
    pub owner_type: Option<String>,
    pub catalog_type: Option<String>,
    pub topics: Vec<String>,
    pub geotopics: Vec<String>,
    pub countries: Vec<String>,
    pub langs: Vec<String>,
    pub tags: Vec<String>,
}

impl EntrySearchParams {
    /// Build the raw-search filter. Field mapping table:
    ///
    /// | parameter      | field                 |
    /// |----------------|-----------------------|
    /// | `software`     | `source.software.id`  |
    /// | `owner_type`   | `source.owner_type`   |
    /// | `catalog_type` | `source.catalog_type` |
    /// | `countries`    | `source.countries`    |
    /// | `langs`        | `source.langs.id`     |
    /// | `tags`         | `dataset.tags`        |
    /// | `topics`       | `dataset.topics`      |
    /// | `geotopics`    | `dataset.geotopics`   |
    pub fn filter(&self) -> Filter {
        let mut filter = Filter::default();
        filter.push_text(&self.q);
        filter.push_eq("source.software.id", &self.software);
        filter.push_eq("source.owner_type", &self.owner_type);
        filter.push_eq("source.catalog_type", &self.catalog_type);
        filter.push_any_of("source.countries", &self.countries);
        filter.push_any_of("source.langs.id", &self.langs);
        filter.push_any_of("dataset.tags", &self.tags);
        filter.push_any_of("dataset.topics", &self.topics);
        filter.push_any_of("dataset.geotopics", &self.geotopics);
        filter
    }
}

// ---------------------------------------------------------------------------
// Indexed search (/index/0.1/query)
// ---------------------------------------------------------------------------

/// Query forwarded to the faceted search engine. Filters and sort tokens
/// are passed through untouched; the backend validates them itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexQuery {
    pub q: String,
    pub filters: Vec<String>,
    pub offset: u32,
    pub limit: u32,
    pub page: u32,
    /// Comma-separated `field:direction` tokens, already split.
    pub sort: Vec<String>,
    /// Facet fields to aggregate, or `None` to disable facet output.
    pub facets: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
