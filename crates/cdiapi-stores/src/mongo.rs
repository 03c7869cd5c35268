//! Document-store adapters backed by MongoDB.
//!
//! Two collections, two adapters: the catalog registry (`cdi.catalogs`) and
//! the raw indexed entries (`cdisearch.fulldb`). Both execute the same
//! shape of read — render the filter to BSON, apply projection and
//! skip/limit, count matching documents — and return `(items, total)`.

use cdiapi_core::{
    CatalogRecord, CatalogSummary, Filter, FilterClause, PageParams, SearchEntry, StoreError,
};
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};

use async_trait::async_trait;

use crate::{CatalogRegistry, EntryStore};

/// Render a [`Filter`] into the MongoDB query dialect.
///
/// `Text` becomes a `$text`/`$search` clause, `Eq` a plain equality, and
/// `AnyOf` a `$in` membership test. Clauses on the same document AND
/// together implicitly, exactly as the builder promises.
pub(crate) fn to_document(filter: &Filter) -> Document {
    let mut query = Document::new();
    for clause in &filter.clauses {
        match clause {
            FilterClause::Text(q) => {
                query.insert("$text", doc! { "$search": q.clone() });
            }
            FilterClause::Eq { field, value } => {
                query.insert(*field, value.clone());
            }
            FilterClause::AnyOf { field, values } => {
                query.insert(*field, doc! { "$in": values.clone() });
            }
        }
    }
    query
}

fn store_err(err: mongodb::error::Error) -> StoreError {
    StoreError::Document(err.to_string())
}

// ---------------------------------------------------------------------------
// Catalog registry
// ---------------------------------------------------------------------------

/// Registry adapter over the `catalogs` collection.
#[derive(Clone)]
pub struct MongoRegistry {
    records: Collection<CatalogRecord>,
    summaries: Collection<CatalogSummary>,
}

impl MongoRegistry {
    pub fn new(client: &Client, db: &str, collection: &str) -> Self {
        let records: Collection<CatalogRecord> = client.database(db).collection(collection);
        let summaries = records.clone_with_type::<CatalogSummary>();
        Self { records, summaries }
    }
}

#[async_trait]
impl CatalogRegistry for MongoRegistry {
    async fn fetch(&self, uid: &str) -> Result<Option<CatalogRecord>, StoreError> {
        self.records
            .find_one(doc! { "uid": uid })
            .projection(doc! { "_id": 0 })
            .await
            .map_err(store_err)
    }

    async fn search(
        &self,
        filter: &Filter,
        page: PageParams,
    ) -> Result<(Vec<CatalogSummary>, u64), StoreError> {
        let query = to_document(filter);
        tracing::debug!(query = %query, "registry search");
        let total = self
            .records
            .count_documents(query.clone())
            .await
            .map_err(store_err)?;
        let items = self
            .summaries
            .find(query)
            .projection(doc! { "_id": 0, "uid": 1, "name": 1, "link": 1 })
            .skip(u64::from(page.offset))
            .limit(i64::from(page.limit))
            .await
            .map_err(store_err)?
            .try_collect()
            .await
            .map_err(store_err)?;
        Ok((items, total))
    }
}

// ---------------------------------------------------------------------------
// Raw indexed entries
// ---------------------------------------------------------------------------

/// Raw-entry adapter over the `fulldb` collection.
#[derive(Clone)]
pub struct MongoEntries {
    entries: Collection<SearchEntry>,
}

impl MongoEntries {
    pub fn new(client: &Client, db: &str, collection: &str) -> Self {
        Self {
            entries: client.database(db).collection(collection),
        }
    }
}

#[async_trait]
impl EntryStore for MongoEntries {
    async fn fetch(&self, id: &str) -> Result<Option<SearchEntry>, StoreError> {
        // Lookup key is the composite `id`, never `int_id`.
        self.entries
            .find_one(doc! { "id": id })
            .projection(doc! { "_id": 0 })
            .await
            .map_err(store_err)
    }

    async fn search(
        &self,
        filter: &Filter,
        page: PageParams,
    ) -> Result<(Vec<SearchEntry>, u64), StoreError> {
        let query = to_document(filter);
        tracing::debug!(query = %query, "entry search");
        let total = self
            .entries
            .count_documents(query.clone())
            .await
            .map_err(store_err)?;
        let items = self
            .entries
            .find(query)
            .projection(doc! { "_id": 0 })
            .skip(u64::from(page.offset))
            .limit(i64::from(page.limit))
            .await
            .map_err(store_err)?
            .try_collect()
            .await
            .map_err(store_err)?;
        Ok((items, total))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
