//! Canonical fixtures and request plumbing for the harnesses.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cdiapi_core::{SearchEntry, Settings, StoreError};
use cdiapi_http::AppState;
use cdiapi_stores::{CatalogRegistry, EntryStore, SearchIndex};

use super::builders::{CatalogRecordBuilder, SearchEntryBuilder};
use super::fakes::{InMemoryEntries, InMemoryRegistry};

/// The documented example entry: dataset
/// `c4a88574-7a2a-4048-bc9f-07de0559e7b7` from catalog `cdi00000002`, keyed
/// by the composite id.
pub fn example_entry() -> SearchEntry {
    serde_json::from_value(serde_json::json!({
        "id": "cdi00000002-c4a88574-7a2a-4048-bc9f-07de0559e7b7",
        "int_id": "c4a88574-7a2a-4048-bc9f-07de0559e7b7",
        "source": {
            "uid": "cdi00000002",
            "name": "UAE Open Data Portal",
            "url": "https://data.bayanat.ae",
            "catalog_type": "Open data portal",
            "owner_name": "Government of UAE",
            "owner_type": "Central government",
            "software": "CKAN",
            "langs": ["EN"],
            "countries": ["United Arab Emirates"]
        },
        "dataset": {
            "id": "c4a88574-7a2a-4048-bc9f-07de0559e7b7",
            "title": "Open Field \"Exposed\" Vegetable Crops",
            "url": "https://data.bayanat.ae/dataset/open-field-exposed-vegetable-crops",
            "tags": ["Farms", "Vegetable Crops", "agriculture"],
            "formats": ["XLSX"],
            "license_id": "cc-by",
            "license_name": "Creative Commons Attribution"
        },
        "resources": [{
            "id": "f7ddcec7-5f5a-4458-8b10-ec8fd2d4a93b",
            "name": "Open Field _Exposed_ Vegetable Crops.",
            "format": "XLSX"
        }]
    }))
    .expect("example entry fixture deserializes")
}

/// A small registry corpus exercising every filterable field.
pub fn catalog_corpus() -> InMemoryRegistry {
    InMemoryRegistry::with_records(vec![
        CatalogRecordBuilder::new("cdi00000001", "Data.gov portal")
            .link("https://catalog.data.gov")
            .catalog_type("Open data portal")
            .owner_type("Central government")
            .software("ckan")
            .owner_country("United States")
            .coverage_country("United States")
            .build(),
        CatalogRecordBuilder::new("cdi00000002", "data.gouv.fr")
            .link("https://www.data.gouv.fr")
            .catalog_type("Open data portal")
            .owner_type("Central government")
            .software("udata")
            .owner_country("France")
            .coverage_country("France")
            .build(),
        CatalogRecordBuilder::new("cdi00000003", "Chad geodata")
            .link("https://geo.example.td")
            .catalog_type("Geoportal")
            .owner_type("Municipality")
            .software("geonetwork")
            .owner_country("Chad")
            .coverage_country("Chad")
            .build(),
    ])
}

/// An entry corpus spanning two catalogs and several filterable values.
pub fn entry_corpus() -> InMemoryEntries {
    InMemoryEntries::with_entries(vec![
        example_entry(),
        SearchEntryBuilder::new("cdi00000010", "dataset-a")
            .catalog_type("Geoportal")
            .owner_type("Municipality")
            .countries(&["France"])
            .software_id("geonetwork")
            .title("Rivers of France")
            .tags(&["water", "rivers"])
            .topics(&["ENVI"])
            .geotopics(&["Hydrography"])
            .build(),
        SearchEntryBuilder::new("cdi00000010", "dataset-b")
            .catalog_type("Geoportal")
            .owner_type("Municipality")
            .countries(&["Chad"])
            .software_id("geonetwork")
            .title("Lake Chad shoreline")
            .tags(&["water", "lakes"])
            .topics(&["ENVI"])
            .build(),
        SearchEntryBuilder::new("cdi00000011", "dataset-c")
            .catalog_type("Open data portal")
            .owner_type("Central government")
            .countries(&["Germany"])
            .software_id("ckan")
            .title("Rail traffic counts")
            .tags(&["transport"])
            .topics(&["TRAN"])
            .build(),
    ])
}

/// A `SearchIndex` stub for harnesses that never reach the search engine.
pub struct StubIndex;

#[async_trait::async_trait]
impl SearchIndex for StubIndex {
    async fn query(&self, _query: &cdiapi_core::IndexQuery) -> Result<Value, StoreError> {
        Ok(serde_json::json!({ "hits": [] }))
    }
}

/// Assemble the real router around injected fakes.
pub fn test_app(
    registry: impl CatalogRegistry + 'static,
    entries: impl EntryStore + 'static,
    index: impl SearchIndex + 'static,
) -> Router {
    let state = AppState {
        registry: Arc::new(registry),
        entries: Arc::new(entries),
        index: Arc::new(index),
        settings: Arc::new(Settings::defaults()),
    };
    cdiapi_http::router(state)
}

/// Issue a GET and decode the JSON body (Null when the body is empty).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router never errors");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is JSON")
    };
    (status, headers, body)
}

/// Raw body variant of [`get`] for byte-identical read assertions.
pub async fn get_raw(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router never errors");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    (status, bytes.to_vec())
}
