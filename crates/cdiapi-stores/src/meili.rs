//! Search-engine adapter backed by Meilisearch's HTTP API.
//!
//! Issues `POST /indexes/{index}/search` and passes the response body
//! through verbatim, facet distribution included. Sort and filter tokens
//! are forwarded as-is; the engine validates them itself and its error
//! message is propagated to the caller unchanged.

use async_trait::async_trait;
use cdiapi_core::{IndexQuery, StoreError};
use serde::Serialize;

use crate::SearchIndex;

/// Page length hint forwarded with every query, matching the upstream API.
const HITS_PER_PAGE: u32 = 20;

/// Meilisearch client for a single index.
#[derive(Clone)]
pub struct MeiliIndex {
    http: reqwest::Client,
    search_url: String,
    api_key: Option<String>,
}

impl MeiliIndex {
    pub fn new(base_url: &str, api_key: Option<String>, index: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            search_url: format!("{}/indexes/{}/search", base_url.trim_end_matches('/'), index),
            api_key,
        }
    }
}

/// Wire shape of the search request body.
#[derive(Debug, Serialize)]
struct SearchBody<'a> {
    q: &'a str,
    offset: u32,
    limit: u32,
    filter: &'a [String],
    #[serde(rename = "hitsPerPage")]
    hits_per_page: u32,
    page: u32,
    sort: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    facets: Option<&'a [String]>,
}

impl<'a> SearchBody<'a> {
    fn from_query(query: &'a IndexQuery) -> Self {
        Self {
            q: &query.q,
            offset: query.offset,
            limit: query.limit,
            filter: &query.filters,
            hits_per_page: HITS_PER_PAGE,
            page: query.page,
            sort: &query.sort,
            facets: query.facets.as_deref(),
        }
    }
}

#[async_trait]
impl SearchIndex for MeiliIndex {
    async fn query(&self, query: &IndexQuery) -> Result<serde_json::Value, StoreError> {
        let body = SearchBody::from_query(query);
        tracing::debug!(q = %query.q, page = query.page, "search engine query");
        let mut request = self.http.post(&self.search_url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            // Meilisearch reports errors as {"message": ..., "code": ...};
            // surface its message verbatim.
            let detail = match response.json::<serde_json::Value>().await {
                Ok(err) => err
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("search engine error")
                    .to_string(),
                Err(_) => "search engine error".to_string(),
            };
            return Err(StoreError::Search {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
