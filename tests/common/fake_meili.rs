//! Fake Meilisearch server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1, serving `POST /indexes/{index}/search`. The canned response
//! (or error) is configurable per test, and the last request body is
//! recorded so harnesses can assert on what the adapter actually sent.
//!
//! # Example
//!
//! ```rust,no_run
//! # tokio_test::block_on(async {
//! use common::fake_meili::FakeMeili;
//!
//! let meili = FakeMeili::start().await.unwrap();
//! meili.respond_with(serde_json::json!({ "hits": [], "totalHits": 0 })).await;
//!
//! // Point a MeiliIndex at meili.base_url()
//! let url = meili.base_url();
//! # });
//! ```

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// State shared between the router and test code.
struct MeiliState {
    response: Value,
    error: Option<(u16, String)>,
    last_body: Option<Value>,
}

impl Default for MeiliState {
    fn default() -> Self {
        Self {
            response: serde_json::json!({ "hits": [], "totalHits": 0 }),
            error: None,
            last_body: None,
        }
    }
}

/// Handle to the running fake Meilisearch server.
pub struct FakeMeili {
    addr: SocketAddr,
    state: Arc<Mutex<MeiliState>>,
}

impl FakeMeili {
    /// Start the fake server on a random port. Returns once it is
    /// listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(MeiliState::default()));

        let app = Router::new()
            .route("/indexes/{index}/search", post(search))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Configure the canned search response.
    pub async fn respond_with(&self, response: Value) {
        self.state.lock().await.response = response;
    }

    /// Make every search fail with the given status and Meilisearch-style
    /// `{message}` error body.
    pub async fn fail_with(&self, status: u16, message: &str) {
        self.state.lock().await.error = Some((status, message.to_string()));
    }

    /// The body of the most recent search request, if any.
    pub async fn last_request_body(&self) -> Option<Value> {
        self.state.lock().await.last_body.clone()
    }
}

async fn search(
    State(state): State<Arc<Mutex<MeiliState>>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let mut state = state.lock().await;
    state.last_body = Some(body);

    if let Some((status, message)) = &state.error {
        let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST);
        return (
            status,
            Json(serde_json::json!({ "message": message, "code": "invalid_search_sort" })),
        );
    }

    (StatusCode::OK, Json(state.response.clone()))
}
