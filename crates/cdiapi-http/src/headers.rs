//! Static cache headers attached to every successful read response.

use axum::http::{HeaderName, HeaderValue};
use axum::response::Response;

use cdiapi_core::settings::CACHE_HEADERS;

/// `map_response` middleware: on success, add the fixed cache-control
/// headers. Error responses go out unmarked.
pub async fn attach_cache_headers(mut response: Response) -> Response {
    if response.status().is_success() {
        let headers = response.headers_mut();
        for (name, value) in CACHE_HEADERS {
            let name = HeaderName::from_bytes(name.as_bytes())
                .expect("static header name must be well-formed");
            headers.insert(name, HeaderValue::from_static(value));
        }
    }
    response
}
