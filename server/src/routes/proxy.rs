//! `/api/*` pass-through to the REST backend.
//!
//! DESIGN
//! ======
//! The dashboard is served same-origin with its API, so the browser never
//! needs CORS against the backend. Only the headers the client actually sets
//! travel upstream; cookies and hop-by-hop headers stay behind. Status,
//! `content-type` and body come back unchanged so the client's error message
//! extraction sees exactly what the backend said.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Message returned to the browser when the backend cannot be reached.
pub const BACKEND_UNAVAILABLE: &str = "Backend unavailable. Please try again.";

/// Request headers copied onto the upstream request.
pub const FORWARDED_HEADERS: [HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend request failed: {0}")]
    Unreachable(String),
    #[error("backend response unreadable: {0}")]
    Body(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "message": BACKEND_UNAVAILABLE }))).into_response()
    }
}

/// Copy the allow-listed headers out of an incoming request.
#[must_use]
pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in FORWARDED_HEADERS {
        if let Some(value) = incoming.get(&name) {
            out.insert(name, value.clone());
        }
    }
    out
}

/// Forward one request to `BACKEND_URL/api/{path}` and relay the answer.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = state.backend_url(&path, query.as_deref());
    tracing::debug!(%method, %url, "proxying api request");

    let mut upstream = state.http.request(method.clone(), &url).headers(forwarded_headers(&headers));
    if !body.is_empty() {
        upstream = upstream.body(body);
    }

    let reply = upstream.send().await.map_err(|e| {
        tracing::warn!(%method, %path, error = %e, "backend request failed");
        ProxyError::Unreachable(e.to_string())
    })?;

    let status = reply.status();
    let content_type = reply.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = reply.bytes().await.map_err(|e| {
        tracing::warn!(%method, %path, %status, error = %e, "backend body read failed");
        ProxyError::Body(e.to_string())
    })?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(value) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    Ok(response)
}
