//! Authenticated JSON transport for the REST backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, routed through the
//! same-origin `/api` proxy.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since data
//! is only fetched after hydration.
//!
//! AUTH FLOW
//! =========
//! Each request carries the stored access token. A 401 on a non-auth route
//! triggers one `POST /auth/refresh` with the refresh token; on success the
//! rotated pair is stored and the original request replayed once. Only a
//! failed refresh ends the session: tokens are cleared and the browser is sent
//! to `/login`. A 401 without a refresh token, or on the replay, is decoded
//! like any other error so the server's message reaches the page.
//!
//! The loop in [`run`] is written against [`Transport`]; the browser
//! implementation wraps `gloo-net` and `localStorage`.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx bodies are reduced to a single human message via
//! `records::error_message`, so pages can toast `err.user_message()` directly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::ApiError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[cfg(any(test, feature = "hydrate"))]
use records::TokenPair;
#[cfg(any(test, feature = "hydrate"))]
use records::auth;
#[cfg(any(test, feature = "hydrate"))]
use records::routes::{self, API_PREFIX};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// What to do with a completed response.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Next {
    /// Decode the body (success or ordinary error).
    Finish,
    /// Refresh tokens and replay the request.
    Refresh,
}

/// A 401 refreshes once; anything else, including a 401 on the replay, is
/// decoded so the server's own message reaches the caller.
#[cfg(any(test, feature = "hydrate"))]
fn next_step(status: u16, path: &str, retried: bool, has_refresh_token: bool) -> Next {
    if auth::should_refresh(status, path, retried, has_refresh_token) { Next::Refresh } else { Next::Finish }
}

/// The I/O one request needs: a single HTTP exchange plus token storage.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) trait Transport {
    /// Send one request and return `(status, body)`.
    async fn exchange(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<(u16, String), ApiError>;
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn store_tokens(&self, pair: &TokenPair);
    /// Drop credentials after a failed refresh.
    fn expire(&self);
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    routes::join(API_PREFIX, path)
}

/// Decode a response body given its status.
///
/// Empty success bodies decode as JSON `null`, which lets unit-like
/// responses target `Option<T>` or `serde_json::Value`.
#[cfg(any(test, feature = "hydrate"))]
fn parse_body<T: DeserializeOwned>(status: u16, text: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, text));
    }
    let raw = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET path?query`.
///
/// # Errors
///
/// See [`request`].
pub async fn get<T: DeserializeOwned>(path: &str, query: &[(&'static str, String)]) -> Result<T, ApiError> {
    request(Method::Get, path, query, None).await
}

/// `POST path` with a JSON body.
///
/// # Errors
///
/// See [`request`].
pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(path: &str, body: &B) -> Result<T, ApiError> {
    request(Method::Post, path, &[], Some(to_body(body)?)).await
}

/// `POST path` without a body (state transitions such as activate/pause).
///
/// # Errors
///
/// See [`request`].
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request(Method::Post, path, &[], None).await
}

/// `PUT path` with a JSON body.
///
/// # Errors
///
/// See [`request`].
pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(path: &str, body: &B) -> Result<T, ApiError> {
    request(Method::Put, path, &[], Some(to_body(body)?)).await
}

/// `DELETE path`.
///
/// # Errors
///
/// See [`request`].
pub async fn delete<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request(Method::Delete, path, &[], None).await
}

/// Send one API request with bearer auth and silent refresh.
///
/// `path` is relative to the API prefix (`/campaigns/3`).
///
/// # Errors
///
/// - [`ApiError::Network`] when no response arrived.
/// - [`ApiError::Unauthorized`] when the session could not be renewed.
/// - [`ApiError::Status`] for any other non-2xx answer.
/// - [`ApiError::Decode`] when the body does not match `T`.
/// - [`ApiError::Unavailable`] outside the browser.
pub async fn request<T: DeserializeOwned>(
    method: Method,
    path: &str,
    query: &[(&'static str, String)],
    body: Option<Value>,
) -> Result<T, ApiError> {
    #[cfg(test)]
    if let Some(transport) = super::scripted::installed() {
        return run(transport.as_ref(), method, path, query, body.as_ref()).await;
    }
    #[cfg(feature = "hydrate")]
    return run(&Browser, method, path, query, body.as_ref()).await;
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, query, body);
        Err(ApiError::Unavailable)
    }
}

/// Request loop: send, refresh once on an expired token, replay.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) async fn run<T: DeserializeOwned, X: Transport>(
    transport: &X,
    method: Method,
    path: &str,
    query: &[(&'static str, String)],
    body: Option<&Value>,
) -> Result<T, ApiError> {
    let mut retried = false;
    loop {
        let access = transport.access_token();
        let (status, text) = transport.exchange(method, path, query, body, access.as_deref()).await?;
        match next_step(status, path, retried, transport.refresh_token().is_some()) {
            Next::Finish => return parse_body(status, &text),
            Next::Refresh => {
                retried = true;
                if let Err(err) = refresh_tokens(transport).await {
                    leptos::logging::warn!("token refresh failed: {err}");
                    transport.expire();
                    return Err(ApiError::Unauthorized);
                }
            }
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
async fn refresh_tokens<X: Transport>(transport: &X) -> Result<(), ApiError> {
    let refresh = transport.refresh_token().ok_or(ApiError::Unauthorized)?;
    let (status, text) = transport.exchange(Method::Post, routes::AUTH_REFRESH, &[], None, Some(&refresh)).await?;
    let pair: TokenPair = parse_body(status, &text)?;
    transport.store_tokens(&pair);
    Ok(())
}

/// `gloo-net` transport with `localStorage` tokens.
#[cfg(feature = "hydrate")]
struct Browser;

#[cfg(feature = "hydrate")]
impl Transport for Browser {
    async fn exchange(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<(u16, String), ApiError> {
        use gloo_net::http::Request;

        let url = endpoint(path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        let mut builder = builder
            .header("Accept", "application/json")
            .query(query.iter().map(|(k, v)| (*k, v.as_str())));
        if let Some(token) = bearer {
            builder = builder.header("Authorization", &auth::bearer(token));
        }
        let request = match body {
            Some(json) => builder.json(json),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok((status, text))
    }

    fn access_token(&self) -> Option<String> {
        crate::util::tokens::access_token()
    }

    fn refresh_token(&self) -> Option<String> {
        crate::util::tokens::refresh_token()
    }

    fn store_tokens(&self, pair: &TokenPair) {
        crate::util::tokens::store(pair);
        log::debug!("access token refreshed");
    }

    /// Clear local credentials and leave for the login page.
    fn expire(&self) {
        crate::util::tokens::clear();
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return;
        };
        let on_auth_page = location.pathname().is_ok_and(|p| is_auth_page(&p));
        if !on_auth_page && location.set_href("/login").is_err() {
            leptos::logging::warn!("redirect to /login failed");
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn is_auth_page(pathname: &str) -> bool {
    matches!(pathname, "/login" | "/register")
}
