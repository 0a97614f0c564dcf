//! `reqwest` transport for the REST backend.
//!
//! AUTH FLOW
//! =========
//! Same policy as the dashboard: every request carries the access token, and
//! a 401 on a non-token route triggers one `POST /auth/refresh` with the
//! refresh token followed by a single replay. Only a failed refresh clears the
//! session; any other 401 is reported with the server's message. The CLI has
//! no storage, so a rotated pair is kept on the client and reported by the
//! caller.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::auth;
use records::routes::{self, AUTH_REFRESH};
use records::{ApiError, TokenPair};
use reqwest::Method;
use serde_json::Value;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
    refresh_token: Option<String>,
    rotated: bool,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when the TLS backend cannot initialize.
    pub fn new(base_url: &str, access_token: Option<String>, refresh_token: Option<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            access_token: non_empty(access_token),
            refresh_token: non_empty(refresh_token),
            rotated: false,
        })
    }

    /// Adopt a pair issued by login/registration.
    pub fn set_tokens(&mut self, pair: &TokenPair) {
        self.access_token = Some(pair.access_token.clone());
        self.refresh_token = Some(pair.refresh_token.clone());
        self.rotated = true;
    }

    pub fn clear_tokens(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
        self.rotated = false;
    }

    /// The current pair, if it changed during this run.
    #[must_use]
    pub fn rotated_tokens(&self) -> Option<TokenPair> {
        if !self.rotated {
            return None;
        }
        Some(TokenPair {
            access_token: self.access_token.clone()?,
            refresh_token: self.refresh_token.clone()?,
        })
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        routes::join(&self.base_url, path)
    }

    /// Send one request, refreshing and replaying once on an expired token.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] when no response arrived
    /// - [`ApiError::Unauthorized`] when the token refresh fails
    /// - [`ApiError::Status`] for any other non-2xx answer
    /// - [`ApiError::Decode`] when a success body is not JSON
    pub async fn request(
        &mut self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let mut retried = false;
        loop {
            let bearer = self.access_token.clone();
            let (status, text) = self.send(method.clone(), path, query, body, bearer.as_deref()).await?;

            if auth::should_refresh(status, path, retried, self.refresh_token.is_some()) {
                tracing::debug!(%path, "access token rejected, refreshing");
                retried = true;
                if self.refresh().await.is_ok() {
                    continue;
                }
                self.clear_tokens();
                return Err(ApiError::Unauthorized);
            }
            return parse_body(status, &text);
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<(u16, String), ApiError> {
        let mut request = self.http.request(method, self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = bearer {
            request = request.header(reqwest::header::AUTHORIZATION, auth::bearer(token));
        }
        if let Some(json) = body {
            request = request.json(json);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%path, error = %e, "request failed before a response");
            ApiError::Network(e.to_string())
        })?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        tracing::debug!(%path, status, "response received");
        Ok((status, text))
    }

    async fn refresh(&mut self) -> Result<(), ApiError> {
        let token = self.refresh_token.clone().ok_or(ApiError::Unauthorized)?;
        let (status, text) = self.send(Method::POST, AUTH_REFRESH, &[], None, Some(&token)).await?;
        let value = parse_body(status, &text)?;
        let pair: TokenPair = serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;
        tracing::debug!("token pair rotated");
        self.set_tokens(&pair);
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Decode a body given its status; empty success bodies become `null`.
///
/// # Errors
///
/// Non-2xx statuses become [`ApiError::Status`] with the server's message.
pub fn parse_body(status: u16, text: &str) -> Result<Value, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, text));
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}
