//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries the parsed config and one pooled `reqwest::Client` used for every
//! proxied backend call.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with a client whose timeout follows `proxy_timeout_secs`.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error when the TLS backend cannot initialize.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }

    /// Absolute backend URL for an API path such as `campaigns/4`.
    #[must_use]
    pub fn backend_url(&self, path: &str, query: Option<&str>) -> String {
        let base = records::routes::join(&self.config.backend_url, records::routes::API_PREFIX);
        let url = records::routes::join(&base, path);
        match query.filter(|q| !q.is_empty()) {
            Some(q) => format!("{url}?{q}"),
            None => url,
        }
    }
}
