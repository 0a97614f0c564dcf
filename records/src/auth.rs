//! Bearer-token conventions and the silent-refresh rule.
//!
//! The backend issues an access token and a refresh token together and
//! rotates both on every `/auth/refresh`. A request that fails with 401 is
//! replayed at most once, after a refresh.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::routes::TOKEN_ISSUING;

/// Browser storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Browser storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

pub const UNAUTHORIZED: u16 = 401;

/// `Authorization` header value for a token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Whether a failed request should trigger a refresh-and-replay.
///
/// `path` is the route relative to the API prefix, without a query string.
#[must_use]
pub fn should_refresh(status: u16, path: &str, already_retried: bool, has_refresh_token: bool) -> bool {
    status == UNAUTHORIZED && !already_retried && has_refresh_token && !TOKEN_ISSUING.contains(&path)
}
