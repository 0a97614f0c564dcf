//! Access/refresh token persistence.
//!
//! Both tokens live in `localStorage` under the keys from `records::auth`, so
//! a reload keeps the session. The pair is only considered present when both
//! halves are non-empty.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

use records::TokenPair;
use records::auth::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

use super::storage;

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Combine stored halves into a pair.
pub(crate) fn pair_from(access: Option<String>, refresh: Option<String>) -> Option<TokenPair> {
    Some(TokenPair { access_token: non_empty(access)?, refresh_token: non_empty(refresh)? })
}

pub fn load() -> Option<TokenPair> {
    pair_from(storage::get_item(ACCESS_TOKEN_KEY), storage::get_item(REFRESH_TOKEN_KEY))
}

pub fn store(pair: &TokenPair) {
    storage::set_item(ACCESS_TOKEN_KEY, &pair.access_token);
    storage::set_item(REFRESH_TOKEN_KEY, &pair.refresh_token);
}

pub fn clear() {
    storage::remove_item(ACCESS_TOKEN_KEY);
    storage::remove_item(REFRESH_TOKEN_KEY);
}

pub fn access_token() -> Option<String> {
    non_empty(storage::get_item(ACCESS_TOKEN_KEY))
}

pub fn refresh_token() -> Option<String> {
    non_empty(storage::get_item(REFRESH_TOKEN_KEY))
}
