//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport (bearer header, refresh-and-replay, error
//! decoding); the per-resource modules map typed calls onto routes from
//! `records::routes`.

pub mod affiliate_links;
pub mod analytics;
pub mod api;
pub mod auth;
pub mod campaigns;
#[cfg(test)]
pub(crate) mod scripted;
pub mod tweets;
