//! Shared record model and REST contract for the affiliate dashboard.
//!
//! This crate owns the request/response shapes used by both `client` and
//! `cli`. The backend owns every entity's lifecycle; these types only mirror
//! what it serializes, so deserialization stays lenient where the backend is
//! inconsistent (unknown statuses, missing metrics, missing pagination).

pub mod auth;
pub mod error;
pub mod model;
pub mod query;
pub mod routes;
pub mod validate;

pub use error::{ApiError, GENERIC_ERROR_MESSAGE, error_message};
pub use model::*;
