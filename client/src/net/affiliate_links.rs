//! Affiliate link endpoints.

use records::query::{AffiliateLinkQuery, LinkSearchQuery, PeriodQuery};
use records::{
    AffiliateLink, AffiliateLinkEnvelope, AffiliateLinkId, AffiliateLinkPage, AffiliateLinkUpdate, ApiError,
    LinkCategories, LinkPerformance, LinkSearchResults, MessageEnvelope, NewAffiliateLink, routes,
};

use super::api;

/// # Errors
///
/// Transport, status or decode failure.
pub async fn list(query: &AffiliateLinkQuery) -> Result<AffiliateLinkPage, ApiError> {
    api::get(routes::AFFILIATE_LINKS, &query.pairs()).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn get(id: AffiliateLinkId) -> Result<AffiliateLink, ApiError> {
    api::get(&routes::affiliate_link(id), &[]).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn create(link: &NewAffiliateLink) -> Result<AffiliateLinkEnvelope, ApiError> {
    api::post(routes::AFFILIATE_LINKS, link).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn update(id: AffiliateLinkId, update: &AffiliateLinkUpdate) -> Result<AffiliateLinkEnvelope, ApiError> {
    api::put(&routes::affiliate_link(id), update).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn delete(id: AffiliateLinkId) -> Result<MessageEnvelope, ApiError> {
    api::delete(&routes::affiliate_link(id)).await
}

/// Flip `is_active` server-side.
///
/// # Errors
///
/// Transport, status or decode failure.
pub async fn toggle_status(id: AffiliateLinkId) -> Result<AffiliateLinkEnvelope, ApiError> {
    api::post_empty(&routes::affiliate_link_toggle(id)).await
}

/// Engagement and estimated revenue for one link over `query.days`.
///
/// # Errors
///
/// Transport, status or decode failure.
pub async fn performance(id: AffiliateLinkId, query: PeriodQuery) -> Result<LinkPerformance, ApiError> {
    api::get(&routes::affiliate_link_performance(id), &query.pairs()).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn search(query: &LinkSearchQuery) -> Result<LinkSearchResults, ApiError> {
    api::get(routes::AFFILIATE_LINKS_SEARCH, &query.pairs()).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn categories() -> Result<LinkCategories, ApiError> {
    api::get(routes::AFFILIATE_LINKS_CATEGORIES, &[]).await
}
