//! Campaign endpoints.

use records::query::ListQuery;
use records::{
    ApiError, Campaign, CampaignEnvelope, CampaignId, CampaignPage, CampaignUpdate, MessageEnvelope, NewCampaign,
    TweetPage, routes,
};
use serde_json::Value;

use super::api;

/// # Errors
///
/// Transport, status or decode failure.
pub async fn list(query: &ListQuery) -> Result<CampaignPage, ApiError> {
    api::get(routes::CAMPAIGNS, &query.pairs()).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn get(id: CampaignId) -> Result<Campaign, ApiError> {
    api::get(&routes::campaign(id), &[]).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn create(campaign: &NewCampaign) -> Result<CampaignEnvelope, ApiError> {
    api::post(routes::CAMPAIGNS, campaign).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn update(id: CampaignId, update: &CampaignUpdate) -> Result<CampaignEnvelope, ApiError> {
    api::put(&routes::campaign(id), update).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn delete(id: CampaignId) -> Result<MessageEnvelope, ApiError> {
    api::delete(&routes::campaign(id)).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn activate(id: CampaignId) -> Result<CampaignEnvelope, ApiError> {
    api::post_empty(&routes::campaign_activate(id)).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn pause(id: CampaignId) -> Result<CampaignEnvelope, ApiError> {
    api::post_empty(&routes::campaign_pause(id)).await
}

/// Tweets belonging to one campaign.
///
/// # Errors
///
/// Transport, status or decode failure.
pub async fn tweets(id: CampaignId, query: &ListQuery) -> Result<TweetPage, ApiError> {
    api::get(&routes::campaign_tweets(id), &query.pairs()).await
}

/// Raw performance report; its shape is backend-defined.
///
/// # Errors
///
/// Transport, status or decode failure.
pub async fn performance(id: CampaignId) -> Result<Value, ApiError> {
    api::get(&routes::campaign_performance(id), &[]).await
}
