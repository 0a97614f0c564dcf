//! Analytics endpoints.

use records::query::{
    AffiliatePerformanceQuery, CampaignPerformanceQuery, CompareQuery, PeriodQuery, ReportQuery, TopTweetsQuery,
    TrendsQuery,
};
use records::{
    AnalyticsReport, ApiError, DashboardStats, EngagementTrends, ExportRequest, PeriodComparison, TopTweet,
    TopTweetsBody, routes,
};
use serde_json::Value;

use super::api;

/// # Errors
///
/// Transport, status or decode failure.
pub async fn dashboard(query: PeriodQuery) -> Result<DashboardStats, ApiError> {
    api::get(routes::ANALYTICS_DASHBOARD, &query.pairs()).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn engagement_trends(query: TrendsQuery) -> Result<EngagementTrends, ApiError> {
    api::get(routes::ANALYTICS_ENGAGEMENT_TRENDS, &query.pairs()).await
}

/// Best-performing posted tweets, accepting both list and wrapped bodies.
///
/// # Errors
///
/// Transport, status or decode failure.
pub async fn top_tweets(query: TopTweetsQuery) -> Result<Vec<TopTweet>, ApiError> {
    let body: TopTweetsBody = api::get(routes::ANALYTICS_TOP_TWEETS, &query.pairs()).await?;
    Ok(body.into_vec())
}

/// Per-campaign metrics; the shape differs between all-campaign and
/// single-campaign answers, so it stays JSON.
///
/// # Errors
///
/// Transport, status or decode failure.
pub async fn campaign_performance(query: CampaignPerformanceQuery) -> Result<Value, ApiError> {
    api::get(routes::ANALYTICS_CAMPAIGN_PERFORMANCE, &query.pairs()).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn affiliate_performance(query: AffiliatePerformanceQuery) -> Result<Value, ApiError> {
    api::get(routes::ANALYTICS_AFFILIATE_PERFORMANCE, &query.pairs()).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn report(query: &ReportQuery) -> Result<AnalyticsReport, ApiError> {
    api::get(routes::ANALYTICS_REPORTS, &query.pairs()).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn compare(query: &CompareQuery) -> Result<PeriodComparison, ApiError> {
    api::get(routes::ANALYTICS_COMPARE, &query.pairs()).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn export(request: &ExportRequest) -> Result<Value, ApiError> {
    api::post(routes::ANALYTICS_EXPORT, request).await
}
