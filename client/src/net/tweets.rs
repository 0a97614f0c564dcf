//! Tweet endpoints, including the scheduling state transitions.

use records::query::ListQuery;
use records::{
    ApiError, BulkSchedule, BulkScheduleResult, MessageEnvelope, NewTweet, PostedTweet, ScheduleTweet, Tweet,
    TweetEnvelope, TweetId, TweetPage, TweetPerformanceEnvelope, TweetUpdate, routes,
};

use super::api;

/// # Errors
///
/// Transport, status or decode failure.
pub async fn list(query: &ListQuery) -> Result<TweetPage, ApiError> {
    api::get(routes::TWEETS, &query.pairs()).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn get(id: TweetId) -> Result<Tweet, ApiError> {
    api::get(&routes::tweet(id), &[]).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn create(tweet: &NewTweet) -> Result<TweetEnvelope, ApiError> {
    api::post(routes::TWEETS, tweet).await
}

/// # Errors
///
/// Posted tweets are rejected by the backend.
pub async fn update(id: TweetId, update: &TweetUpdate) -> Result<TweetEnvelope, ApiError> {
    api::put(&routes::tweet(id), update).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn delete(id: TweetId) -> Result<MessageEnvelope, ApiError> {
    api::delete(&routes::tweet(id)).await
}

/// Publish immediately through the user's X credentials.
///
/// # Errors
///
/// Returns the backend's message when X rejects the post.
pub async fn post_now(id: TweetId) -> Result<PostedTweet, ApiError> {
    api::post_empty(&routes::tweet_post(id)).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn schedule(id: TweetId, schedule: &ScheduleTweet) -> Result<TweetEnvelope, ApiError> {
    api::post(&routes::tweet_schedule(id), schedule).await
}

/// # Errors
///
/// Only scheduled tweets can be cancelled.
pub async fn cancel(id: TweetId) -> Result<TweetEnvelope, ApiError> {
    api::post_empty(&routes::tweet_cancel(id)).await
}

/// # Errors
///
/// Transport, status or decode failure.
pub async fn performance(id: TweetId) -> Result<TweetPerformanceEnvelope, ApiError> {
    api::get(&routes::tweet_performance(id), &[]).await
}

/// Schedule several tweets; per-item failures come back in the result.
///
/// # Errors
///
/// Transport, status or decode failure.
pub async fn bulk_schedule(batch: &BulkSchedule) -> Result<BulkScheduleResult, ApiError> {
    api::post(routes::TWEETS_BULK_SCHEDULE, batch).await
}
