//! REST route table, relative to [`API_PREFIX`].

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::model::{AffiliateLinkId, CampaignId, TweetId};

/// Mount point of the backend API on the dashboard origin.
pub const API_PREFIX: &str = "/api";

pub const HEALTH: &str = "/health";

pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_REGISTER: &str = "/auth/register";
pub const AUTH_REFRESH: &str = "/auth/refresh";
pub const AUTH_LOGOUT: &str = "/auth/logout";
pub const AUTH_PROFILE: &str = "/auth/profile";
pub const AUTH_CHANGE_PASSWORD: &str = "/auth/change-password";
pub const AUTH_TEST_X_API: &str = "/auth/test-x-api";

pub const CAMPAIGNS: &str = "/campaigns";
pub const TWEETS: &str = "/tweets";
pub const TWEETS_BULK_SCHEDULE: &str = "/tweets/bulk-schedule";
pub const AFFILIATE_LINKS: &str = "/affiliate-links";
pub const AFFILIATE_LINKS_SEARCH: &str = "/affiliate-links/search";
pub const AFFILIATE_LINKS_CATEGORIES: &str = "/affiliate-links/categories";

pub const ANALYTICS_DASHBOARD: &str = "/analytics/dashboard";
pub const ANALYTICS_ENGAGEMENT_TRENDS: &str = "/analytics/engagement-trends";
pub const ANALYTICS_TOP_TWEETS: &str = "/analytics/top-tweets";
pub const ANALYTICS_CAMPAIGN_PERFORMANCE: &str = "/analytics/campaign-performance";
pub const ANALYTICS_AFFILIATE_PERFORMANCE: &str = "/analytics/affiliate-performance";
pub const ANALYTICS_REPORTS: &str = "/analytics/reports";
pub const ANALYTICS_COMPARE: &str = "/analytics/compare";
pub const ANALYTICS_EXPORT: &str = "/analytics/export";

/// Endpoints that issue tokens; a 401 from these never triggers a refresh.
pub const TOKEN_ISSUING: [&str; 3] = [AUTH_LOGIN, AUTH_REGISTER, AUTH_REFRESH];

/// Join a route onto an API base such as `/api` or `http://host/api`.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[must_use]
pub fn campaign(id: CampaignId) -> String {
    format!("{CAMPAIGNS}/{id}")
}

#[must_use]
pub fn campaign_tweets(id: CampaignId) -> String {
    format!("{CAMPAIGNS}/{id}/tweets")
}

#[must_use]
pub fn campaign_performance(id: CampaignId) -> String {
    format!("{CAMPAIGNS}/{id}/performance")
}

#[must_use]
pub fn campaign_activate(id: CampaignId) -> String {
    format!("{CAMPAIGNS}/{id}/activate")
}

#[must_use]
pub fn campaign_pause(id: CampaignId) -> String {
    format!("{CAMPAIGNS}/{id}/pause")
}

#[must_use]
pub fn tweet(id: TweetId) -> String {
    format!("{TWEETS}/{id}")
}

#[must_use]
pub fn tweet_post(id: TweetId) -> String {
    format!("{TWEETS}/{id}/post")
}

#[must_use]
pub fn tweet_schedule(id: TweetId) -> String {
    format!("{TWEETS}/{id}/schedule")
}

#[must_use]
pub fn tweet_cancel(id: TweetId) -> String {
    format!("{TWEETS}/{id}/cancel")
}

#[must_use]
pub fn tweet_performance(id: TweetId) -> String {
    format!("{TWEETS}/{id}/performance")
}

#[must_use]
pub fn affiliate_link(id: AffiliateLinkId) -> String {
    format!("{AFFILIATE_LINKS}/{id}")
}

#[must_use]
pub fn affiliate_link_toggle(id: AffiliateLinkId) -> String {
    format!("{AFFILIATE_LINKS}/{id}/toggle-status")
}

#[must_use]
pub fn affiliate_link_performance(id: AffiliateLinkId) -> String {
    format!("{AFFILIATE_LINKS}/{id}/performance")
}
