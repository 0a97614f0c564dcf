//! Entity records and request payloads mirrored from the backend schema.
//!
//! DESIGN
//! ======
//! Timestamps stay as the backend's ISO-8601 strings; the client only
//! displays them. Request payloads skip absent optional fields so the backend
//! applies its own defaults instead of receiving explicit `null`s.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type UserId = i64;
pub type CampaignId = i64;
pub type TweetId = i64;
pub type AffiliateLinkId = i64;

// =============================================================================
// STATUSES
// =============================================================================

/// Lifecycle status of a campaign.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Completed,
    /// A status string this client does not know about.
    Other(String),
}

impl CampaignStatus {
    /// Statuses offered in filters and the create form.
    pub const KNOWN: [Self; 4] = [Self::Draft, Self::Active, Self::Paused, Self::Completed];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for CampaignStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "draft" => Self::Draft,
            "active" => Self::Active,
            "paused" => Self::Paused,
            "completed" => Self::Completed,
            _ => Self::Other(raw),
        }
    }
}

impl From<CampaignStatus> for String {
    fn from(status: CampaignStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a tweet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TweetStatus {
    #[default]
    Draft,
    Scheduled,
    Posted,
    Failed,
    Cancelled,
    /// A status string this client does not know about.
    Other(String),
}

impl TweetStatus {
    /// Statuses offered in filters.
    pub const KNOWN: [Self; 5] = [Self::Draft, Self::Scheduled, Self::Posted, Self::Failed, Self::Cancelled];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Posted => "posted",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Other(raw) => raw,
        }
    }

    /// Posted tweets are immutable on the backend.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        !matches!(self, Self::Posted)
    }

    #[must_use]
    pub fn can_schedule(&self) -> bool {
        matches!(self, Self::Draft | Self::Failed | Self::Cancelled | Self::Scheduled)
    }

    #[must_use]
    pub fn can_cancel(&self) -> bool {
        matches!(self, Self::Scheduled)
    }

    #[must_use]
    pub fn can_post(&self) -> bool {
        !matches!(self, Self::Posted)
    }
}

impl From<String> for TweetStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "draft" => Self::Draft,
            "scheduled" => Self::Scheduled,
            "posted" => Self::Posted,
            "failed" => Self::Failed,
            "cancelled" => Self::Cancelled,
            _ => Self::Other(raw),
        }
    }
}

impl From<TweetStatus> for String {
    fn from(status: TweetStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl fmt::Display for TweetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

/// Authenticated account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// True once X API key and secret are stored for this user.
    #[serde(default)]
    pub x_api_configured: bool,
}

/// A named grouping of scheduled posts for one marketing niche.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    #[serde(default)]
    pub niche: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Opaque schedule configuration interpreted by the backend scheduler.
    #[serde(default)]
    pub schedule: Value,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<CampaignMetrics>,
}

/// Aggregated campaign metrics as computed by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignMetrics {
    pub total_tweets: u64,
    pub posted_tweets: u64,
    pub scheduled_tweets: u64,
    pub total_likes: u64,
    pub total_retweets: u64,
    pub total_replies: u64,
    pub total_impressions: u64,
    pub total_clicks: u64,
    pub total_engagement: u64,
    pub avg_likes: f64,
    pub avg_retweets: f64,
    pub avg_replies: f64,
    pub engagement_rate: f64,
    pub click_through_rate: f64,
}

/// A single post record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: TweetId,
    pub content: String,
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(default)]
    pub scheduled_time: Option<String>,
    #[serde(default)]
    pub posted_time: Option<String>,
    #[serde(default)]
    pub status: TweetStatus,
    #[serde(default)]
    pub campaign_id: Option<CampaignId>,
    #[serde(default)]
    pub affiliate_link_id: Option<AffiliateLinkId>,
    /// X-side identifier once posted.
    #[serde(default)]
    pub tweet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<TweetPerformance>,
}

/// A tracked URL with UTM parameters used to attribute revenue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffiliateLink {
    pub id: AffiliateLinkId,
    #[serde(alias = "affiliate_url")]
    pub original_url: String,
    #[serde(default)]
    pub utm_source: Option<String>,
    #[serde(default)]
    pub utm_medium: Option<String>,
    #[serde(default)]
    pub utm_campaign: Option<String>,
    #[serde(default)]
    pub tracked_url: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub commission_rate: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AffiliateLink {
    /// URL to share: the tracked URL when the backend produced one.
    #[must_use]
    pub fn share_url(&self) -> &str {
        self.tracked_url.as_deref().unwrap_or(&self.original_url)
    }

    /// Human label for lists and pickers.
    #[must_use]
    pub fn label(&self) -> &str {
        self.product_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.original_url)
    }
}

fn default_true() -> bool {
    true
}

/// Engagement counters for one posted tweet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetPerformance {
    pub id: i64,
    pub tweet_id: i64,
    pub impressions: u64,
    pub clicks: u64,
    pub retweets: u64,
    pub likes: u64,
    pub replies: u64,
    pub engagement_rate: f64,
    pub recorded_at: Option<String>,
}

/// Daily per-campaign analytics row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSnapshot {
    pub id: i64,
    pub campaign_id: CampaignId,
    pub analytics_date: String,
    pub total_impressions: u64,
    pub total_clicks: u64,
    pub total_revenue: f64,
    pub conversion_rate: f64,
}

// =============================================================================
// ANALYTICS VIEWS
// =============================================================================

/// Headline numbers for the overview and analytics pages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_tweets: u64,
    pub posted_tweets: u64,
    pub active_campaigns: u64,
    pub total_engagement: u64,
    pub click_through_rate: f64,
    pub period_days: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementTrend {
    pub date: String,
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
    pub impressions: u64,
    pub tweet_count: u64,
    pub total_engagement: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementTrends {
    pub trends: Vec<EngagementTrend>,
    pub period: String,
    pub granularity: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopTweet {
    pub id: TweetId,
    pub content: String,
    pub posted_time: Option<String>,
    pub tweet_id: Option<String>,
    pub campaign_id: Option<CampaignId>,
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
    pub impressions: u64,
    pub url_clicks: u64,
    pub total_engagement: u64,
}

/// `/analytics/top-tweets` answers either a bare list or `{ "tweets": [...] }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TopTweetsBody {
    List(Vec<TopTweet>),
    Wrapped {
        #[serde(alias = "top_tweets")]
        tweets: Vec<TopTweet>,
    },
}

impl TopTweetsBody {
    #[must_use]
    pub fn into_vec(self) -> Vec<TopTweet> {
        match self {
            Self::List(tweets) | Self::Wrapped { tweets } => tweets,
        }
    }
}

/// Totals for one affiliate link over `period_days`. Clicks and revenue are
/// backend estimates derived from impressions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkMetrics {
    pub total_tweets: u64,
    pub total_likes: u64,
    pub total_retweets: u64,
    pub total_replies: u64,
    pub total_impressions: u64,
    pub avg_engagement_rate: f64,
    pub estimated_clicks: u64,
    pub estimated_revenue: f64,
}

/// `/affiliate-links/{id}/performance`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkPerformance {
    pub affiliate_link: AffiliateLink,
    #[serde(default)]
    pub performance: LinkMetrics,
    #[serde(default)]
    pub period_days: u32,
}

/// `/affiliate-links/search`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSearchResults {
    pub results: Vec<AffiliateLink>,
    pub total_found: u64,
}

/// `/affiliate-links/categories`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkCategories {
    pub categories: Vec<String>,
    pub total: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportPeriod {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// `/analytics/reports`; the report body varies with the report type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsReport {
    pub report: Value,
    pub period: ReportPeriod,
    #[serde(rename = "type")]
    pub report_type: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodBounds {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// `/analytics/compare`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodComparison {
    pub comparison: Value,
    pub period1: PeriodBounds,
    pub period2: PeriodBounds,
}

/// Output encoding for `/analytics/export`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

/// Dataset selected for `/analytics/export`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportDataType {
    #[default]
    Summary,
    Tweets,
    Campaigns,
    AffiliateLinks,
}

impl ExportDataType {
    pub const ALL: [Self; 4] = [Self::Summary, Self::Tweets, Self::Campaigns, Self::AffiliateLinks];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Tweets => "tweets",
            Self::Campaigns => "campaigns",
            Self::AffiliateLinks => "affiliate_links",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

/// `POST /analytics/export` body; omitted dates default to the last 30 days.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub data_type: ExportDataType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

// =============================================================================
// ENVELOPES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, per_page: 0, total: 0, pages: 1, has_next: false, has_prev: false }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignPage {
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TweetPage {
    #[serde(default)]
    pub tweets: Vec<Tweet>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AffiliateLinkPage {
    #[serde(default)]
    pub affiliate_links: Vec<AffiliateLink>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub campaign: Campaign,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TweetEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub tweet: Tweet,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffiliateLinkEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub affiliate_link: AffiliateLink,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageEnvelope {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostedTweet {
    #[serde(default)]
    pub message: Option<String>,
    pub tweet: Tweet,
    #[serde(default)]
    pub x_tweet_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TweetPerformanceEnvelope {
    pub tweet: Tweet,
    #[serde(default)]
    pub performance: Option<TweetPerformance>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BulkScheduleItem {
    pub tweet_id: TweetId,
    pub scheduled_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BulkSchedule {
    pub tweets: Vec<BulkScheduleItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BulkScheduleFailure {
    #[serde(default)]
    pub tweet_id: Option<TweetId>,
    pub error: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkScheduleResult {
    pub message: Option<String>,
    pub scheduled_tweets: Vec<Value>,
    pub failed_tweets: Vec<BulkScheduleFailure>,
}

// =============================================================================
// AUTH PAYLOADS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Login/registration response carrying the initial token pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    #[serde(default)]
    pub message: Option<String>,
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

impl AuthSession {
    #[must_use]
    pub fn tokens(&self) -> TokenPair {
        TokenPair { access_token: self.access_token.clone(), refresh_token: self.refresh_token.clone() }
    }
}

/// Bearer access token plus the refresh token that rotates with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub user: User,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_api_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_access_token_secret: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

// =============================================================================
// RESOURCE PAYLOADS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCampaign {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTweet {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<CampaignId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_link_id: Option<AffiliateLinkId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TweetStatus>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TweetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_link_id: Option<AffiliateLinkId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTweet {
    pub scheduled_time: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAffiliateLink {
    /// Sent as `affiliate_url`, the field the backend requires.
    #[serde(rename = "affiliate_url", alias = "original_url")]
    pub original_url: String,
    pub product_name: String,
    pub commission_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AffiliateLinkUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
