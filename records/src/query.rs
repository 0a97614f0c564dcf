//! Typed list filters rendered as query-string pairs.
//!
//! Both HTTP stacks in the workspace (`gloo-net` in the browser, `reqwest` in
//! the CLI) accept `(key, value)` iterators, so filters stop at that shape.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::model::{AffiliateLinkId, CampaignId};

pub type QueryPairs = Vec<(&'static str, String)>;

/// Default analytics window, matching the backend default.
pub const DEFAULT_DAYS: u32 = 30;

/// Period choices offered by the analytics views.
pub const PERIOD_CHOICES: [u32; 3] = [7, 30, 90];

/// Filters for `/campaigns`, `/tweets` and `/campaigns/{id}/tweets`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<String>,
    pub campaign_id: Option<CampaignId>,
}

impl ListQuery {
    #[must_use]
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("status", status.to_owned()));
        }
        if let Some(campaign_id) = self.campaign_id {
            pairs.push(("campaign_id", campaign_id.to_string()));
        }
        pairs
    }
}

/// Filters for `/affiliate-links`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AffiliateLinkQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub active_only: Option<bool>,
}

impl AffiliateLinkQuery {
    #[must_use]
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_owned()));
        }
        if let Some(active_only) = self.active_only {
            pairs.push(("active_only", active_only.to_string()));
        }
        pairs
    }
}

/// Analytics period filter (`days`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodQuery {
    pub days: u32,
}

impl Default for PeriodQuery {
    fn default() -> Self {
        Self { days: DEFAULT_DAYS }
    }
}

impl PeriodQuery {
    #[must_use]
    pub fn pairs(&self) -> QueryPairs {
        vec![("days", self.days.to_string())]
    }
}

/// Bucket size for `/analytics/engagement-trends`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Granularity {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrendsQuery {
    pub period: PeriodQuery,
    pub granularity: Granularity,
}

impl TrendsQuery {
    #[must_use]
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = self.period.pairs();
        pairs.push(("granularity", self.granularity.as_str().to_owned()));
        pairs
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopTweetsQuery {
    pub period: PeriodQuery,
    pub limit: u32,
}

impl Default for TopTweetsQuery {
    fn default() -> Self {
        Self { period: PeriodQuery::default(), limit: 10 }
    }
}

impl TopTweetsQuery {
    #[must_use]
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = self.period.pairs();
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }
}

/// Filters for `/affiliate-links/search`. The backend defaults
/// `active_only` to `true` and orders by commission, highest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkSearchQuery {
    pub text: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub min_commission: Option<f64>,
    pub max_commission: Option<f64>,
    pub active_only: Option<bool>,
    pub limit: Option<u32>,
}

impl LinkSearchQuery {
    #[must_use]
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        let trimmed = |value: &Option<String>| value.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned);
        if let Some(text) = trimmed(&self.text) {
            pairs.push(("q", text));
        }
        if let Some(category) = trimmed(&self.category) {
            pairs.push(("category", category));
        }
        if let Some(brand) = trimmed(&self.brand) {
            pairs.push(("brand", brand));
        }
        if let Some(min) = self.min_commission {
            pairs.push(("min_commission", min.to_string()));
        }
        if let Some(max) = self.max_commission {
            pairs.push(("max_commission", max.to_string()));
        }
        if let Some(active_only) = self.active_only {
            pairs.push(("active_only", active_only.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// `/analytics/campaign-performance`, optionally narrowed to one campaign.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CampaignPerformanceQuery {
    pub period: PeriodQuery,
    pub campaign_id: Option<CampaignId>,
}

impl CampaignPerformanceQuery {
    #[must_use]
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = self.period.pairs();
        if let Some(id) = self.campaign_id {
            pairs.push(("campaign_id", id.to_string()));
        }
        pairs
    }
}

/// `/analytics/affiliate-performance`, optionally narrowed to one link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AffiliatePerformanceQuery {
    pub period: PeriodQuery,
    pub affiliate_link_id: Option<AffiliateLinkId>,
}

impl AffiliatePerformanceQuery {
    #[must_use]
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = self.period.pairs();
        if let Some(id) = self.affiliate_link_id {
            pairs.push(("affiliate_link_id", id.to_string()));
        }
        pairs
    }
}

/// Report flavours offered by `/analytics/reports`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportType {
    #[default]
    Summary,
    Detailed,
    Campaign,
    Affiliate,
}

impl ReportType {
    pub const ALL: [Self; 4] = [Self::Summary, Self::Detailed, Self::Campaign, Self::Affiliate];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Detailed => "detailed",
            Self::Campaign => "campaign",
            Self::Affiliate => "affiliate",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

/// `/analytics/reports`; omitted dates default to the last 30 days.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub report_type: ReportType,
}

impl ReportQuery {
    #[must_use]
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(start) = self.start_date.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("start_date", start.to_owned()));
        }
        if let Some(end) = self.end_date.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("end_date", end.to_owned()));
        }
        pairs.push(("type", self.report_type.as_str().to_owned()));
        pairs
    }
}

/// Two ISO date ranges for `/analytics/compare`; all four bounds are required.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareQuery {
    pub period1_start: String,
    pub period1_end: String,
    pub period2_start: String,
    pub period2_end: String,
}

impl CompareQuery {
    /// # Errors
    ///
    /// Returns a user-facing message when any bound is blank.
    pub fn new(bounds: [&str; 4]) -> Result<Self, &'static str> {
        let [period1_start, period1_end, period2_start, period2_end] = bounds.map(|b| b.trim().to_owned());
        if [&period1_start, &period1_end, &period2_start, &period2_end].iter().any(|b| b.is_empty()) {
            return Err("All period dates are required.");
        }
        Ok(Self { period1_start, period1_end, period2_start, period2_end })
    }

    #[must_use]
    pub fn pairs(&self) -> QueryPairs {
        vec![
            ("period1_start", self.period1_start.clone()),
            ("period1_end", self.period1_end.clone()),
            ("period2_start", self.period2_start.clone()),
            ("period2_end", self.period2_end.clone()),
        ]
    }
}
