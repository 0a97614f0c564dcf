//! Analytics views for the chosen period.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use records::query::{DEFAULT_DAYS, Granularity, ReportType};
use records::{AnalyticsReport, DashboardStats, EngagementTrend, PeriodComparison, TopTweet};
use serde_json::Value;

#[derive(Clone, Debug)]
pub struct AnalyticsState {
    pub days: u32,
    pub granularity: Granularity,
    pub dashboard: Option<DashboardStats>,
    pub trends: Vec<EngagementTrend>,
    pub top_tweets: Vec<TopTweet>,
    pub loading: bool,
    pub error: Option<String>,
    /// `/analytics/campaign-performance` for the current period.
    pub campaign_breakdown: Option<Value>,
    /// `/analytics/affiliate-performance` for the current period.
    pub link_breakdown: Option<Value>,
    pub report_type: ReportType,
    pub report: Option<AnalyticsReport>,
    pub comparison: Option<PeriodComparison>,
    /// A report, comparison or export is in flight.
    pub working: bool,
}

impl Default for AnalyticsState {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            granularity: Granularity::Daily,
            dashboard: None,
            trends: Vec::new(),
            top_tweets: Vec::new(),
            loading: false,
            error: None,
            campaign_breakdown: None,
            link_breakdown: None,
            report_type: ReportType::Summary,
            report: None,
            comparison: None,
            working: false,
        }
    }
}

impl AnalyticsState {
    pub fn set_days(&mut self, days: u32) {
        self.days = days;
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, dashboard: DashboardStats, trends: Vec<EngagementTrend>, top_tweets: Vec<TopTweet>) {
        self.dashboard = Some(dashboard);
        self.trends = trends;
        self.top_tweets = top_tweets;
        self.loading = false;
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Largest engagement value in the trend series, for bar scaling.
    pub fn peak_engagement(&self) -> u64 {
        self.trends.iter().map(|t| t.total_engagement).max().unwrap_or(0)
    }
}

/// Flatten a JSON metrics object into `(label, value)` rows.
///
/// Nested objects become dotted labels; arrays are summarized by length.
pub fn metric_rows(value: &Value) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    push_rows(&mut rows, "", value);
    rows
}

fn push_rows(rows: &mut Vec<(String, String)>, prefix: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                let label = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
                push_rows(rows, &label, inner);
            }
        }
        Value::Array(items) => rows.push((prefix.to_owned(), format!("{} items", items.len()))),
        Value::Null => rows.push((prefix.to_owned(), "–".to_owned())),
        Value::String(text) => rows.push((prefix.to_owned(), text.clone())),
        other => rows.push((prefix.to_owned(), other.to_string())),
    }
}

/// Record count from an export answer, in either the JSON or CSV layout.
pub fn export_count(value: &Value) -> u64 {
    value
        .pointer("/metadata/total_records")
        .or_else(|| value.get("total_records"))
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

/// Bar width in percent of the peak, at least 2% for non-zero values.
#[allow(clippy::cast_precision_loss)]
pub fn bar_percent(value: u64, peak: u64) -> f64 {
    if peak == 0 || value == 0 {
        return 0.0;
    }
    (value as f64 / peak as f64 * 100.0).max(2.0)
}
