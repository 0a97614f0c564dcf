use super::*;

#[test]
fn default_uses_thirty_day_window() {
    let state = AnalyticsState::default();
    assert_eq!(state.days, 30);
    assert_eq!(state.granularity, Granularity::Daily);
    assert!(state.dashboard.is_none());
}

#[test]
fn begin_load_records_period_and_clears_error() {
    let mut state = AnalyticsState::default();
    state.fail("down".to_owned());
    state.set_days(7);
    state.begin_load();
    assert_eq!(state.days, 7);
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn loaded_keeps_all_three_views() {
    let mut state = AnalyticsState::default();
    state.begin_load();
    state.loaded(
        DashboardStats { total_tweets: 4, ..DashboardStats::default() },
        vec![EngagementTrend { total_engagement: 12, ..EngagementTrend::default() }],
        vec![TopTweet { id: 1, ..TopTweet::default() }],
    );
    assert!(!state.loading);
    assert_eq!(state.dashboard.as_ref().map(|d| d.total_tweets), Some(4));
    assert_eq!(state.peak_engagement(), 12);
    assert_eq!(state.top_tweets.len(), 1);
}

#[test]
fn bar_percent_scales_against_peak() {
    assert!((bar_percent(50, 100) - 50.0).abs() < f64::EPSILON);
    assert!((bar_percent(1, 1000) - 2.0).abs() < f64::EPSILON);
    assert!(bar_percent(0, 100).abs() < f64::EPSILON);
    assert!(bar_percent(5, 0).abs() < f64::EPSILON);
}

#[test]
fn metric_rows_flatten_nested_objects() {
    let value = serde_json::json!({
        "period": "30 days",
        "totals": { "clicks": 12, "revenue": 4.5 },
        "campaigns": [1, 2, 3],
        "note": null
    });
    let rows = metric_rows(&value);
    assert!(rows.contains(&("period".to_owned(), "30 days".to_owned())));
    assert!(rows.contains(&("totals.clicks".to_owned(), "12".to_owned())));
    assert!(rows.contains(&("totals.revenue".to_owned(), "4.5".to_owned())));
    assert!(rows.contains(&("campaigns".to_owned(), "3 items".to_owned())));
    assert!(rows.contains(&("note".to_owned(), "–".to_owned())));
}

#[test]
fn export_count_reads_both_layouts() {
    assert_eq!(export_count(&serde_json::json!({ "data": [], "metadata": { "total_records": 7 } })), 7);
    assert_eq!(export_count(&serde_json::json!({ "data_preview": [], "total_records": 2 })), 2);
    assert_eq!(export_count(&serde_json::json!({})), 0);
}
