use super::*;

#[test]
fn empty_list_query_has_no_pairs() {
    assert!(ListQuery::default().pairs().is_empty());
}

#[test]
fn list_query_emits_set_fields_in_order() {
    let query = ListQuery {
        page: Some(2),
        per_page: Some(50),
        status: Some("scheduled".to_owned()),
        campaign_id: Some(4),
    };
    assert_eq!(
        query.pairs(),
        vec![
            ("page", "2".to_owned()),
            ("per_page", "50".to_owned()),
            ("status", "scheduled".to_owned()),
            ("campaign_id", "4".to_owned()),
        ]
    );
}

#[test]
fn list_query_skips_empty_status() {
    let query = ListQuery { status: Some(String::new()), ..ListQuery::default() };
    assert!(query.pairs().is_empty());
}

#[test]
fn affiliate_link_query_trims_search() {
    let query = AffiliateLinkQuery {
        search: Some("  tent ".to_owned()),
        active_only: Some(true),
        ..AffiliateLinkQuery::default()
    };
    assert_eq!(query.pairs(), vec![("search", "tent".to_owned()), ("active_only", "true".to_owned())]);

    let blank = AffiliateLinkQuery { search: Some("   ".to_owned()), ..AffiliateLinkQuery::default() };
    assert!(blank.pairs().is_empty());
}

#[test]
fn period_query_defaults_to_thirty_days() {
    assert_eq!(PeriodQuery::default().pairs(), vec![("days", "30".to_owned())]);
}

#[test]
fn trends_query_adds_granularity() {
    let query = TrendsQuery { period: PeriodQuery { days: 7 }, granularity: Granularity::Weekly };
    assert_eq!(query.pairs(), vec![("days", "7".to_owned()), ("granularity", "weekly".to_owned())]);
}

#[test]
fn top_tweets_query_defaults_limit_ten() {
    assert_eq!(
        TopTweetsQuery::default().pairs(),
        vec![("days", "30".to_owned()), ("limit", "10".to_owned())]
    );
}

#[test]
fn granularity_parse_accepts_backend_values_only() {
    assert_eq!(Granularity::parse("daily"), Some(Granularity::Daily));
    assert_eq!(Granularity::parse("monthly"), Some(Granularity::Monthly));
    assert_eq!(Granularity::parse("hourly"), None);
}

#[test]
fn link_search_query_uses_backend_names() {
    let query = LinkSearchQuery {
        text: Some(" tent ".to_owned()),
        brand: Some("  ".to_owned()),
        min_commission: Some(5.0),
        active_only: Some(false),
        limit: Some(5),
        ..LinkSearchQuery::default()
    };
    assert_eq!(
        query.pairs(),
        vec![
            ("q", "tent".to_owned()),
            ("min_commission", "5".to_owned()),
            ("active_only", "false".to_owned()),
            ("limit", "5".to_owned()),
        ]
    );
}

#[test]
fn performance_queries_add_scope_after_days() {
    let campaigns = CampaignPerformanceQuery { period: PeriodQuery { days: 7 }, campaign_id: Some(3) };
    assert_eq!(campaigns.pairs(), vec![("days", "7".to_owned()), ("campaign_id", "3".to_owned())]);
    let links = AffiliatePerformanceQuery { affiliate_link_id: Some(9), ..AffiliatePerformanceQuery::default() };
    assert_eq!(links.pairs(), vec![("days", "30".to_owned()), ("affiliate_link_id", "9".to_owned())]);
}

#[test]
fn report_query_always_sends_type() {
    assert_eq!(ReportQuery::default().pairs(), vec![("type", "summary".to_owned())]);
    let query = ReportQuery {
        start_date: Some("2026-01-01".to_owned()),
        end_date: Some(String::new()),
        report_type: ReportType::Affiliate,
    };
    assert_eq!(query.pairs(), vec![("start_date", "2026-01-01".to_owned()), ("type", "affiliate".to_owned())]);
    assert_eq!(ReportType::parse("detailed"), Some(ReportType::Detailed));
    assert_eq!(ReportType::parse("weekly"), None);
}

#[test]
fn compare_query_requires_every_bound() {
    let query = CompareQuery::new(["2026-01-01", "2026-01-31", " 2026-02-01 ", "2026-02-28"]).expect("complete");
    assert_eq!(query.pairs()[2], ("period2_start", "2026-02-01".to_owned()));
    assert_eq!(query.pairs().len(), 4);
    assert_eq!(CompareQuery::new(["2026-01-01", "", "2026-02-01", "2026-02-28"]), Err("All period dates are required."));
}
