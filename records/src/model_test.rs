use super::*;
use serde_json::json;

// =============================================================
// Statuses
// =============================================================

#[test]
fn campaign_status_parses_known_values() {
    let status: CampaignStatus = serde_json::from_value(json!("active")).expect("status");
    assert_eq!(status, CampaignStatus::Active);
    assert_eq!(serde_json::to_value(CampaignStatus::Paused).expect("json"), json!("paused"));
}

#[test]
fn campaign_status_keeps_unknown_values() {
    let status: CampaignStatus = serde_json::from_value(json!("archived")).expect("status");
    assert_eq!(status, CampaignStatus::Other("archived".to_owned()));
    assert_eq!(status.as_str(), "archived");
    assert_eq!(serde_json::to_value(&status).expect("json"), json!("archived"));
}

#[test]
fn tweet_status_action_rules_follow_lifecycle() {
    assert!(TweetStatus::Draft.can_schedule());
    assert!(TweetStatus::Draft.can_post());
    assert!(!TweetStatus::Draft.can_cancel());

    assert!(TweetStatus::Scheduled.can_cancel());
    assert!(TweetStatus::Scheduled.can_schedule());

    assert!(!TweetStatus::Posted.can_schedule());
    assert!(!TweetStatus::Posted.can_post());
    assert!(!TweetStatus::Posted.can_cancel());
    assert!(!TweetStatus::Posted.is_editable());

    assert!(TweetStatus::Failed.can_schedule());
    assert!(TweetStatus::Failed.is_editable());
}

#[test]
fn tweet_status_display_matches_wire_value() {
    assert_eq!(TweetStatus::Cancelled.to_string(), "cancelled");
    assert_eq!(CampaignStatus::Completed.to_string(), "completed");
}

// =============================================================
// Entities
// =============================================================

#[test]
fn campaign_decodes_backend_to_dict_shape() {
    let campaign: Campaign = serde_json::from_value(json!({
        "id": 4,
        "name": "Spring gear",
        "niche": "outdoors",
        "schedule": { "times": ["09:00"] },
        "status": "active",
        "user_id": 1,
        "created_at": "2025-03-01T10:00:00.000000",
        "updated_at": "2025-03-02T10:00:00.000000"
    }))
    .expect("campaign");
    assert_eq!(campaign.id, 4);
    assert_eq!(campaign.niche.as_deref(), Some("outdoors"));
    assert_eq!(campaign.status, CampaignStatus::Active);
    assert_eq!(campaign.schedule["times"][0], "09:00");
    assert!(campaign.performance.is_none());
}

#[test]
fn campaign_detail_carries_performance_metrics() {
    let campaign: Campaign = serde_json::from_value(json!({
        "id": 4,
        "name": "Spring gear",
        "performance": { "total_tweets": 12, "engagement_rate": 3.5 }
    }))
    .expect("campaign");
    let metrics = campaign.performance.expect("metrics");
    assert_eq!(metrics.total_tweets, 12);
    assert_eq!(metrics.posted_tweets, 0);
    assert!((metrics.engagement_rate - 3.5).abs() < f64::EPSILON);
    assert_eq!(campaign.status, CampaignStatus::Draft);
}

#[test]
fn tweet_decodes_with_missing_optional_fields() {
    let tweet: Tweet = serde_json::from_value(json!({
        "id": 9,
        "content": "New deal",
        "scheduled_time": "2025-04-01T09:00:00",
        "posted_time": null,
        "status": "scheduled",
        "campaign_id": 4
    }))
    .expect("tweet");
    assert!(tweet.media.is_empty());
    assert_eq!(tweet.status, TweetStatus::Scheduled);
    assert_eq!(tweet.affiliate_link_id, None);
    assert_eq!(tweet.tweet_id, None);
}

#[test]
fn affiliate_link_accepts_affiliate_url_alias() {
    let link: AffiliateLink = serde_json::from_value(json!({
        "id": 2,
        "affiliate_url": "https://shop.example/p/1",
        "product_name": "Tent"
    }))
    .expect("link");
    assert_eq!(link.original_url, "https://shop.example/p/1");
    assert!(link.is_active);
    assert_eq!(link.share_url(), "https://shop.example/p/1");
    assert_eq!(link.label(), "Tent");
}

#[test]
fn new_affiliate_link_sends_backend_required_fields() {
    let link = NewAffiliateLink {
        original_url: "https://shop.example/p/1".to_owned(),
        product_name: "Trail Tent".to_owned(),
        commission_rate: 8.0,
        utm_source: Some("x".to_owned()),
        ..NewAffiliateLink::default()
    };
    let wire = serde_json::to_value(&link).expect("json");
    assert_eq!(
        wire,
        json!({
            "affiliate_url": "https://shop.example/p/1",
            "product_name": "Trail Tent",
            "commission_rate": 8.0,
            "utm_source": "x"
        })
    );
    let legacy: NewAffiliateLink = serde_json::from_value(json!({
        "original_url": "https://shop.example/p/2",
        "product_name": "Stove",
        "commission_rate": 5
    }))
    .expect("alias");
    assert_eq!(legacy.original_url, "https://shop.example/p/2");
}

#[test]
fn affiliate_link_prefers_tracked_url_for_sharing() {
    let link: AffiliateLink = serde_json::from_value(json!({
        "id": 2,
        "original_url": "https://shop.example/p/1",
        "tracked_url": "https://shop.example/p/1?utm_source=x_ads",
        "product_name": "  ",
        "is_active": false
    }))
    .expect("link");
    assert_eq!(link.share_url(), "https://shop.example/p/1?utm_source=x_ads");
    assert_eq!(link.label(), "https://shop.example/p/1");
    assert!(!link.is_active);
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn campaign_page_defaults_missing_pagination() {
    let page: CampaignPage = serde_json::from_value(json!({ "campaigns": [] })).expect("page");
    assert!(page.campaigns.is_empty());
    assert_eq!(page.pagination, Pagination::default());
}

#[test]
fn tweet_page_reads_pagination() {
    let page: TweetPage = serde_json::from_value(json!({
        "tweets": [{ "id": 1, "content": "a" }],
        "pagination": { "page": 2, "per_page": 20, "total": 41, "pages": 3, "has_next": true, "has_prev": true }
    }))
    .expect("page");
    assert_eq!(page.tweets.len(), 1);
    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.pagination.total, 41);
    assert!(page.pagination.has_next);
}

#[test]
fn top_tweets_body_accepts_list_and_wrapped_shapes() {
    let listed: TopTweetsBody = serde_json::from_value(json!([{ "id": 1, "content": "a", "likes": 3 }])).expect("list");
    assert_eq!(listed.into_vec()[0].likes, 3);

    let wrapped: TopTweetsBody =
        serde_json::from_value(json!({ "top_tweets": [{ "id": 2, "content": "b" }] })).expect("wrapped");
    assert_eq!(wrapped.into_vec()[0].id, 2);
}

#[test]
fn auth_session_exposes_token_pair() {
    let session: AuthSession = serde_json::from_value(json!({
        "message": "Login successful",
        "user": { "id": 1, "email": "a@b.co", "username": "alice", "role": "admin" },
        "access_token": "acc",
        "refresh_token": "ref"
    }))
    .expect("session");
    assert_eq!(
        session.tokens(),
        TokenPair { access_token: "acc".to_owned(), refresh_token: "ref".to_owned() }
    );
    assert!(!session.user.x_api_configured);
}

#[test]
fn bulk_schedule_result_collects_failures() {
    let result: BulkScheduleResult = serde_json::from_value(json!({
        "message": "Bulk scheduling completed: 1 scheduled, 1 failed",
        "scheduled_tweets": [{ "tweet_id": 1 }],
        "failed_tweets": [{ "tweet_id": 2, "error": "Tweet already posted" }]
    }))
    .expect("result");
    assert_eq!(result.scheduled_tweets.len(), 1);
    assert_eq!(result.failed_tweets[0].tweet_id, Some(2));
    assert_eq!(result.failed_tweets[0].error, "Tweet already posted");
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn new_campaign_omits_absent_fields() {
    let body = NewCampaign { name: "Launch".to_owned(), description: "Q2".to_owned(), ..NewCampaign::default() };
    assert_eq!(serde_json::to_value(&body).expect("json"), json!({ "name": "Launch", "description": "Q2" }));
}

#[test]
fn new_tweet_serializes_status_and_schedule() {
    let body = NewTweet {
        content: "Hello".to_owned(),
        campaign_id: Some(3),
        scheduled_time: Some("2025-05-01T10:00:00".to_owned()),
        status: Some(TweetStatus::Scheduled),
        ..NewTweet::default()
    };
    assert_eq!(
        serde_json::to_value(&body).expect("json"),
        json!({
            "content": "Hello",
            "campaign_id": 3,
            "scheduled_time": "2025-05-01T10:00:00",
            "status": "scheduled"
        })
    );
}

#[test]
fn profile_update_only_sends_changed_fields() {
    let body = ProfileUpdate { username: Some("bob".to_owned()), ..ProfileUpdate::default() };
    assert_eq!(serde_json::to_value(&body).expect("json"), json!({ "username": "bob" }));
}

#[test]
fn link_performance_decodes_estimates() {
    let perf: LinkPerformance = serde_json::from_value(json!({
        "affiliate_link": { "id": 4, "affiliate_url": "https://shop.example/p/4", "category": "outdoors" },
        "performance": { "total_tweets": 2, "total_impressions": 5000, "estimated_clicks": 100, "estimated_revenue": 400.0 },
        "period_days": 30
    }))
    .expect("performance");
    assert_eq!(perf.affiliate_link.category.as_deref(), Some("outdoors"));
    assert_eq!(perf.performance.estimated_clicks, 100);
    assert_eq!(perf.performance.total_likes, 0);
    assert_eq!(perf.period_days, 30);
}

#[test]
fn export_request_uses_snake_case_names() {
    let body = ExportRequest { data_type: ExportDataType::AffiliateLinks, ..ExportRequest::default() };
    assert_eq!(serde_json::to_value(&body).expect("json"), json!({ "format": "json", "data_type": "affiliate_links" }));
    assert_eq!(ExportDataType::parse("tweets"), Some(ExportDataType::Tweets));
}

#[test]
fn report_envelope_keeps_type_and_period() {
    let report: AnalyticsReport = serde_json::from_value(json!({
        "report": { "total_tweets": 3 },
        "period": { "start_date": "2026-01-01T00:00:00", "end_date": "2026-01-31T00:00:00" },
        "type": "summary"
    }))
    .expect("report");
    assert_eq!(report.report_type.as_deref(), Some("summary"));
    assert_eq!(report.period.end_date.as_deref(), Some("2026-01-31T00:00:00"));
    assert_eq!(report.report["total_tweets"], 3);
}
