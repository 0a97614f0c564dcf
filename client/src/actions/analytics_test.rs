use super::*;
use crate::net::scripted::{Scripted, install};

#[test]
fn compare_rejects_missing_bound_without_a_request() {
    let stores = Stores::new();
    let transport = install(Scripted::default());
    let bounds = ["2026-01-01".to_owned(), String::new(), "2026-02-01".to_owned(), "2026-02-28".to_owned()];
    futures::executor::block_on(compare(stores, bounds));
    assert!(transport.calls().is_empty());
    assert_eq!(stores.toasts.get_untracked().toasts[0].text, "All period dates are required.");
}

#[test]
fn compare_stores_both_periods() {
    let stores = Stores::new();
    let transport = install(Scripted::with_tokens("access-1", None).reply(
        200,
        r#"{"comparison": {"likes_change": 12.5}, "period1": {"start": "2026-01-01T00:00:00"}, "period2": {"start": "2026-02-01T00:00:00"}}"#,
    ));
    let bounds = ["2026-01-01", "2026-01-31", "2026-02-01", "2026-02-28"].map(str::to_owned);
    futures::executor::block_on(compare(stores, bounds));

    assert_eq!(transport.calls()[0].path, records::routes::ANALYTICS_COMPARE);
    let state = stores.analytics.get_untracked();
    let comparison = state.comparison.expect("comparison");
    assert_eq!(comparison.comparison["likes_change"], 12.5);
    assert_eq!(comparison.period2.start.as_deref(), Some("2026-02-01T00:00:00"));
    assert!(!state.working);
}

#[test]
fn export_posts_request_and_toasts_record_count() {
    let stores = Stores::new();
    let transport = install(
        Scripted::with_tokens("access-1", None)
            .reply(200, r#"{"data": [{}, {}], "metadata": {"data_type": "tweets", "total_records": 2}}"#),
    );
    let request = ExportRequest { data_type: records::ExportDataType::Tweets, ..ExportRequest::default() };
    futures::executor::block_on(export(stores, request));

    let call = &transport.calls()[0];
    assert_eq!(call.method, crate::net::api::Method::Post);
    assert_eq!(call.body.as_ref().expect("body")["data_type"], "tweets");
    assert_eq!(stores.toasts.get_untracked().toasts[0].text, "Exported 2 records");
}
