use super::*;
use crate::net::api::Method;
use crate::net::scripted::{Scripted, install};

fn seeded(stores: Stores) {
    let existing: records::Campaign = serde_json::from_str(r#"{"id": 1, "name": "Autumn"}"#).expect("campaign");
    stores.campaigns.update(|c| c.list.loaded(vec![existing], records::Pagination::default()));
}

#[test]
fn create_posts_and_prepends_the_new_campaign() {
    let stores = Stores::new();
    seeded(stores);
    let transport = install(Scripted::with_tokens("access-1", Some("refresh-1")).reply(
        201,
        r#"{"message": "Campaign created successfully", "campaign": {"id": 7, "name": "Spring Gear", "status": "active"}}"#,
    ));

    let created = futures::executor::block_on(create(
        stores,
        "  Spring Gear ".to_owned(),
        "outdoors".to_owned(),
        String::new(),
        CampaignStatus::Active,
    ));

    assert!(created);
    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, Method::Post);
    assert_eq!(calls[0].path, records::routes::CAMPAIGNS);
    let body = calls[0].body.clone().expect("json body");
    assert_eq!(body["name"], "Spring Gear");
    assert_eq!(body["niche"], "outdoors");

    let state = stores.campaigns.get_untracked();
    assert_eq!(state.list.items.iter().map(|c| c.id).collect::<Vec<_>>(), vec![7, 1]);
    assert_eq!(state.list.items[0].status, CampaignStatus::Active);
    assert!(!state.list.saving);
    assert_eq!(stores.toasts.get_untracked().toasts[0].text, "Campaign created successfully");
}

#[test]
fn create_rejects_blank_name_without_a_request() {
    let stores = Stores::new();
    let transport = install(Scripted::default());
    let created =
        futures::executor::block_on(create(stores, "   ".to_owned(), String::new(), String::new(), CampaignStatus::Draft));
    assert!(!created);
    assert!(transport.calls().is_empty());
    assert!(stores.campaigns.get_untracked().list.error.is_some());
}

#[test]
fn load_one_fetches_tweets_and_performance_for_the_selection() {
    let stores = Stores::new();
    let transport = install(
        Scripted::with_tokens("access-1", None)
            .reply(200, r#"{"id": 3, "name": "Winter"}"#)
            .reply(200, r#"{"tweets": [{"id": 11, "content": "Deal", "campaign_id": 3}]}"#)
            .reply(200, r#"{"total_clicks": 12}"#),
    );

    futures::executor::block_on(load_one(stores, 3));

    let paths: Vec<String> = transport.calls().into_iter().map(|c| c.path).collect();
    assert_eq!(paths[0], records::routes::campaign(3));
    assert!(paths.contains(&records::routes::campaign_tweets(3)));
    let state = stores.campaigns.get_untracked();
    assert_eq!(state.selected_tweets.items.len(), 1);
    assert!(state.selected_performance.is_some());
}
