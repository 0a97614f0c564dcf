use super::*;
use records::TweetStatus;

fn tweet(id: i64, content: &str) -> Tweet {
    Tweet {
        id,
        content: content.to_owned(),
        media: Vec::new(),
        scheduled_time: None,
        posted_time: None,
        status: TweetStatus::Draft,
        campaign_id: None,
        affiliate_link_id: None,
        tweet_id: None,
        performance: None,
    }
}

fn page(total: u64) -> Pagination {
    Pagination { total, ..Pagination::default() }
}

#[test]
fn begin_load_clears_previous_error() {
    let mut list = Collection::<Tweet>::default();
    list.fail("boom".to_owned());
    list.begin_load();
    assert!(list.loading);
    assert_eq!(list.error, None);
}

#[test]
fn loaded_replaces_items_and_pagination() {
    let mut list = Collection::default();
    list.begin_load();
    list.loaded(vec![tweet(1, "a"), tweet(2, "b")], page(2));
    assert!(!list.loading);
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.pagination.as_ref().map(|p| p.total), Some(2));
    assert_eq!(list.current_page(), 1);
}

#[test]
fn prepend_puts_new_record_first_and_bumps_total() {
    let mut list = Collection::default();
    list.loaded(vec![tweet(1, "a")], page(1));
    list.begin_save();
    list.prepend(tweet(5, "new"));
    assert!(!list.saving);
    assert_eq!(list.items.iter().map(|t| t.id).collect::<Vec<_>>(), vec![5, 1]);
    assert_eq!(list.pagination.as_ref().map(|p| p.total), Some(2));
}

#[test]
fn prepend_does_not_duplicate_existing_id() {
    let mut list = Collection::default();
    list.loaded(vec![tweet(1, "a"), tweet(2, "b")], page(2));
    list.prepend(tweet(2, "b2"));
    assert_eq!(list.items.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(list.items[0].content, "b2");
}

#[test]
fn replace_updates_in_place_and_ignores_unknown_ids() {
    let mut list = Collection::default();
    list.loaded(vec![tweet(1, "a"), tweet(2, "b")], page(2));
    list.replace(tweet(2, "edited"));
    list.replace(tweet(9, "ghost"));
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.get(2).map(|t| t.content.as_str()), Some("edited"));
    assert!(list.get(9).is_none());
}

#[test]
fn remove_drops_record_and_decrements_total_once() {
    let mut list = Collection::default();
    list.loaded(vec![tweet(1, "a"), tweet(2, "b")], page(2));
    list.remove(1);
    list.remove(1);
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.pagination.as_ref().map(|p| p.total), Some(1));
}

#[test]
fn fail_clears_busy_flags() {
    let mut list = Collection::<Tweet>::default();
    list.begin_load();
    list.begin_save();
    list.fail("nope".to_owned());
    assert!(!list.loading);
    assert!(!list.saving);
    assert_eq!(list.error.as_deref(), Some("nope"));
}
