use super::*;
use records::{CampaignStatus, Pagination};

fn campaign(id: i64, name: &str) -> Campaign {
    Campaign {
        id,
        name: name.to_owned(),
        niche: None,
        description: None,
        schedule: Value::Null,
        status: CampaignStatus::Draft,
        user_id: None,
        created_at: None,
        updated_at: None,
        performance: None,
    }
}

#[test]
fn query_omits_empty_status_and_defaults_page() {
    let state = CampaignsState::default();
    assert_eq!(state.query(), ListQuery { page: Some(1), ..ListQuery::default() });

    let filtered = CampaignsState { status_filter: "active".to_owned(), page: 3, ..CampaignsState::default() };
    assert_eq!(filtered.query().status.as_deref(), Some("active"));
    assert_eq!(filtered.query().page, Some(3));
}

#[test]
fn replace_updates_selected_and_list() {
    let mut state = CampaignsState::default();
    state.list.loaded(vec![campaign(1, "Old")], Pagination::default());
    state.select(campaign(1, "Old"));
    let mut active = campaign(1, "Old");
    active.status = CampaignStatus::Active;
    state.replace(active);
    assert_eq!(state.selected.as_ref().map(|c| c.status.clone()), Some(CampaignStatus::Active));
    assert_eq!(state.list.get(1).map(|c| c.status.clone()), Some(CampaignStatus::Active));
}

#[test]
fn selecting_a_different_campaign_resets_detail_caches() {
    let mut state = CampaignsState::default();
    state.select(campaign(1, "A"));
    state.selected_performance = Some(Value::Bool(true));
    state.select(campaign(1, "A again"));
    assert!(state.selected_performance.is_some());
    state.select(campaign(2, "B"));
    assert!(state.selected_performance.is_none());
}

#[test]
fn remove_clears_detail_when_selected() {
    let mut state = CampaignsState::default();
    state.list.loaded(vec![campaign(1, "A"), campaign(2, "B")], Pagination::default());
    state.select(campaign(2, "B"));
    state.remove(2);
    assert!(state.selected.is_none());
    assert_eq!(state.list.items.len(), 1);
}

#[test]
fn name_of_checks_list_then_selected() {
    let mut state = CampaignsState::default();
    state.list.loaded(vec![campaign(1, "Listed")], Pagination::default());
    state.select(campaign(4, "Detail"));
    assert_eq!(state.name_of(1).as_deref(), Some("Listed"));
    assert_eq!(state.name_of(4).as_deref(), Some("Detail"));
    assert_eq!(state.name_of(9), None);
}
