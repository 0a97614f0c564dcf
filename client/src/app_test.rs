use super::*;

#[test]
fn nav_items_start_with_overview_and_end_with_settings() {
    assert_eq!(NAV_ITEMS.first().map(|n| n.href), Some("/"));
    assert_eq!(NAV_ITEMS.last().map(|n| n.href), Some("/settings"));
    assert!(NAV_ITEMS.iter().all(|n| n.href != "/login" && n.href != "/register"));
}

#[test]
fn root_is_only_active_on_exact_match() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/campaigns", "/"));
}

#[test]
fn sections_match_their_sub_paths() {
    assert!(is_active("/campaigns", "/campaigns"));
    assert!(is_active("/campaigns/12", "/campaigns"));
    assert!(!is_active("/campaigns-archive", "/campaigns"));
    assert!(!is_active("/tweets", "/campaigns"));
}
