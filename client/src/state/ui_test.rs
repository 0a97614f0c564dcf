use super::*;

#[test]
fn ui_state_defaults_to_light_expanded_layout() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.nav_collapsed);
}
