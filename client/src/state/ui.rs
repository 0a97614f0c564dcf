//! Local UI chrome state (theme, navigation rail).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the data stores so layout
//! controls can evolve independently of backend records.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub nav_collapsed: bool,
}
