//! # client
//!
//! Leptos + WASM dashboard for scheduling X posts and reviewing affiliate
//! analytics. Every screen is a thin view over the external REST backend:
//! pages render forms and lists, stores cache the latest response, and the
//! `net` layer handles bearer auth with silent token refresh.

pub mod actions;
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
