//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and shared widgets while reading/writing
//! the stores provided through Leptos context.

pub mod app_shell;
pub mod confirm_dialog;
pub mod pagination_bar;
pub mod stat_card;
pub mod status_badge;
pub mod toast_host;
