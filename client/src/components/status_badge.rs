//! Colored pill for campaign and tweet statuses.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

/// Badge modifier class for a status string from either resource.
pub fn badge_class(status: &str) -> &'static str {
    match status {
        "active" | "posted" => "badge badge--success",
        "scheduled" => "badge badge--info",
        "paused" => "badge badge--warning",
        "failed" | "cancelled" => "badge badge--danger",
        "completed" => "badge badge--muted",
        _ => "badge",
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = badge_class(&status);
    view! { <span class=class>{status}</span> }
}
