//! Headline metric tile.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] hint: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{move || value.get()}</span>
            <Show when=move || !hint.is_empty()>
                <span class="stat-card__hint">{hint}</span>
            </Show>
        </div>
    }
}
