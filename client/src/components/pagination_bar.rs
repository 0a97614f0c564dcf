//! Previous/next controls for paginated lists.

#[cfg(test)]
#[path = "pagination_bar_test.rs"]
mod pagination_bar_test;

use leptos::prelude::*;
use records::Pagination;

pub fn page_label(pagination: &Pagination) -> String {
    format!("Page {} of {} · {} total", pagination.page, pagination.pages.max(1), pagination.total)
}

#[component]
pub fn PaginationBar(#[prop(into)] pagination: Signal<Option<Pagination>>, on_page: Callback<u32>) -> impl IntoView {
    let current = move || pagination.get().unwrap_or_default();

    view! {
        <Show when=move || { current().pages > 1 }>
            <div class="pagination">
                <button
                    class="btn btn--ghost"
                    disabled=move || !current().has_prev
                    on:click=move |_| on_page.run(current().page.saturating_sub(1).max(1))
                >
                    "‹ Prev"
                </button>
                <span class="pagination__label">{move || page_label(&current())}</span>
                <button
                    class="btn btn--ghost"
                    disabled=move || !current().has_next
                    on:click=move |_| on_page.run(current().page + 1)
                >
                    "Next ›"
                </button>
            </div>
        </Show>
    }
}
