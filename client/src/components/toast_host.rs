//! Stacked toast notifications.

use leptos::prelude::*;

use crate::state::use_stores;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_stores().toasts;

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.kind.css_class() role="status">
                                <span class="toast__text">{toast.text}</span>
                                <button
                                    class="toast__close"
                                    title="Dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
