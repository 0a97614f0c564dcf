//! Email + password sign-in.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions;
use crate::state::use_stores;
use crate::util::auth::install_authed_redirect;

#[component]
pub fn LoginPage() -> impl IntoView {
    let stores = use_stores();
    let auth = stores.auth;
    install_authed_redirect(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().pending {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        actions::spawn(async move {
            if actions::auth::login(stores, email_value, password_value).await {
                password.set(String::new());
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Affiliate Dashboard"</h1>
                <p class="login-card__subtitle">"Sign in to manage campaigns"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || auth.get().pending>
                        {move || if auth.get().pending { "Signing in…" } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || auth.get().error.is_some()>
                    <p class="login-message login-message--error">{move || auth.get().error.unwrap_or_default()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account? "
                    <a href="/register">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
