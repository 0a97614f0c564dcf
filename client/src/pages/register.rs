//! Account registration.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::validate::PASSWORD_MIN_CHARS;

use crate::actions;
use crate::state::use_stores;
use crate::util::auth::install_authed_redirect;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let stores = use_stores();
    let auth = stores.auth;
    install_authed_redirect(auth, use_navigate());

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().pending {
            return;
        }
        let form = (username.get_untracked(), email.get_untracked(), password.get_untracked(), confirm.get_untracked());
        actions::spawn(async move {
            actions::auth::register(stores, form.0, form.1, form.2, form.3).await;
        });
    };

    let field = move |kind: &'static str, placeholder: &'static str, autocomplete: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create account"</h1>
                <p class="login-card__subtitle">
                    {format!("Passwords need at least {PASSWORD_MIN_CHARS} characters")}
                </p>
                <form class="login-form" on:submit=on_submit>
                    {field("text", "Username", "username", username)}
                    {field("email", "you@example.com", "email", email)}
                    {field("password", "Password", "new-password", password)}
                    {field("password", "Confirm password", "new-password", confirm)}
                    <button class="login-button" type="submit" disabled=move || auth.get().pending>
                        {move || if auth.get().pending { "Creating…" } else { "Create Account" }}
                    </button>
                </form>
                <Show when=move || auth.get().error.is_some()>
                    <p class="login-message login-message--error">{move || auth.get().error.unwrap_or_default()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
