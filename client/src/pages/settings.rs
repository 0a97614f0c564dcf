//! Account settings: profile, X API credentials, password.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use records::{ProfileUpdate, User, validate};

use crate::actions;
use crate::components::app_shell::AppShell;
use crate::state::use_stores;

/// Profile form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ProfileForm {
    pub username: String,
    pub email: String,
    pub x_api_key: String,
    pub x_api_secret: String,
    pub x_access_token: String,
    pub x_access_token_secret: String,
}

impl ProfileForm {
    pub(crate) fn from_user(user: &User) -> Self {
        Self { username: user.username.clone(), email: user.email.clone(), ..Self::default() }
    }

    /// Unchanged identity fields and blank credentials are omitted.
    pub(crate) fn to_update(&self, user: &User) -> ProfileUpdate {
        let changed = |current: &str, next: &str| {
            let next = next.trim();
            (!next.is_empty() && next != current).then(|| next.to_owned())
        };
        ProfileUpdate {
            username: changed(&user.username, &self.username),
            email: changed(&user.email, &self.email),
            x_api_key: validate::optional(&self.x_api_key),
            x_api_secret: validate::optional(&self.x_api_secret),
            x_access_token: validate::optional(&self.x_access_token),
            x_access_token_secret: validate::optional(&self.x_access_token_secret),
        }
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let stores = use_stores();
    let auth = stores.auth;

    let profile = RwSignal::new(ProfileForm::default());
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    // Refill the identity fields whenever the stored user changes.
    Effect::new(move || {
        if let Some(user) = auth.with(|a| a.user.clone()) {
            profile.set(ProfileForm::from_user(&user));
        }
    });

    let on_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = auth.get_untracked().user else {
            return;
        };
        let update = profile.get_untracked().to_update(&user);
        actions::spawn(async move {
            actions::auth::update_profile(stores, update).await;
        });
    };

    let on_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = (current_password.get_untracked(), new_password.get_untracked(), confirm_password.get_untracked());
        actions::spawn(async move {
            if actions::auth::change_password(stores, form.0, form.1, form.2).await {
                current_password.set(String::new());
                new_password.set(String::new());
                confirm_password.set(String::new());
            }
        });
    };

    let profile_field = move |label: &'static str,
                              kind: &'static str,
                              get: fn(&ProfileForm) -> String,
                              set: fn(&mut ProfileForm, String)| {
        view! {
            <label class="field">
                <span class="field__label">{label}</span>
                <input
                    class="input"
                    type=kind
                    autocomplete="off"
                    prop:value=move || get(&profile.get())
                    on:input=move |ev| profile.update(|p| set(p, event_target_value(&ev)))
                />
            </label>
        }
    };

    let password_field = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="field">
                <span class="field__label">{label}</span>
                <input
                    class="input"
                    type="password"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    let x_configured = move || auth.get().user.is_some_and(|u| u.x_api_configured);

    view! {
        <AppShell title="Settings">
            <section class="panel">
                <h2 class="panel__title">"Profile"</h2>
                <form class="form-grid" on:submit=on_profile>
                    {profile_field("Username", "text", |p| p.username.clone(), |p, v| p.username = v)}
                    {profile_field("Email", "email", |p| p.email.clone(), |p, v| p.email = v)}
                    <h3 class="form-grid__wide">"X API credentials"</h3>
                    <p class="form-grid__wide page__hint">
                        {move || {
                            if x_configured() {
                                "Credentials are stored. Leave fields empty to keep them."
                            } else {
                                "Add your X developer credentials to post and schedule tweets."
                            }
                        }}
                    </p>
                    {profile_field("API key", "password", |p| p.x_api_key.clone(), |p, v| p.x_api_key = v)}
                    {profile_field("API secret", "password", |p| p.x_api_secret.clone(), |p, v| p.x_api_secret = v)}
                    {profile_field("Access token", "password", |p| p.x_access_token.clone(), |p, v| p.x_access_token = v)}
                    {profile_field(
                        "Access token secret",
                        "password",
                        |p| p.x_access_token_secret.clone(),
                        |p, v| p.x_access_token_secret = v,
                    )}
                    <div class="form-grid__wide form-grid__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || auth.get().pending>
                            "Save Profile"
                        </button>
                        <button
                            class="btn"
                            type="button"
                            disabled=move || !x_configured()
                            on:click=move |_| actions::spawn(actions::auth::test_x_api(stores))
                        >
                            "Test X Connection"
                        </button>
                    </div>
                </form>
            </section>

            <section class="panel">
                <h2 class="panel__title">"Change password"</h2>
                <form class="form-grid" on:submit=on_password>
                    {password_field("Current password", current_password)}
                    {password_field("New password", new_password)}
                    {password_field("Confirm new password", confirm_password)}
                    <button class="btn btn--primary" type="submit" disabled=move || auth.get().pending>
                        "Change Password"
                    </button>
                </form>
            </section>
        </AppShell>
    }
}
