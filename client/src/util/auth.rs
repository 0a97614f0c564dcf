//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: protected pages
//! bounce anonymous visitors to `/login`, auth pages bounce signed-in users to
//! the overview.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub(crate) fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

pub(crate) fn should_redirect_authed(state: &AuthState) -> bool {
    !state.loading && state.user.is_some()
}

/// `true` while a user is signed in; changes only on sign-in/sign-out, so
/// effects keyed on it do not rerun for unrelated auth updates.
pub fn signed_in(auth: RwSignal<AuthState>) -> Memo<bool> {
    Memo::new(move |_| auth.with(|a| a.user.is_some()))
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/` once a user is signed in (login and register pages).
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&auth.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}
