//! Store actions: one backend call each, applied to the stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these from `spawn_local`. Each action flips the store's busy
//! flag, awaits one endpoint, applies a reducer on success and raises a toast.
//! Failures land on the store's `error` field and in an error toast; an
//! expired session also signs the auth store out.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod affiliate_links;
pub mod analytics;
pub mod auth;
pub mod campaigns;
pub mod tweets;

use leptos::prelude::*;
use records::ApiError;

use crate::state::Stores;
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_TTL_MS;
use crate::state::toast::ToastKind;

/// Run an action from an event handler; a no-op during server rendering.
pub fn spawn<F>(action: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(action);
    #[cfg(not(feature = "hydrate"))]
    drop(action);
}

/// Push a toast and schedule its dismissal.
pub fn notify(stores: Stores, kind: ToastKind, text: impl Into<String>) {
    let Some(id) = stores.toasts.try_update(|t| t.push(kind, text)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        stores.toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Toast a mutation's success, preferring the backend's own wording.
pub(crate) fn succeed(stores: Stores, message: Option<String>, fallback: &str) {
    notify(stores, ToastKind::Success, success_text(message, fallback));
}

/// Toast a failure and return the message for the store.
pub(crate) fn report(stores: Stores, err: &ApiError) -> String {
    leptos::logging::warn!("api call failed: {err}");
    if matches!(err, ApiError::Unauthorized) {
        stores.auth.update(crate::state::auth::AuthState::signed_out);
    }
    let message = err.user_message();
    notify(stores, ToastKind::Error, message.clone());
    message
}

/// Toast a client-side validation failure and return it for the store.
pub(crate) fn reject(stores: Stores, message: &str) -> String {
    notify(stores, ToastKind::Error, message);
    message.to_owned()
}

pub(crate) fn success_text(message: Option<String>, fallback: &str) -> String {
    message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| fallback.to_owned())
}
