//! Session actions.

use leptos::prelude::*;
use records::{AuthSession, Credentials, PasswordChange, ProfileUpdate, Registration, validate};

use super::{notify, reject, report, succeed};
use crate::net;
use crate::state::Stores;
use crate::state::toast::ToastKind;
use crate::util::tokens;

/// Resolve the stored tokens into a user, or settle as signed out.
pub async fn restore_session(stores: Stores) {
    if tokens::load().is_none() {
        stores.auth.update(|a| a.signed_out());
        return;
    }
    match net::auth::profile().await {
        Ok(envelope) => stores.auth.update(|a| a.signed_in(envelope.user)),
        Err(err) => {
            leptos::logging::warn!("session restore failed: {err}");
            stores.auth.update(|a| a.signed_out());
        }
    }
}

fn start_session(stores: Stores, session: AuthSession, greeting: &str) {
    tokens::store(&session.tokens());
    let name = session.user.username.clone();
    stores.auth.update(|a| a.signed_in(session.user));
    notify(stores, ToastKind::Success, format!("{greeting}, {name}"));
}

/// Returns `true` once signed in.
pub async fn login(stores: Stores, email: String, password: String) -> bool {
    let (email, password) = match validate::credentials(&email, &password) {
        Ok(pair) => pair,
        Err(msg) => {
            stores.auth.update(|a| a.failed(msg.to_owned()));
            return false;
        }
    };
    stores.auth.update(|a| a.begin());
    match net::auth::login(&Credentials { email, password }).await {
        Ok(session) => {
            start_session(stores, session, "Welcome back");
            true
        }
        Err(err) => {
            let message = report(stores, &err);
            stores.auth.update(|a| a.failed(message));
            false
        }
    }
}

/// Returns `true` once the account exists and is signed in.
pub async fn register(stores: Stores, username: String, email: String, password: String, confirm: String) -> bool {
    let checked = validate::username(&username).and_then(|username| {
        let (email, _) = validate::credentials(&email, &password)?;
        let password = validate::new_password(&password, &confirm)?;
        Ok(Registration { email, username, password })
    });
    let registration = match checked {
        Ok(registration) => registration,
        Err(msg) => {
            stores.auth.update(|a| a.failed(msg.to_owned()));
            return false;
        }
    };
    stores.auth.update(|a| a.begin());
    match net::auth::register(&registration).await {
        Ok(session) => {
            start_session(stores, session, "Welcome");
            true
        }
        Err(err) => {
            let message = report(stores, &err);
            stores.auth.update(|a| a.failed(message));
            false
        }
    }
}

/// Sign out locally even when the backend call fails.
pub async fn logout(stores: Stores) {
    if let Err(err) = net::auth::logout().await {
        leptos::logging::warn!("logout request failed: {err}");
    }
    tokens::clear();
    stores.auth.update(|a| a.signed_out());
    stores.reset_data();
    notify(stores, ToastKind::Info, "Signed out");
}

pub async fn update_profile(stores: Stores, update: ProfileUpdate) -> bool {
    stores.auth.update(|a| a.begin());
    match net::auth::update_profile(&update).await {
        Ok(envelope) => {
            stores.auth.update(|a| a.signed_in(envelope.user));
            succeed(stores, envelope.message, "Profile updated");
            true
        }
        Err(err) => {
            let message = report(stores, &err);
            stores.auth.update(|a| a.failed(message));
            false
        }
    }
}

pub async fn change_password(stores: Stores, current: String, new: String, confirm: String) -> bool {
    if current.is_empty() {
        let message = reject(stores, "Enter your current password.");
        stores.auth.update(|a| a.failed(message));
        return false;
    }
    let new_password = match validate::new_password(&new, &confirm) {
        Ok(password) => password,
        Err(msg) => {
            let message = reject(stores, msg);
            stores.auth.update(|a| a.failed(message));
            return false;
        }
    };
    stores.auth.update(|a| a.begin());
    match net::auth::change_password(&PasswordChange { current_password: current, new_password }).await {
        Ok(envelope) => {
            stores.auth.update(|a| a.pending = false);
            succeed(stores, envelope.message, "Password changed");
            true
        }
        Err(err) => {
            let message = report(stores, &err);
            stores.auth.update(|a| a.failed(message));
            false
        }
    }
}

/// Check the stored X API credentials against X.
pub async fn test_x_api(stores: Stores) {
    match net::auth::test_x_api().await {
        Ok(envelope) => succeed(stores, envelope.message, "X API connection works"),
        Err(err) => {
            report(stores, &err);
        }
    }
}
