//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::User;

/// Authentication state tracking the current user and loading status.
///
/// `loading` starts `true` so route guards wait for session restore before
/// redirecting.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    /// Session restore is in flight.
    pub loading: bool,
    /// A login/register/profile form submission is in flight.
    pub pending: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true, pending: false, error: None }
    }
}

impl AuthState {
    pub fn begin(&mut self) {
        self.pending = true;
        self.error = None;
    }

    pub fn signed_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
        self.pending = false;
        self.error = None;
    }

    pub fn signed_out(&mut self) {
        self.user = None;
        self.loading = false;
        self.pending = false;
    }

    pub fn failed(&mut self, message: String) {
        self.pending = false;
        self.loading = false;
        self.error = Some(message);
    }

    pub fn display_name(&self) -> String {
        self.user.as_ref().map(|u| u.username.clone()).unwrap_or_default()
    }
}
