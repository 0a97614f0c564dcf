//! Account endpoints under `/auth`.

use records::{
    ApiError, AuthSession, Credentials, MessageEnvelope, PasswordChange, ProfileEnvelope, ProfileUpdate, Registration,
    routes,
};

use super::api;

/// Exchange credentials for a session and token pair.
///
/// # Errors
///
/// Returns the backend's message (for example "Invalid credentials").
pub async fn login(credentials: &Credentials) -> Result<AuthSession, ApiError> {
    api::post(routes::AUTH_LOGIN, credentials).await
}

/// Create an account; the backend signs the new user in.
///
/// # Errors
///
/// Returns the backend's message (duplicate email or username).
pub async fn register(registration: &Registration) -> Result<AuthSession, ApiError> {
    api::post(routes::AUTH_REGISTER, registration).await
}

/// # Errors
///
/// Transport or status failure.
pub async fn logout() -> Result<MessageEnvelope, ApiError> {
    api::post_empty(routes::AUTH_LOGOUT).await
}

/// Fetch the signed-in user.
///
/// # Errors
///
/// [`ApiError::Unauthorized`] when no session can be restored.
pub async fn profile() -> Result<ProfileEnvelope, ApiError> {
    api::get(routes::AUTH_PROFILE, &[]).await
}

/// # Errors
///
/// Transport or status failure.
pub async fn update_profile(update: &ProfileUpdate) -> Result<ProfileEnvelope, ApiError> {
    api::put(routes::AUTH_PROFILE, update).await
}

/// # Errors
///
/// Returns the backend's message when the current password is wrong.
pub async fn change_password(change: &PasswordChange) -> Result<MessageEnvelope, ApiError> {
    api::post(routes::AUTH_CHANGE_PASSWORD, change).await
}

/// Ask the backend to verify the stored X API credentials.
///
/// # Errors
///
/// Returns the backend's message when the credentials are rejected.
pub async fn test_x_api() -> Result<MessageEnvelope, ApiError> {
    api::post_empty(routes::AUTH_TEST_X_API).await
}
