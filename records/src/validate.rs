//! Form checks shared by the web pages and the CLI.
//!
//! The backend re-validates everything; these only catch the obvious cases
//! early so the user sees a message without a round-trip.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// X post length limit enforced by the backend.
pub const TWEET_MAX_CHARS: usize = 280;

/// Minimum password length accepted at registration.
pub const PASSWORD_MIN_CHARS: usize = 8;

/// Trimmed, non-empty campaign name.
///
/// # Errors
///
/// Returns a user-facing message when the name is blank.
pub fn campaign_name(raw: &str) -> Result<String, &'static str> {
    required(raw, "Campaign name is required.")
}

/// Trimmed tweet body of at most [`TWEET_MAX_CHARS`] characters.
///
/// # Errors
///
/// Returns a user-facing message when the body is blank or too long.
pub fn tweet_content(raw: &str) -> Result<String, &'static str> {
    let content = required(raw, "Tweet content is required.")?;
    if content.chars().count() > TWEET_MAX_CHARS {
        return Err("Tweet content exceeds 280 characters.");
    }
    Ok(content)
}

/// Characters left before hitting [`TWEET_MAX_CHARS`]; negative when over.
#[must_use]
pub fn remaining_chars(raw: &str) -> i64 {
    let used = i64::try_from(raw.trim().chars().count()).unwrap_or(i64::MAX);
    i64::try_from(TWEET_MAX_CHARS).unwrap_or(i64::MAX) - used
}

/// Absolute `http`/`https` URL with a host.
///
/// # Errors
///
/// Returns a user-facing message when the URL is blank or not absolute.
pub fn link_url(raw: &str) -> Result<String, &'static str> {
    let value = required(raw, "URL is required.")?;
    let Ok(parsed) = url::Url::parse(&value) else {
        return Err("Enter a full URL, e.g. https://shop.example/item.");
    };
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none_or(str::is_empty) {
        return Err("Enter a full URL, e.g. https://shop.example/item.");
    }
    Ok(value)
}

/// Trimmed, non-empty product name for a new link.
///
/// # Errors
///
/// Returns a user-facing message when the name is blank.
pub fn product_name(raw: &str) -> Result<String, &'static str> {
    required(raw, "Product name is required.")
}

/// Commission percentage in `0..=100`.
///
/// # Errors
///
/// Returns a user-facing message when the value is missing or not a number
/// in range.
pub fn commission_rate(raw: &str) -> Result<f64, &'static str> {
    let trimmed = required(raw, "Commission rate is required.")?;
    let Ok(rate) = trimmed.parse::<f64>() else {
        return Err("Commission rate must be a number.");
    };
    if !(0.0..=100.0).contains(&rate) {
        return Err("Commission rate must be between 0 and 100.");
    }
    Ok(rate)
}

/// Login form: both fields present.
///
/// # Errors
///
/// Returns a user-facing message when either field is blank.
pub fn credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Trimmed, non-empty username.
///
/// # Errors
///
/// Returns a user-facing message when the username is blank.
pub fn username(raw: &str) -> Result<String, &'static str> {
    required(raw, "Username is required.")
}

/// Registration / password-change rule.
///
/// # Errors
///
/// Returns a user-facing message when the password is short or the
/// confirmation differs.
pub fn new_password(password: &str, confirm: &str) -> Result<String, &'static str> {
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(password.to_owned())
}

/// Trimmed optional text: blank becomes `None`.
#[must_use]
pub fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn required(raw: &str, message: &'static str) -> Result<String, &'static str> {
    optional(raw).ok_or(message)
}
