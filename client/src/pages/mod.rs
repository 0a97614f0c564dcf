//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose components and trigger store actions; authenticated pages
//! render inside `AppShell`.


pub mod affiliate_links;
pub mod analytics;
pub mod campaign_detail;
pub mod campaigns;
pub mod login;
pub mod overview;
pub mod register;
pub mod settings;
pub mod tweets;

/// Parse a `<select>` value holding an optional record id.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// `(value, label)` pairs for a status filter, led by "All".
pub(crate) fn filter_options<S: AsRef<str>>(statuses: impl IntoIterator<Item = S>) -> Vec<(String, String)> {
    std::iter::once((String::new(), "All statuses".to_owned()))
        .chain(statuses.into_iter().map(|s| (s.as_ref().to_owned(), capitalize(s.as_ref()))))
        .collect()
}

pub(crate) fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}
