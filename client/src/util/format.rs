//! Display formatting for timestamps, counts and rates.
//!
//! The backend emits naive ISO-8601 timestamps (`2024-05-01T10:30:00`,
//! sometimes with fractional seconds or a UTC suffix) and accepts the same
//! shape back. `<input type="datetime-local">` produces minute precision, so
//! values are normalized on the way out.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::PrimitiveDateTime;
use time::macros::format_description;

fn parse_backend(raw: &str) -> Option<PrimitiveDateTime> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('Z').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("+00:00").unwrap_or(trimmed);
    let trimmed = trimmed.split('.').next().unwrap_or(trimmed);
    PrimitiveDateTime::parse(trimmed, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"))
        .or_else(|_| PrimitiveDateTime::parse(trimmed, format_description!("[year]-[month]-[day]T[hour]:[minute]")))
        .ok()
}

/// Human-readable timestamp; unparseable input is returned unchanged.
pub fn datetime(raw: &str) -> String {
    parse_backend(raw)
        .and_then(|dt| {
            dt.format(format_description!("[month repr:short] [day padding:none], [year] [hour]:[minute]"))
                .ok()
        })
        .unwrap_or_else(|| raw.to_owned())
}

/// Optional timestamp with a dash placeholder.
pub fn datetime_or_dash(raw: Option<&str>) -> String {
    raw.map_or_else(|| "—".to_owned(), datetime)
}

/// Convert a `datetime-local` input value into the backend's format.
///
/// Returns `None` for empty or malformed input.
pub fn to_backend(local: &str) -> Option<String> {
    parse_backend(local)?
        .format(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"))
        .ok()
}

/// Convert a backend timestamp into a `datetime-local` input value.
pub fn to_input(raw: &str) -> String {
    parse_backend(raw)
        .and_then(|dt| dt.format(format_description!("[year]-[month]-[day]T[hour]:[minute]")).ok())
        .unwrap_or_default()
}

/// Chart label for a trend bucket (`2024-05-01` becomes `May 1`).
pub fn day_label(raw: &str) -> String {
    time::Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .ok()
        .and_then(|d| d.format(format_description!("[month repr:short] [day padding:none]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// `1234` becomes `1.2K`, `2_500_000` becomes `2.5M`.
///
/// Rounds to one decimal before picking the band, so `999_950` is `1M`.
#[allow(clippy::cast_precision_loss)]
pub fn compact(value: u64) -> String {
    if value < 1_000 {
        return value.to_string();
    }
    let tenths_of_k = value.saturating_add(50) / 100;
    if tenths_of_k < 10_000 {
        return trim_decimal(tenths_of_k as f64 / 10.0, "K");
    }
    let tenths_of_m = value.saturating_add(50_000) / 100_000;
    trim_decimal(tenths_of_m as f64 / 10.0, "M")
}

fn trim_decimal(value: f64, suffix: &str) -> String {
    let text = format!("{value:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text}{suffix}")
}

/// Percentage with one decimal place.
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Truncate to `max` characters with an ellipsis.
pub fn excerpt(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let head: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", head.trim_end())
}
