use super::*;

#[test]
fn campaign_name_trims_and_requires_value() {
    assert_eq!(campaign_name("  Spring gear "), Ok("Spring gear".to_owned()));
    assert_eq!(campaign_name("   "), Err("Campaign name is required."));
}

#[test]
fn tweet_content_accepts_exactly_280_chars() {
    let body = "a".repeat(TWEET_MAX_CHARS);
    assert_eq!(tweet_content(&body), Ok(body.clone()));
    assert_eq!(remaining_chars(&body), 0);
}

#[test]
fn tweet_content_rejects_281_chars() {
    let body = "a".repeat(TWEET_MAX_CHARS + 1);
    assert_eq!(tweet_content(&body), Err("Tweet content exceeds 280 characters."));
    assert_eq!(remaining_chars(&body), -1);
}

#[test]
fn tweet_content_counts_characters_not_bytes() {
    let body = "é".repeat(TWEET_MAX_CHARS);
    assert!(body.len() > TWEET_MAX_CHARS);
    assert!(tweet_content(&body).is_ok());
}

#[test]
fn tweet_content_requires_text() {
    assert_eq!(tweet_content(" \n "), Err("Tweet content is required."));
}

#[test]
fn link_url_accepts_http_and_https() {
    assert_eq!(link_url(" https://shop.example/item?id=1 "), Ok("https://shop.example/item?id=1".to_owned()));
    assert!(link_url("http://localhost:8000/x").is_ok());
}

#[test]
fn link_url_rejects_relative_and_other_schemes() {
    assert!(link_url("shop.example/item").is_err());
    assert!(link_url("ftp://shop.example/item").is_err());
    assert!(link_url("mailto:someone@example.com").is_err());
    assert_eq!(link_url(""), Err("URL is required."));
}

#[test]
fn commission_rate_is_required_and_bounded() {
    assert_eq!(commission_rate(""), Err("Commission rate is required."));
    assert_eq!(commission_rate(" 12.5 "), Ok(12.5));
    assert_eq!(commission_rate("0"), Ok(0.0));
    assert_eq!(commission_rate("100"), Ok(100.0));
    assert_eq!(commission_rate("101"), Err("Commission rate must be between 0 and 100."));
    assert_eq!(commission_rate("-1"), Err("Commission rate must be between 0 and 100."));
    assert_eq!(commission_rate("ten"), Err("Commission rate must be a number."));
}

#[test]
fn credentials_require_both_fields() {
    assert_eq!(
        credentials(" admin@example.com ", "secret"),
        Ok(("admin@example.com".to_owned(), "secret".to_owned()))
    );
    assert_eq!(credentials("", "secret"), Err("Enter both email and password."));
    assert_eq!(credentials("a@b.co", ""), Err("Enter both email and password."));
}

#[test]
fn new_password_checks_length_and_confirmation() {
    assert_eq!(new_password("short", "short"), Err("Password must be at least 8 characters."));
    assert_eq!(new_password("longenough", "different"), Err("Passwords do not match."));
    assert_eq!(new_password("longenough", "longenough"), Ok("longenough".to_owned()));
}

#[test]
fn optional_maps_blank_to_none() {
    assert_eq!(optional("   "), None);
    assert_eq!(optional(" x "), Some("x".to_owned()));
}

#[test]
fn username_trims_and_requires_value() {
    assert_eq!(username(" maya "), Ok("maya".to_owned()));
    assert_eq!(username(""), Err("Username is required."));
}

#[test]
fn product_name_trims_and_requires_value() {
    assert_eq!(product_name("  Trail Tent "), Ok("Trail Tent".to_owned()));
    assert_eq!(product_name(""), Err("Product name is required."));
}
