use super::*;

#[test]
fn success_text_prefers_backend_message() {
    assert_eq!(success_text(Some("Campaign created successfully".to_owned()), "Saved"), "Campaign created successfully");
}

#[test]
fn success_text_falls_back_on_missing_or_blank() {
    assert_eq!(success_text(None, "Saved"), "Saved");
    assert_eq!(success_text(Some("  ".to_owned()), "Saved"), "Saved");
}

#[test]
fn report_signs_out_on_expired_session() {
    let stores = Stores::new();
    stores.auth.update(|a| a.signed_out());
    let message = report(stores, &ApiError::Unauthorized);
    assert_eq!(message, "session expired, please sign in again");
    assert!(stores.auth.get_untracked().user.is_none());
    assert_eq!(stores.toasts.get_untracked().toasts.len(), 1);
}

#[test]
fn report_maps_network_errors_to_generic_message() {
    let stores = Stores::new();
    let message = report(stores, &ApiError::Network("offline".to_owned()));
    assert_eq!(message, records::GENERIC_ERROR_MESSAGE);
}
