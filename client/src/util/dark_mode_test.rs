use super::*;

#[test]
fn theme_name_matches_css_attribute_values() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_false_outside_the_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
