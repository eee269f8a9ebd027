#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn theme_strings_round_trip() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse("solarized"), None);
}

#[test]
fn flipped_alternates_between_the_two_modes() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
}

#[test]
fn ambient_default_is_dark_in_non_hydrate_tests() {
    assert_eq!(Theme::default(), Theme::Dark);
    assert_eq!(read_preference(), Theme::Dark);
}

#[test]
fn toggle_returns_the_flipped_mode() {
    assert_eq!(toggle(Theme::Dark), Theme::Light);
    assert_eq!(toggle(Theme::Light), Theme::Dark);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
