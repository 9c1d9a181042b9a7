#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn system_theme_is_light_in_non_hydrate_tests() {
    assert_eq!(system_theme(), Theme::Light);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
