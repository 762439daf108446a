use safebuy_domain::config::SiteConfig;
use safebuy_landing::{Landing, init};
use std::any::TypeId;

#[test]
fn init_registers_the_landing_slice() {
    let slice = init(&SiteConfig::default()).expect("init should succeed");

    assert_eq!(slice.id, TypeId::of::<Landing>());
    assert!(slice.name.ends_with("Landing"));
}

#[test]
fn slice_carries_the_rendered_page() {
    let slice = init(&SiteConfig::default()).expect("init should succeed");

    let landing = slice
        .state
        .as_any()
        .downcast_ref::<Landing>()
        .expect("slice state downcasts to Landing");

    assert!(landing.page().html().contains("SafeBuy"));
    assert!(landing.page().html().starts_with("<!DOCTYPE html>"));
}

#[test]
fn init_rejects_an_invalid_theme() {
    let mut config = SiteConfig::default();
    config.theme.spacing.bar_height = "64px; position: absolute".to_owned();

    assert!(init(&config).is_err());
}
