#![cfg(feature = "server")]

use safebuy_domain::config::SiteConfig;
use safebuy_domain::registry::{FeatureSlice, InitializedSlice};
use safebuy_kernel::server::{AppState, StateError};
use std::any::Any;

#[derive(Debug)]
struct Banner {
    text: &'static str,
}

impl FeatureSlice for Banner {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Unregistered;

impl FeatureSlice for Unregistered {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn build_requires_config() {
    let err = AppState::builder().build().expect_err("config is mandatory");
    assert!(matches!(err, StateError::Validation { .. }));
}

#[test]
fn registered_slice_is_retrievable_by_type() {
    let state = AppState::builder()
        .config(SiteConfig::default())
        .register_slice(InitializedSlice::new(Banner { text: "hello" }))
        .build()
        .expect("state builds");

    let banner = state.try_get_slice::<Banner>().expect("banner is registered");
    assert_eq!(banner.text, "hello");

    let err = state.try_get_slice::<Unregistered>().expect_err("never registered");
    assert!(matches!(err, StateError::MissingSlice { .. }));
}

#[test]
fn slice_names_report_registered_types() {
    let state = AppState::builder()
        .config(SiteConfig::default())
        .register_slices([InitializedSlice::new(Banner { text: "hi" })])
        .build()
        .expect("state builds");

    let names: Vec<_> = state.slice_names().collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].ends_with("Banner"));
}
