use safebuy_domain::sections::{SectionId, SectionSet};
use safebuy_landing::{FragmentNav, NavHandle, RecordingNav, ScrollToSection};
use std::sync::Arc;

#[test]
fn scroll_request_lands_when_target_is_present() {
    let nav = Arc::new(RecordingNav::new(SectionSet::ALL));
    let handle = NavHandle::from_arc(nav.clone());

    handle.scroll_to(SectionId::About);

    assert_eq!(nav.hits(), vec![SectionId::About]);
}

#[test]
fn scroll_request_is_dropped_when_target_is_missing() {
    let nav = Arc::new(RecordingNav::new(SectionSet::ALL - SectionSet::ABOUT));
    let handle = NavHandle::from_arc(nav.clone());

    // must neither panic nor record a hit
    handle.scroll_to(SectionId::About);

    assert!(nav.hits().is_empty());
}

#[test]
fn repeated_requests_are_recorded_in_order() {
    let nav = Arc::new(RecordingNav::new(SectionSet::ALL));
    let handle = NavHandle::from_arc(nav.clone());

    handle.scroll_to(SectionId::About);
    handle.scroll_to(SectionId::About);

    assert_eq!(nav.hits(), vec![SectionId::About, SectionId::About]);
}

#[test]
fn fragment_nav_is_a_no_op() {
    FragmentNav.scroll_to(SectionId::About);
    NavHandle::fragment().scroll_to(SectionId::About);
}

#[test]
fn handles_compare_by_navigator_identity() {
    let nav = Arc::new(RecordingNav::new(SectionSet::ALL));
    let a = NavHandle::from_arc(nav.clone());
    let b = a.clone();
    let c = NavHandle::from_arc(Arc::new(RecordingNav::new(SectionSet::ALL)));

    assert_eq!(a, b);
    assert_ne!(a, c);
}
