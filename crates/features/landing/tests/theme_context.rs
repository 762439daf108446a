use dioxus::prelude::*;
use safebuy_domain::theme::Theme;
use safebuy_landing::{ThemeHandle, use_theme};
use serial_test::serial;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Address of the theme allocation the probe component observed.
static OBSERVED: AtomicUsize = AtomicUsize::new(0);

#[component]
fn Probe() -> Element {
    let theme = use_theme();
    OBSERVED.store(Arc::as_ptr(theme.as_arc()) as usize, Ordering::SeqCst);

    rsx! {
        div { "{theme.name}" }
    }
}

#[component]
fn ProviderRoot(handle: ThemeHandle) -> Element {
    use_context_provider(|| handle.clone());

    rsx! {
        Probe {}
    }
}

fn render_with(handle: ThemeHandle) {
    let mut vdom = VirtualDom::new_with_props(
        ProviderRoot,
        ProviderRootProps::builder().handle(handle).build(),
    );
    vdom.rebuild_in_place();
    let _ = dioxus_ssr::render(&vdom);
}

#[test]
#[serial]
fn components_observe_the_provided_allocation() {
    OBSERVED.store(0, Ordering::SeqCst);

    let handle = ThemeHandle::new(Theme::default());
    let expected = Arc::as_ptr(handle.as_arc()) as usize;

    render_with(handle.clone());

    assert_eq!(
        OBSERVED.load(Ordering::SeqCst),
        expected,
        "the probe must read the same theme allocation the root provided"
    );
}

#[test]
#[serial]
fn swapping_the_provider_swaps_what_components_observe() {
    OBSERVED.store(0, Ordering::SeqCst);

    let first = ThemeHandle::new(Theme::default());
    render_with(first.clone());
    let seen_first = OBSERVED.load(Ordering::SeqCst);

    let second = ThemeHandle::new(Theme::default());
    render_with(second.clone());
    let seen_second = OBSERVED.load(Ordering::SeqCst);

    assert_eq!(seen_first, Arc::as_ptr(first.as_arc()) as usize);
    assert_eq!(seen_second, Arc::as_ptr(second.as_arc()) as usize);
    assert_ne!(seen_first, seen_second, "distinct providers are distinct sources");
}

#[test]
fn handle_equality_is_pointer_equality() {
    let theme = Theme::default();
    let a = ThemeHandle::new(theme.clone());
    let b = ThemeHandle::new(theme);
    let c = a.clone();

    assert_ne!(a, b, "equal values in different allocations are different sources");
    assert_eq!(a, c, "clones share the allocation");
    assert!(a.shares(&c));
}
