use dioxus::prelude::*;
use safebuy_domain::sections::{SectionId, SectionSet};
use std::fmt;
use std::sync::{Arc, Mutex};

/// Contract between navigation controls and whatever moves the viewport.
///
/// The page root hands components a single implementation through
/// context. Requests targeting a section that is not on the page must be
/// dropped without error or visible effect; the control itself stays
/// rendered either way.
pub trait ScrollToSection: Send + Sync {
    fn scroll_to(&self, section: SectionId);
}

/// Default navigator for server-rendered markup.
///
/// Anchors already carry `href="#..."` fragments, so the browser performs
/// the scroll natively and a missing anchor is a silent no-op. There is
/// nothing left to do at render time.
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentNav;

impl ScrollToSection for FragmentNav {
    fn scroll_to(&self, _section: SectionId) {}
}

/// Navigator that records which sections were actually scrolled to.
///
/// Mirrors the browser contract: a request only counts when the target
/// section is present, otherwise it is dropped.
#[derive(Debug, Default)]
pub struct RecordingNav {
    present: SectionSet,
    hits: Mutex<Vec<SectionId>>,
}

impl RecordingNav {
    #[must_use]
    pub fn new(present: SectionSet) -> Self {
        Self {
            present,
            hits: Mutex::new(Vec::new()),
        }
    }

    /// Sections scrolled to so far, in request order.
    #[must_use]
    pub fn hits(&self) -> Vec<SectionId> {
        self.hits
            .lock()
            .map_or_else(|poisoned| poisoned.into_inner().clone(), |hits| hits.clone())
    }
}

impl ScrollToSection for RecordingNav {
    fn scroll_to(&self, section: SectionId) {
        if !self.present.contains(section.into()) {
            return;
        }
        if let Ok(mut hits) = self.hits.lock() {
            hits.push(section);
        }
    }
}

/// Cloneable handle to the active [`ScrollToSection`] implementation.
///
/// Handles compare equal only when they share one navigator, the same
/// rule [`crate::ThemeHandle`] uses for themes.
#[derive(Clone)]
pub struct NavHandle(Arc<dyn ScrollToSection>);

impl NavHandle {
    /// Fragment-based navigation, the default for static markup.
    #[must_use]
    pub fn fragment() -> Self {
        Self(Arc::new(FragmentNav))
    }

    #[must_use]
    pub fn from_arc(nav: Arc<dyn ScrollToSection>) -> Self {
        Self(nav)
    }

    /// Requests a scroll to `section`.
    pub fn scroll_to(&self, section: SectionId) {
        self.0.scroll_to(section);
    }
}

impl fmt::Debug for NavHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NavHandle")
    }
}

impl PartialEq for NavHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

/// Reads the navigator provided by the page root.
///
/// # Panics
/// Panics outside a tree rooted in [`crate::LandingPage`] or another
/// provider of [`NavHandle`].
#[must_use]
pub fn use_nav() -> NavHandle {
    use_context::<NavHandle>()
}
