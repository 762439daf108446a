use dioxus::prelude::*;
use safebuy_domain::theme::Theme;
use std::ops::Deref;
use std::sync::Arc;

/// Shared handle to the active [`Theme`].
///
/// The page root provides one handle through context and every component
/// reads that same allocation, so two handles compare equal only when
/// they view one theme. Components never hold their own theme copies.
#[derive(Debug, Clone)]
pub struct ThemeHandle(Arc<Theme>);

impl ThemeHandle {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self(Arc::new(theme))
    }

    #[must_use]
    pub fn from_arc(theme: Arc<Theme>) -> Self {
        Self(theme)
    }

    /// Do both handles view the same theme allocation?
    #[must_use]
    pub fn shares(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    #[must_use]
    pub fn as_arc(&self) -> &Arc<Theme> {
        &self.0
    }
}

impl PartialEq for ThemeHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ThemeHandle {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Reads the theme provided by the page root.
///
/// # Panics
/// Panics outside a tree rooted in [`crate::LandingPage`] or another
/// provider of [`ThemeHandle`].
#[must_use]
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
}
