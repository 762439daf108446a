use crate::error::LandingError;
use crate::page::{LandingPage, LandingPageProps, SitePlan};
use crate::provider::ThemeHandle;
use crate::scroll::NavHandle;
use dioxus::prelude::*;
use safebuy_domain::config::SiteConfig;
use safebuy_domain::sections::SectionSet;
use safebuy_kernel::style::StyleGuard;

/// A fully rendered page document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    html: String,
}

impl RenderedPage {
    /// The complete HTML document, doctype included.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }
}

/// Renders the landing page with every configured section.
///
/// # Errors
/// Returns an error when a theme token fails style validation.
pub fn render_page(config: &SiteConfig) -> Result<RenderedPage, LandingError> {
    render_page_with(config, config.sections)
}

/// Renders the landing page with an explicit section set.
///
/// Rendering is pure: the same configuration and sections produce
/// byte-identical documents on every call.
///
/// # Errors
/// Returns an error when a theme token fails style validation.
pub fn render_page_with(
    config: &SiteConfig,
    sections: SectionSet,
) -> Result<RenderedPage, LandingError> {
    StyleGuard::verify_theme(&config.theme)?;

    let plan = SitePlan::new(
        ThemeHandle::new(config.theme.clone()),
        sections,
        NavHandle::fragment(),
    );

    Ok(render_plan(plan))
}

/// Renders an explicit [`SitePlan`].
///
/// Embedders that supply their own navigator or theme handle come through
/// here; token validation is then the caller's responsibility.
#[must_use]
pub fn render_plan(plan: SitePlan) -> RenderedPage {
    let mut vdom =
        VirtualDom::new_with_props(LandingPage, LandingPageProps::builder().plan(plan).build());
    vdom.rebuild_in_place();

    RenderedPage {
        html: format!("<!DOCTYPE html>\n{}", dioxus_ssr::render(&vdom)),
    }
}
