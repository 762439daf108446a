//! # Landing feature
//!
//! Renders the SafeBuy marketing page to a static HTML document and
//! serves it. Components read every style token from the shared theme
//! context and every copy string from the domain constants; rendering
//! happens once at startup and the document is served as-is afterwards.
//!
//! ## Usage
//! - Call [`init`] with the site configuration to obtain the feature
//!   slice holding the rendered page.
//! - With the `server` feature, mount [`routes::pages_router`] to serve
//!   it at `/`.
//! - Embedders that need scroll observation render through
//!   [`render_plan`] with their own [`NavHandle`].

mod css;
mod error;
mod page;
mod provider;
mod render;
#[cfg(feature = "server")]
pub mod routes;
mod scroll;
mod sections;

pub use crate::css::stylesheet;
pub use crate::error::LandingError;
pub use crate::page::{LandingPage, LandingPageProps, SitePlan};
pub use crate::provider::{ThemeHandle, use_theme};
pub use crate::render::{RenderedPage, render_page, render_page_with, render_plan};
pub use crate::scroll::{FragmentNav, NavHandle, RecordingNav, ScrollToSection, use_nav};
pub use crate::sections::{AboutSection, Footer, Header};

use safebuy_domain::config::SiteConfig;
use safebuy_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::Any;
use tracing::info;

/// Landing feature state: the page rendered once at startup.
#[derive(Debug)]
pub struct Landing {
    page: RenderedPage,
}

impl Landing {
    /// The pre-rendered document this slice serves.
    #[must_use]
    pub fn page(&self) -> &RenderedPage {
        &self.page
    }
}

impl FeatureSlice for Landing {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initializes the landing feature by rendering the page.
///
/// # Errors
/// Returns an error when the configured theme fails style validation.
pub fn init(config: &SiteConfig) -> Result<InitializedSlice, LandingError> {
    let page = render_page(config)?;

    info!(
        theme = %config.theme.name,
        bytes = page.html().len(),
        "Landing page rendered"
    );

    Ok(InitializedSlice::new(Landing { page }))
}
