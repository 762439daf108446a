//! Facade crate for `SafeBuy` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `safebuy` with the desired feature flags (`server`).
//! - Call `safebuy::init` to render and register feature slices; extend as new slices appear.

pub use safebuy_domain as domain;
use safebuy_domain::config::SiteConfig;
pub use safebuy_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use safebuy_kernel::server::router::system_router;
        pub use safebuy_landing::routes::pages_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use safebuy_landing as landing;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "landing",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &SiteConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Landing page
    slices.push(features::landing::init(config)?);

    Ok(slices)
}
