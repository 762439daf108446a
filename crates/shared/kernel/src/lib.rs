//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it holds the layered config loader, the
//! style token guard, and the server state feature routers plug into.
//!
//! ## Config loading (non-wasm)
//! ```rust
//! use safebuy_domain::config::SiteConfig;
//! use safebuy_kernel::config::load_config;
//!
//! let cfg: SiteConfig = load_config(Some("config/site")).unwrap_or_default();
//! ```
//!
//! ## Style validation
//! ```rust
//! use safebuy_kernel::style::StyleGuard;
//!
//! assert!(StyleGuard::verify_color("palette.primary", "#1a7f5a").is_ok());
//! assert!(StyleGuard::verify_color("palette.primary", "</style>").is_err());
//! ```

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;
pub mod style;

pub use safebuy_domain as domain;
