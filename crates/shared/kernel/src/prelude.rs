//! Convenience re-exports for downstream crates.

pub use crate::domain::config::SiteConfig;
pub use crate::domain::registry::{FeatureSlice, InitializedSlice};
pub use crate::domain::sections::{SectionId, SectionSet};
pub use crate::domain::theme::Theme;
pub use crate::style::{StyleError, StyleGuard};

#[cfg(not(target_arch = "wasm32"))]
pub use crate::config::{ConfigError, load_config};

#[cfg(feature = "server")]
pub use crate::server::{AppState, AppStateBuilder, StateError};
