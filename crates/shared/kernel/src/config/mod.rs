use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised while loading layered configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Sources could not be assembled (unreadable file, malformed env vars).
    #[error("cannot assemble configuration: {0}")]
    Build(#[source] config::ConfigError),
    /// Merged sources did not match the target structure.
    #[error("cannot deserialize configuration: {0}")]
    Shape(#[source] config::ConfigError),
}

/// A reusable configuration loader that layers file-based settings with
/// environment overrides.
///
/// 1. **Base file**: settings from `<path>.toml` (any format the `config`
///    crate knows). Defaults to `site` in the working directory. A missing
///    file is not an error; every field carries a default.
/// 2. **Environment**: variables prefixed with `SAFEBUY__` override the
///    file. Nested keys use double underscores, e.g.
///    `SAFEBUY__SERVER__PORT=8443` maps to `server.port`.
///
/// # Errors
/// Fails when a source exists but cannot be read, or when the merged values
/// do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use safebuy_domain::config::SiteConfig;
/// use safebuy_kernel::config::load_config;
///
/// let cfg: SiteConfig = load_config(Some("config/site")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("site"), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix("SAFEBUY")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .map_err(ConfigError::Build)?
        .try_deserialize::<T>()
        .map_err(ConfigError::Shape)
}
