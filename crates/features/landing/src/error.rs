use safebuy_kernel::style::StyleError;
use thiserror::Error;

/// Errors raised while building the landing page.
#[derive(Debug, Error)]
pub enum LandingError {
    /// A theme token failed validation before rendering.
    #[error(transparent)]
    Style(#[from] StyleError),
}
