use axum::extract::FromRef;
use fxhash::FxHashMap;
use safebuy_domain::config::SiteConfig;
use safebuy_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::TypeId;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;
use thiserror::Error;

/// Errors for assembling or querying the shared server state.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("state validation error: {message}")]
    Validation { message: Cow<'static, str> },
    #[error("state missing feature slice: {name}")]
    MissingSlice { name: &'static str },
}

#[derive(Debug)]
pub struct AppStateInner {
    pub config: SiteConfig,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Shared application state handed to every router.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    #[must_use]
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner
            .slices
            .get(&TypeId::of::<T>())
            .and_then(|initialized| initialized.state.as_any().downcast_ref::<T>())
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns an error if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, StateError> {
        self.get_slice::<T>()
            .ok_or(StateError::MissingSlice { name: std::any::type_name::<T>() })
    }

    /// Iterates over registered slice names (for startup diagnostics).
    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> {
        self.inner.slices.values().map(|slice| slice.name)
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<AppState> for SiteConfig {
    fn from_ref(state: &AppState) -> Self {
        state.inner.config.clone()
    }
}

#[derive(Debug, Default)]
pub struct AppStateBuilder {
    config: Option<SiteConfig>,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn config(mut self, config: SiteConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.insert(slice.id, slice);
        self
    }

    /// Registers multiple slices at once.
    #[must_use]
    pub fn register_slices<I>(mut self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        for slice in slices {
            self.slices.insert(slice.id, slice);
        }
        self
    }

    /// Finalizes the state.
    ///
    /// # Errors
    /// Returns an error when no configuration was provided.
    pub fn build(self) -> Result<AppState, StateError> {
        let config = self
            .config
            .ok_or(StateError::Validation { message: "SiteConfig not provided".into() })?;

        Ok(AppState { inner: Arc::new(AppStateInner { config, slices: self.slices }) })
    }
}
