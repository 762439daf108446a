//! Registry of initialized feature slices.
//!
//! A minimal type-erased container that carries feature state built at
//! startup into the shared server state. Slices are keyed by their concrete
//! type, so each feature can be registered at most once.

use std::any::{Any, TypeId, type_name};
use std::fmt::Debug;

/// Marker trait for feature state that can be shared across threads.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A container for one initialized feature.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    /// Type name of the slice, for startup logs and error messages.
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    /// Wraps concrete feature state for registration.
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), name: type_name::<T>(), state: Box::new(state) }
    }
}
