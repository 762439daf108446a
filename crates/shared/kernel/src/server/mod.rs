//! Axum-facing plumbing shared by every feature router.

mod health;
pub mod router;
mod state;

pub use state::{AppState, AppStateBuilder, StateError};
