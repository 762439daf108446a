//! # Domain Models
//!
//! Pure domain types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, no networking, no heavy logic, just data and
//! small helpers the rest of the workspace builds on.

pub mod config;
pub mod constants;
pub mod registry;
pub mod sections;
pub mod theme;
