//! Core use-case services.
//!
//! # Responsibility
//! - Apply list mutations and draft gating on top of the model layer.
//! - Expose the session contract consumed by views.
//!
//! # Invariants
//! - Views talk to `CatalogSession` only; they never mutate list state directly.

pub mod draft_input;
pub mod list_store;
pub mod session;
