//! Domain model for the catalog list.
//!
//! # Responsibility
//! - Define the record shape rendered by every view.
//! - Define the immutable list snapshot and its pure transitions.
//!
//! # Invariants
//! - Record ids are unique within one list.
//! - List snapshots are values; transitions never mutate a published snapshot.

pub mod list_state;
pub mod record;
pub mod seed;
