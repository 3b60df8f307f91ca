//! Durable storage abstractions.
//!
//! # Responsibility
//! - Define the injected key/value capability and its backends.
//! - Mirror single named values into that capability.
//!
//! # Invariants
//! - Core logic reaches durable storage only through `KeyValueStore`.
//! - Storage failures are recovered inside this layer, never surfaced to views.

pub mod kv;
pub mod persistent_value;
