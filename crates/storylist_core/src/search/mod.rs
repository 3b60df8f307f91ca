//! Search-term filtering over catalog records.
//!
//! # Responsibility
//! - Derive the visible record list from the master list and a search term.
//!
//! # Invariants
//! - Filtering is pure and re-derived on every query; nothing is cached.

pub mod filter;
