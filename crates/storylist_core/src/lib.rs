//! Core state management for the storylist catalog.
//! This crate is the single source of truth for list and search invariants;
//! views render what it exposes and forward user events back into it.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use config::{ConfigError, CoreConfig, SessionSettings};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::list_state::{ListState, ListStateError};
pub use model::record::{Record, RecordId, RecordIdParseError};
pub use model::seed::seed_records;
pub use search::filter::{filter_records, matches_term};
pub use service::draft_input::{DraftInput, GatingSignal};
pub use service::list_store::ListStore;
pub use service::session::{CatalogSession, ViewIntent, ViewModel};
pub use store::kv::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
    UnavailableKeyValueStore,
};
pub use store::persistent_value::PersistentValue;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
