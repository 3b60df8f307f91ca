//! Single named string value mirrored into durable storage.
//!
//! # Responsibility
//! - Read the stored value once at construction, falling back to a default.
//! - Write every change through to the backing store synchronously.
//!
//! # Invariants
//! - In-memory value and durable copy converge after every `set`.
//! - Construction never writes to the store.
//! - Storage failures never reach the caller; they are logged and absorbed.

use crate::store::kv::KeyValueStore;
use log::{debug, warn};

/// String value with read-on-init and write-on-change semantics.
pub struct PersistentValue<S: KeyValueStore> {
    store: S,
    key: String,
    value: String,
}

impl<S: KeyValueStore> PersistentValue<S> {
    /// Loads `key` from `store`, or uses `default` when nothing usable is stored.
    ///
    /// A missing entry, a blank stored value and an unavailable store all
    /// resolve to `default`. Storage is left untouched until the first `set`.
    pub fn initialize(store: S, key: impl Into<String>, default: impl Into<String>) -> Self {
        let key = key.into();
        let value = match store.get(&key) {
            Ok(Some(stored)) if !stored.is_empty() => {
                debug!(
                    "event=kv_get module=persistent_value status=ok key={} source=store",
                    key
                );
                stored
            }
            Ok(_) => {
                debug!(
                    "event=kv_get module=persistent_value status=ok key={} source=default",
                    key
                );
                default.into()
            }
            Err(err) => {
                warn!(
                    "event=kv_get module=persistent_value status=error key={} source=default error={}",
                    key, err
                );
                default.into()
            }
        };

        Self { store, key, value }
    }

    /// Replaces the value and writes it to the store under the fixed key.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if let Err(err) = self.store.set(&self.key, &self.value) {
            warn!(
                "event=kv_set module=persistent_value status=error key={} error={}",
                self.key, err
            );
        }
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrows the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
