//! Key/value storage capability and its backends.
//!
//! # Responsibility
//! - Define the `KeyValueStore` capability injected into `PersistentValue`.
//! - Provide SQLite, in-memory and unavailable backends.
//!
//! # Invariants
//! - Values are stored as plain text, never encoded.
//! - `set` is synchronous: once it returns `Ok`, a following `get` on the
//!   same backend observes the new value.
//! - Backends return errors; deciding how to recover is the caller's job.

use crate::db::schema::is_schema_ready;
use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a key/value backend.
#[derive(Debug)]
pub enum StoreError {
    /// No durable storage exists in this environment.
    Unavailable,
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "durable storage is unavailable"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable string storage addressed by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}

/// In-process store for tests and headless sessions.
///
/// Nothing survives the process; share it by reference to simulate a
/// restart within one test.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.into(), value.into());
        store
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend for environments without durable storage.
///
/// Every call fails with [`StoreError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableKeyValueStore;

impl KeyValueStore for UnavailableKeyValueStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Unavailable)
    }
}

/// SQLite-backed store over the `kv_entries` table.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Constructs a store from a connection opened through `open_db`.
    ///
    /// # Errors
    /// - [`DbError::SchemaNotReady`] when the `kv_entries` table is missing.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        if !is_schema_ready(conn)? {
            return Err(StoreError::Db(DbError::SchemaNotReady));
        }
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryKeyValueStore, StoreError, UnavailableKeyValueStore};

    #[test]
    fn memory_store_overwrites_existing_key() {
        let store = MemoryKeyValueStore::with_entry("search", "React");
        store.set("search", "Redux").expect("memory set");

        assert_eq!(
            store.get("search").expect("memory get").as_deref(),
            Some("Redux")
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn memory_store_reports_missing_key_as_none() {
        let store = MemoryKeyValueStore::new();
        assert!(store.get("search").expect("memory get").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn borrowed_store_writes_through_to_owner() {
        let store = MemoryKeyValueStore::new();
        let borrowed = &store;
        borrowed.set("search", "vue").expect("borrowed set");
        assert_eq!(store.get("search").expect("get").as_deref(), Some("vue"));
    }

    #[test]
    fn unavailable_store_fails_every_call() {
        let store = UnavailableKeyValueStore;
        assert!(matches!(store.get("search"), Err(StoreError::Unavailable)));
        assert!(matches!(
            store.set("search", "x"),
            Err(StoreError::Unavailable)
        ));
    }
}
