//! Local persistent store: a string key/value port plus JSON helpers.
//!
//! Every feature store (journal, community, learn, onboarding, avatar cache)
//! talks to storage only through `KeyValueStore`. Failures are never fatal:
//! the helpers here log them and hand back the caller's default.

pub mod keys;
pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Durable key → string mapping. Writes overwrite unconditionally.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

/// Read and parse a JSON value. Absent, unreadable or malformed → `None`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read from store");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Stored value is not valid JSON for its type");
            None
        }
    }
}

/// Serialize and write a JSON value. Returns whether the write landed.
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> bool {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(key, error = %e, "Failed to serialize value for store");
            return false;
        }
    };
    write_value(store, key, &raw)
}

/// Write a raw string. Failures are logged and reported as `false`.
pub fn write_value(store: &dyn KeyValueStore, key: &str, value: &str) -> bool {
    match store.set(key, value) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to write to store");
            false
        }
    }
}

/// Read a raw string, treating failure as absence.
pub fn read_value(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    store.get(key).unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "Failed to read from store");
        None
    })
}

pub fn remove_value(store: &dyn KeyValueStore, key: &str) {
    if let Err(e) = store.remove(key) {
        tracing::warn!(key, error = %e, "Failed to remove key from store");
    }
}

/// Read-and-clear: returns the value once, then the key is gone.
pub fn take_value(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    let value = read_value(store, key)?;
    remove_value(store, key);
    Some(value)
}

/// A boolean flag stored as the literal string `"true"`.
pub fn read_flag(store: &dyn KeyValueStore, key: &str) -> bool {
    read_value(store, key).as_deref() == Some("true")
}

pub fn write_flag(store: &dyn KeyValueStore, key: &str) -> bool {
    write_value(store, key, "true")
}
