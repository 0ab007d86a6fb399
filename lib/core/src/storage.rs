//! Key/value storage port.
//!
//! The UI persists a handful of string values (the session record, the
//! remembered username) into browser-provided stores. Access goes through
//! the narrow [`StoragePort`] trait so views never touch an ambient store
//! directly: the server binary injects adapters over the real browser
//! stores, and tests substitute [`MemoryStore`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

/// Narrow get/set/remove seam over a string key/value store.
///
/// Semantics are last-write-wins; every operation is independent and
/// idempotent. Reads are infallible (an unavailable store reads as empty),
/// writes surface [`StorageError`] so callers can decide what a failed
/// persist means for them.
pub trait StoragePort: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value stored under `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str);
}

/// Errors from storage write operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store rejected the write (e.g. quota exceeded).
    WriteFailed { key: String, reason: String },
    /// No backing store is available in this environment.
    Unavailable { reason: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed { key, reason } => {
                write!(f, "failed to write storage key '{key}': {reason}")
            }
            Self::Unavailable { reason } => {
                write!(f, "storage unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// In-memory [`StoragePort`] implementation.
///
/// Used by tests in place of a real browser store, and by server-side
/// rendering where no browser store exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StoragePort for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn set_then_get_returns_value() {
        let store = MemoryStore::new();
        store.set("key", "value").expect("set");
        assert_eq!(store.get("key").as_deref(), Some("value"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn set_replaces_previous_value() {
        let store = MemoryStore::new();
        store.set("key", "first").expect("set");
        store.set("key", "second").expect("set");
        assert_eq!(store.get("key").as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_deletes_entry() {
        let store = MemoryStore::new();
        store.set("key", "value").expect("set");
        store.remove("key");
        assert_eq!(store.get("key"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let store = MemoryStore::new();
        store.remove("missing");
        assert!(store.is_empty());
    }

    #[test]
    fn write_failed_display_names_key_and_reason() {
        let err = StorageError::WriteFailed {
            key: "userRole".to_string(),
            reason: "quota exceeded".to_string(),
        };
        assert!(err.to_string().contains("userRole"));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn unavailable_display_names_reason() {
        let err = StorageError::Unavailable {
            reason: "no window".to_string(),
        };
        assert!(err.to_string().contains("storage unavailable"));
        assert!(err.to_string().contains("no window"));
    }
}
