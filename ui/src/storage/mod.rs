//! Namespaced JSON preference storage.
//!
//! [`PreferenceStore`] prefixes every key with [`NAMESPACE_PREFIX`] and stores
//! values as JSON text in a [`KeyValueBackend`]. Reads fail with
//! [`StorageError::NotFoundOrMalformed`] instead of returning a default, so
//! callers that can live without a value check [`PreferenceStore::contains`]
//! or handle the error.

mod backend;
pub mod preferences;

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use preferences::{LocalePreference, SidebarPreference, ThemePreference};

use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use thiserror::Error;

/// Prefix put in front of every key written through [`PreferenceStore`].
pub const NAMESPACE_PREFIX: &str = "imdev-";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("No readable value stored under '{key}': {detail}")]
    NotFoundOrMalformed { key: String, detail: String },

    #[error("Failed to serialize value for '{key}': {detail}")]
    Serialize { key: String, detail: String },

    #[error("Storage backend failure: {detail}")]
    Backend { detail: String },
}

#[derive(Clone)]
pub struct PreferenceStore {
    backend: Arc<dyn KeyValueBackend>,
}

impl PreferenceStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by process memory only.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    fn namespaced(key: &str) -> String {
        format!("{NAMESPACE_PREFIX}{key}")
    }

    /// Serializes `value` and writes it, replacing any previous entry.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let text = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
            key: key.to_string(),
            detail: e.to_string(),
        })?;
        self.backend.write(&Self::namespaced(key), text)
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, StorageError> {
        let Some(text) = self.backend.read(&Self::namespaced(key))? else {
            return Err(StorageError::NotFoundOrMalformed {
                key: key.to_string(),
                detail: "no entry".to_string(),
            });
        };
        serde_json::from_str(&text).map_err(|e| StorageError::NotFoundOrMalformed {
            key: key.to_string(),
            detail: e.to_string(),
        })
    }

    /// Deletes the entry. Missing keys are not an error.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend.delete(&Self::namespaced(key))
    }

    pub fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.backend.read(&Self::namespaced(key))?.is_some())
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};
    use serde_json::json;

    #[test]
    fn test_values_are_written_under_prefix() {
        let backend = Arc::new(MemoryBackend::new());
        let store = PreferenceStore::new(backend.clone());

        assert_ok!(store.set("theme", &json!({"darkMode": true})));
        assert_eq!(
            backend.read("imdev-theme").unwrap().as_deref(),
            Some(r#"{"darkMode":true}"#)
        );
        assert_eq!(backend.read("theme").unwrap(), None);
    }

    #[test]
    fn test_missing_key_fails() {
        let store = PreferenceStore::in_memory();
        let result: Result<String, _> = store.get("nothing");
        assert!(matches!(
            result,
            Err(StorageError::NotFoundOrMalformed { ref key, .. }) if key == "nothing"
        ));
    }

    #[test]
    fn test_malformed_value_fails() {
        let backend = Arc::new(MemoryBackend::new());
        backend.write("imdev-lang", "{not json".to_string()).unwrap();
        let store = PreferenceStore::new(backend);

        let result: Result<serde_json::Value, _> = store.get("lang");
        assert_err!(result);
    }

    #[test]
    fn test_set_overwrites_and_remove_is_idempotent() {
        let store = PreferenceStore::in_memory();
        store.set("k", &1).unwrap();
        store.set("k", &2).unwrap();
        assert_eq!(store.get::<i32>("k").unwrap(), 2);

        assert_ok!(store.remove("k"));
        assert_ok!(store.remove("k"));
        assert!(!store.contains("k").unwrap());
    }
}
