//! Persistence for the experiment assignment.

use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage write failed: {0}")]
    Write(String),
}

/// Key-value persistence for a single visitor scope.
pub trait AssignmentStore {
    /// Reads `key`, asks `decide` for the value that must be stored and
    /// writes it back if it differs. Returns the stored value.
    ///
    /// The read-check-write runs as one atomic step with respect to other
    /// callers of the same store.
    fn update(
        &self,
        key: &str,
        decide: &mut dyn FnMut(Option<&str>) -> String,
    ) -> Result<String, StoreError>;
}

/// Process-local store guarded by a mutex.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry, as if left by an earlier visit.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.into(), value.into());
        }
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    /// Drops every entry, like a visitor clearing site data.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl AssignmentStore for MemoryStore {
    fn update(
        &self,
        key: &str,
        decide: &mut dyn FnMut(Option<&str>) -> String,
    ) -> Result<String, StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let next = decide(entries.get(key).map(String::as_str));
        if entries.get(key) != Some(&next) {
            entries.insert(key.to_string(), next.clone());
        }
        Ok(next)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserStore;

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::web_sys;

    use super::{AssignmentStore, StoreError};

    /// `window.localStorage`.
    ///
    /// The browser runs callbacks on one thread, so get-then-set is already
    /// atomic here.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserStore;

    impl BrowserStore {
        fn storage() -> Result<web_sys::Storage, StoreError> {
            let window = web_sys::window()
                .ok_or_else(|| StoreError::Unavailable("no window".into()))?;
            window
                .local_storage()
                .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
                .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
        }
    }

    impl AssignmentStore for BrowserStore {
        fn update(
            &self,
            key: &str,
            decide: &mut dyn FnMut(Option<&str>) -> String,
        ) -> Result<String, StoreError> {
            let storage = Self::storage()?;
            let current = storage
                .get_item(key)
                .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?;

            let next = decide(current.as_deref());
            if current.as_deref() != Some(next.as_str()) {
                storage
                    .set_item(key, &next)
                    .map_err(|e| StoreError::Write(format!("{e:?}")))?;
            }
            Ok(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_writes_decided_value() {
        let store = MemoryStore::new();
        let stored = store.update("k", &mut |current| {
            assert_eq!(current, None);
            "A".to_string()
        });

        assert_eq!(stored, Ok("A".to_string()));
        assert_eq!(store.get("k").as_deref(), Some("A"));
    }

    #[test]
    fn update_sees_existing_value() {
        let store = MemoryStore::with_entry("k", "B");
        let stored = store
            .update("k", &mut |current| current.unwrap_or("A").to_string())
            .unwrap();

        assert_eq!(stored, "B");
    }

    #[test]
    fn clear_forgets_entries() {
        let store = MemoryStore::with_entry("k", "B");
        store.clear();
        assert_eq!(store.get("k"), None);
    }
}
