//! Durable key-value slot backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists the signed-in identity through this seam. In the
//! browser it is `localStorage`; on the server and in tests it is an in-memory
//! map, so store logic never touches web-sys directly.
//!
//! TRADE-OFFS
//! ==========
//! Reads and deletes are best-effort: a disabled `localStorage` reads as
//! "absent". Writes report failure (quota exceeded, storage disabled) so the
//! session store can keep memory and slot in step.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// A string-keyed durable slot store.
pub trait KeyValueStore: Debug + Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    /// # Errors
    ///
    /// Returns [`StoreError::SlotWrite`] when the backend rejects the write;
    /// the previous value under `key` is left in place.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Every call is a no-op outside the `hydrate` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(|| StoreError::SlotWrite {
                key: key.to_owned(),
                reason: "localStorage unavailable".to_owned(),
            })?;
            storage.set_item(key, value).map_err(|e| StoreError::SlotWrite {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Process-local map. Clones share the same entries, which lets tests
/// simulate an app restart by building a second store over a clone.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries().remove(key);
    }
}

/// Load a JSON value stored under `key`.
///
/// Returns `Ok(None)` when the slot is empty.
///
/// # Errors
///
/// Returns the parse error when the slot holds text that is not a valid `T`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, serde_json::Error> {
    match store.get(key) {
        Some(raw) => serde_json::from_str(&raw).map(Some),
        None => Ok(None),
    }
}

/// Serialize `value` as JSON and write it under `key`.
///
/// # Errors
///
/// Returns [`StoreError::SlotWrite`] when `value` cannot be serialized or the
/// backend rejects the write. The slot keeps its previous value either way.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|e| StoreError::SlotWrite {
        key: key.to_owned(),
        reason: e.to_string(),
    })?;
    store.set(key, &raw)
}
