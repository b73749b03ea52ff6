//! Lightweight preference storage contracts and in-process adapters.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures reported by a [`PrefsStore`] backend.
pub enum StoreError {
    /// The backing store does not exist on this host (for example, no `window`).
    #[error("storage unavailable")]
    Unavailable,
    /// The backing store refused the write because it is full.
    #[error("storage quota exceeded")]
    QuotaExceeded,
    /// The host denied access to the backing store (private mode, sandboxing).
    #[error("storage access denied")]
    AccessDenied,
    /// Any other backend failure, with the host's description.
    #[error("storage backend failed: {0}")]
    Backend(String),
    /// The value could not be converted to or from its JSON text form.
    #[error("value serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Host service for text values stored per key.
///
/// Implementations are synchronous; the browser `localStorage` API they mirror is too.
pub trait PrefsStore {
    /// Loads the raw text stored under `key`.
    fn load_pref(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores raw text under `key`, replacing any previous value.
    fn save_pref(&self, key: &str, raw: &str) -> Result<(), StoreError>;

    /// Deletes `key`. Deleting a missing key succeeds.
    fn delete_pref(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: PrefsStore + ?Sized> PrefsStore for Rc<S> {
    fn load_pref(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load_pref(key)
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        (**self).save_pref(key, raw)
    }

    fn delete_pref(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete_pref(key)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn save_pref(&self, _key: &str, _raw: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn delete_pref(&self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string. Clones share the same map.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns every stored key in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.inner.borrow().keys().cloned().collect()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn delete_pref(&self, key: &str) -> Result<(), StoreError> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}
