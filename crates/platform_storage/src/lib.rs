//! Namespaced, failure-tolerant key-value helpers for the notes shell.
//!
//! Every key is prefixed with [`NOTES_STORAGE_NAMESPACE`] and every value travels as JSON. The
//! helpers never fail: reads fall back to a caller-supplied value, and writes and removals
//! become no-ops when the backing store refuses them (quota exceeded, private mode, no
//! `window`). Swallowed failures are logged at warn level.
//!
//! # Example
//!
//! ```rust
//! use platform_storage::{get_item_with, set_item_with, MemoryPrefsStore};
//!
//! let store = MemoryPrefsStore::default();
//! set_item_with(&store, "counter", &3_u32);
//! assert_eq!(get_item_with(&store, "counter", 0_u32), 3);
//! assert_eq!(get_item_with(&store, "missing", 7_u32), 7);
//! assert_eq!(store.keys(), vec!["simple-notes:counter".to_string()]);
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::logging;
use serde::{de::DeserializeOwned, Serialize};

pub use platform_host::{
    namespaced_key, MemoryPrefsStore, NamespacedPrefs, NoopPrefsStore, PrefsStore, StoreError,
    NOTES_STORAGE_NAMESPACE,
};

/// Reads `key` from the host's default store, returning `fallback` when it is absent or
/// unreadable.
pub fn get_item<T: DeserializeOwned>(key: &str, fallback: T) -> T {
    get_item_with(&*platform_host_web::prefs_store(), key, fallback)
}

/// Writes `value` under `key` in the host's default store. Failures are logged and ignored.
pub fn set_item<T: Serialize + ?Sized>(key: &str, value: &T) {
    set_item_with(&*platform_host_web::prefs_store(), key, value);
}

/// Removes `key` from the host's default store. Failures are logged and ignored.
pub fn remove_item(key: &str) {
    remove_item_with(&*platform_host_web::prefs_store(), key);
}

/// Reads `key` from `store`, returning `fallback` when it is absent or unreadable.
pub fn get_item_with<S, T>(store: &S, key: &str, fallback: T) -> T
where
    S: PrefsStore + ?Sized,
    T: DeserializeOwned,
{
    match NamespacedPrefs::new(store).load_typed(key) {
        Ok(Some(value)) => value,
        Ok(None) => fallback,
        Err(err) => {
            logging::warn!("storage read `{key}` failed: {err}");
            fallback
        }
    }
}

/// Writes `value` under `key` in `store`. Failures are logged and ignored.
pub fn set_item_with<S, T>(store: &S, key: &str, value: &T)
where
    S: PrefsStore + ?Sized,
    T: Serialize + ?Sized,
{
    if let Err(err) = NamespacedPrefs::new(store).save_typed(key, value) {
        logging::warn!("storage write `{key}` failed: {err}");
    }
}

/// Removes `key` from `store`. Failures are logged and ignored.
pub fn remove_item_with<S: PrefsStore + ?Sized>(store: &S, key: &str) {
    if let Err(err) = NamespacedPrefs::new(store).delete(key) {
        logging::warn!("storage remove `{key}` failed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct NoteSummary {
        id: String,
        title: String,
        tags: Vec<String>,
    }

    #[derive(Debug, Clone)]
    struct FailingStore(StoreError);

    impl FailingStore {
        fn error(&self) -> Result<(), StoreError> {
            Err(self.0.clone())
        }
    }

    impl PrefsStore for FailingStore {
        fn load_pref(&self, _key: &str) -> Result<Option<String>, StoreError> {
            self.error().map(|()| None)
        }

        fn save_pref(&self, _key: &str, _raw: &str) -> Result<(), StoreError> {
            self.error()
        }

        fn delete_pref(&self, _key: &str) -> Result<(), StoreError> {
            self.error()
        }
    }

    #[test]
    fn structured_values_round_trip() {
        let store = MemoryPrefsStore::default();
        let note = NoteSummary {
            id: "note_1".into(),
            title: "Welcome Note".into(),
            tags: vec!["intro".into(), "pinned".into()],
        };
        set_item_with(&store, "notes", &vec![note.clone()]);

        let loaded: Vec<NoteSummary> = get_item_with(&store, "notes", Vec::new());
        assert_eq!(loaded, vec![note]);
    }

    #[test]
    fn never_written_key_returns_fallback() {
        let store = MemoryPrefsStore::default();
        assert_eq!(get_item_with(&store, "missing", "fallback".to_string()), "fallback");
        assert_eq!(get_item_with::<_, Option<u8>>(&store, "missing", None), None);
    }

    #[test]
    fn stored_null_is_returned_rather_than_fallback() {
        let store = MemoryPrefsStore::default();
        set_item_with(&store, "maybe", &Option::<u8>::None);
        assert_eq!(get_item_with(&store, "maybe", Some(4_u8)), None);
    }

    #[test]
    fn removal_clears_only_the_namespaced_key() {
        let store = MemoryPrefsStore::default();
        store.save_pref("theme", "\"dark\"").expect("seed foreign key");
        set_item_with(&store, "theme", "light");
        remove_item_with(&store, "theme");

        assert_eq!(store.keys(), vec!["theme".to_string()]);
        assert_eq!(get_item_with(&store, "theme", "none".to_string()), "none");
    }

    #[test]
    fn write_failures_do_not_escape() {
        let store = FailingStore(StoreError::QuotaExceeded);
        set_item_with(&store, "notes", &[1, 2, 3]);
        remove_item_with(&store, "notes");
    }

    #[test]
    fn read_failures_return_fallback() {
        let store = FailingStore(StoreError::AccessDenied);
        assert_eq!(get_item_with(&store, "notes", 9_u32), 9);
    }

    #[test]
    fn malformed_values_return_fallback() {
        let store = MemoryPrefsStore::default();
        store
            .save_pref(&namespaced_key(NOTES_STORAGE_NAMESPACE, "count"), "{oops")
            .expect("seed");
        assert_eq!(get_item_with(&store, "count", 1_u32), 1);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn default_store_helpers_are_safe_off_browser() {
        set_item("draft", "hello");
        remove_item("draft");
        let _ = get_item("draft", String::new());
    }
}
