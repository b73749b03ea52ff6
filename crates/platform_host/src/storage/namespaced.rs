//! Namespaced JSON access on top of a [`PrefsStore`].
//!
//! Every key is prefixed with a fixed namespace before it reaches the backing store so the
//! shell's values never collide with unrelated data sharing the same origin storage.

use serde::{de::DeserializeOwned, Serialize};

use super::prefs::{PrefsStore, StoreError};

/// Namespace prepended to every key the notes shell writes.
pub const NOTES_STORAGE_NAMESPACE: &str = "simple-notes:";

/// Returns `key` prefixed with `namespace`.
pub fn namespaced_key(namespace: &str, key: &str) -> String {
    format!("{namespace}{key}")
}

/// Typed JSON view over a [`PrefsStore`] that prefixes all keys with a namespace.
pub struct NamespacedPrefs<'a, S: PrefsStore + ?Sized> {
    store: &'a S,
    namespace: &'a str,
}

impl<'a, S: PrefsStore + ?Sized> NamespacedPrefs<'a, S> {
    /// Wraps `store` using [`NOTES_STORAGE_NAMESPACE`].
    pub fn new(store: &'a S) -> Self {
        Self::with_namespace(store, NOTES_STORAGE_NAMESPACE)
    }

    /// Wraps `store` using a caller-chosen namespace.
    pub fn with_namespace(store: &'a S, namespace: &'a str) -> Self {
        Self { store, namespace }
    }

    /// Returns the namespace applied to keys.
    pub fn namespace(&self) -> &str {
        self.namespace
    }

    /// Loads and deserializes the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails or the stored text is not valid JSON for `T`.
    pub fn load_typed<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.store.load_pref(&namespaced_key(self.namespace, key))? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Serializes `value` and stores it under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the store write fails.
    pub fn save_typed<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.store.save_pref(&namespaced_key(self.namespace, key), &raw)
    }

    /// Deletes the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the store delete fails.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.store.delete_pref(&namespaced_key(self.namespace, key))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::storage::prefs::MemoryPrefsStore;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Draft {
        title: String,
        pinned: bool,
    }

    #[test]
    fn writes_land_under_namespaced_keys() {
        let store = MemoryPrefsStore::default();
        let prefs = NamespacedPrefs::new(&store);
        prefs.save_typed("draft", &1_u32).expect("save");

        assert_eq!(store.keys(), vec!["simple-notes:draft".to_string()]);
        assert_eq!(
            store.load_pref("simple-notes:draft").expect("load"),
            Some("1".to_string())
        );
    }

    #[test]
    fn typed_values_round_trip() {
        let store = MemoryPrefsStore::default();
        let prefs = NamespacedPrefs::new(&store);
        let draft = Draft {
            title: "Welcome".into(),
            pinned: true,
        };
        prefs.save_typed("draft", &draft).expect("save");

        let loaded: Option<Draft> = prefs.load_typed("draft").expect("load");
        assert_eq!(loaded, Some(draft));
    }

    #[test]
    fn missing_key_loads_none_and_delete_is_scoped() {
        let store = MemoryPrefsStore::default();
        store.save_pref("draft", "\"foreign\"").expect("seed");
        let prefs = NamespacedPrefs::new(&store);

        assert_eq!(prefs.load_typed::<String>("draft").expect("load"), None);
        prefs.delete("draft").expect("delete");
        assert_eq!(store.keys(), vec!["draft".to_string()]);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let store = MemoryPrefsStore::default();
        store.save_pref("simple-notes:draft", "{not json").expect("seed");
        let prefs = NamespacedPrefs::new(&store);

        let err = prefs.load_typed::<Draft>("draft").expect_err("malformed");
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn custom_namespace_is_applied() {
        let store = MemoryPrefsStore::default();
        let prefs = NamespacedPrefs::with_namespace(&store, "other:");
        prefs.save_typed("k", "v").expect("save");
        assert_eq!(prefs.namespace(), "other:");
        assert_eq!(store.keys(), vec!["other:k".to_string()]);
    }
}
