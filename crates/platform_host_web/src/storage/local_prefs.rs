//! `localStorage`-backed preference store implementation.
//!
//! The browser API is synchronous and so is this adapter. Browser exceptions are mapped onto
//! [`StoreError`] so callers can tell a full quota from a denied origin.

use platform_host::{PrefsStore, StoreError};

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StoreError::Unavailable),
        Err(err) => Err(store_error_from_js(&err)),
    }
}

#[cfg(target_arch = "wasm32")]
fn store_error_from_js(err: &wasm_bindgen::JsValue) -> StoreError {
    use wasm_bindgen::JsCast;

    match err.dyn_ref::<web_sys::DomException>() {
        Some(exception) => store_error_from_exception_name(&exception.name(), &exception.message()),
        None => StoreError::Backend(format!("{err:?}")),
    }
}

/// Maps a `DOMException` name onto the matching [`StoreError`] variant.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn store_error_from_exception_name(name: &str, message: &str) -> StoreError {
    match name {
        "QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED" => StoreError::QuotaExceeded,
        "SecurityError" => StoreError::AccessDenied,
        _ => StoreError::Backend(format!("{name}: {message}")),
    }
}

impl PrefsStore for WebPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| store_error_from_js(&err))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, raw)
                .map_err(|err| store_error_from_js(&err))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw);
            Ok(())
        }
    }

    fn delete_pref(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|err| store_error_from_js(&err))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn exception_names_map_to_store_errors() {
        assert_eq!(
            store_error_from_exception_name("QuotaExceededError", "full"),
            StoreError::QuotaExceeded
        );
        assert_eq!(
            store_error_from_exception_name("SecurityError", "denied"),
            StoreError::AccessDenied
        );
        assert_eq!(
            store_error_from_exception_name("InvalidStateError", "odd"),
            StoreError::Backend("InvalidStateError: odd".to_string())
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_store_is_inert() {
        let store = WebPrefsStore;
        store.save_pref("k", "1").expect("save");
        assert_eq!(store.load_pref("k").expect("load"), None);
        store.delete_pref("k").expect("delete");
    }
}
