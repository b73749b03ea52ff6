//! Root-element attribute writer backed by `document.documentElement`.

use platform_host::{DocumentAttributes, HostError};

#[derive(Debug, Clone, Copy, Default)]
/// Browser document host writing attributes onto `<html>`.
pub struct WebDocumentAttributes;

#[cfg(target_arch = "wasm32")]
fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

impl DocumentAttributes for WebDocumentAttributes {
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), HostError> {
        #[cfg(target_arch = "wasm32")]
        {
            let root = root_element().ok_or(HostError::DocumentUnavailable)?;
            root.set_attribute(name, value)
                .map_err(|err| HostError::AttributeRejected {
                    name: name.to_string(),
                    reason: format!("{err:?}"),
                })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (name, value);
            Ok(())
        }
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            root_element()?.get_attribute(name)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = name;
            None
        }
    }
}
