//! Document-level attribute contract used to expose UI state to stylesheets.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures reported by host-side UI services.
pub enum HostError {
    /// The host has no document to write to.
    #[error("document unavailable")]
    DocumentUnavailable,
    /// The host rejected the attribute write.
    #[error("attribute `{name}` rejected: {reason}")]
    AttributeRejected {
        /// Attribute name passed by the caller.
        name: String,
        /// Host-provided failure description.
        reason: String,
    },
}

/// Host service for attributes on the root UI element (`<html>` in the browser).
pub trait DocumentAttributes {
    /// Sets `name` to `value` on the root element.
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), HostError>;

    /// Reads `name` from the root element.
    fn root_attribute(&self, name: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Document host that accepts and forgets every write.
pub struct NoopDocumentAttributes;

impl DocumentAttributes for NoopDocumentAttributes {
    fn set_root_attribute(&self, _name: &str, _value: &str) -> Result<(), HostError> {
        Ok(())
    }

    fn root_attribute(&self, _name: &str) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory document host that also records the order of writes. Clones share state.
pub struct MemoryDocumentAttributes {
    attributes: Rc<RefCell<BTreeMap<String, String>>>,
    writes: Rc<RefCell<Vec<(String, String)>>>,
}

impl MemoryDocumentAttributes {
    /// Returns every `(name, value)` write in the order it happened.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }

    /// Returns the values written to `name`, oldest first.
    pub fn history(&self, name: &str) -> Vec<String> {
        self.writes
            .borrow()
            .iter()
            .filter(|(attr, _)| attr == name)
            .map(|(_, value)| value.clone())
            .collect()
    }
}

impl DocumentAttributes for MemoryDocumentAttributes {
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), HostError> {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        self.writes
            .borrow_mut()
            .push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_document_tracks_current_value_and_history() {
        let doc = MemoryDocumentAttributes::default();
        doc.set_root_attribute("data-theme", "light").expect("write");
        doc.set_root_attribute("lang", "en").expect("write");
        doc.set_root_attribute("data-theme", "dark").expect("write");

        assert_eq!(doc.root_attribute("data-theme").as_deref(), Some("dark"));
        assert_eq!(doc.history("data-theme"), vec!["light", "dark"]);
        assert_eq!(doc.writes().len(), 3);
    }

    #[test]
    fn noop_document_reads_nothing() {
        let doc = NoopDocumentAttributes;
        doc.set_root_attribute("data-theme", "dark").expect("write");
        assert_eq!(doc.root_attribute("data-theme"), None);
    }
}
