//! Shared host-bundle model for browser and headless runtime composition.

use std::rc::Rc;

use crate::{DocumentAttributes, MemoryDocumentAttributes, MemoryPrefsStore, PrefsStore};

#[derive(Clone)]
/// Host services injected into the notes runtime by the entry layer.
pub struct HostServices {
    /// Backing key-value store for namespaced preferences.
    pub prefs: Rc<dyn PrefsStore>,
    /// Root-element attribute writer consumed by stylesheets.
    pub document: Rc<dyn DocumentAttributes>,
}

impl HostServices {
    /// Builds a host bundle from concrete services.
    pub fn new(prefs: Rc<dyn PrefsStore>, document: Rc<dyn DocumentAttributes>) -> Self {
        Self { prefs, document }
    }

    /// Builds a fully in-memory host bundle and returns handles to its parts for inspection.
    pub fn in_memory() -> (Self, MemoryPrefsStore, MemoryDocumentAttributes) {
        let prefs = MemoryPrefsStore::default();
        let document = MemoryDocumentAttributes::default();
        let services = Self::new(Rc::new(prefs.clone()), Rc::new(document.clone()));
        (services, prefs, document)
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices").finish_non_exhaustive()
    }
}
