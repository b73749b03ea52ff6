use std::rc::Rc;

use platform_host::{
    DocumentAttributes, HostServices, MemoryDocumentAttributes, MemoryPrefsStore, PrefsStore,
};

use crate::{WebDocumentAttributes, WebPrefsStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters (`localStorage`, `document.documentElement`).
    Browser,
    /// Process-local in-memory adapters, selected by the `host-memory` feature.
    Memory,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-memory")]
    {
        HostStrategy::Memory
    }

    #[cfg(not(feature = "host-memory"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Memory => "memory",
    }
}

thread_local! {
    static MEMORY_PREFS: MemoryPrefsStore = MemoryPrefsStore::default();
    static MEMORY_DOCUMENT: MemoryDocumentAttributes = MemoryDocumentAttributes::default();
}

/// Returns the preference store for the selected host strategy.
///
/// The memory strategy hands out clones of one thread-local store, so values survive between
/// calls.
pub fn prefs_store() -> Rc<dyn PrefsStore> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebPrefsStore),
        HostStrategy::Memory => {
            MEMORY_PREFS.with(|store| Rc::new(store.clone()) as Rc<dyn PrefsStore>)
        }
    }
}

/// Returns the document-attribute host for the selected host strategy.
pub fn document_attributes() -> Rc<dyn DocumentAttributes> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebDocumentAttributes),
        HostStrategy::Memory => {
            MEMORY_DOCUMENT.with(|doc| Rc::new(doc.clone()) as Rc<dyn DocumentAttributes>)
        }
    }
}

/// Assembles the host bundle consumed by the notes runtime provider.
pub fn build_host_services() -> HostServices {
    HostServices::new(prefs_store(), document_attributes())
}
