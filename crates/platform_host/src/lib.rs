//! Typed host-domain contracts and leaf helpers shared by the notes shell and its browser
//! adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the key-value
//! preference store contract, namespaced JSON access, the document-attribute host contract, and
//! small id/time helpers. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod document;
pub mod host;
pub mod id;
pub mod storage;
pub mod time;

pub use document::{
    DocumentAttributes, HostError, MemoryDocumentAttributes, NoopDocumentAttributes,
};
pub use host::HostServices;
pub use id::{uid, DEFAULT_ID_PREFIX};
pub use storage::namespaced::{namespaced_key, NamespacedPrefs, NOTES_STORAGE_NAMESPACE};
pub use storage::prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore, StoreError};
pub use time::{format_date, unix_time_ms_now, DateFormatOptions, DateInput};
