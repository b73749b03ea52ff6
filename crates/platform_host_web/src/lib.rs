//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the notes shell: the
//! `localStorage` preference store and the `<html>` attribute writer used for theming. Off
//! `wasm32` both adapters degrade to inert no-ops so native builds and tests link cleanly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod document;
pub mod storage;

pub use adapters::{
    build_host_services, document_attributes, host_strategy_name, prefs_store,
    selected_host_strategy, HostStrategy,
};
pub use document::WebDocumentAttributes;
pub use storage::local_prefs::WebPrefsStore;
