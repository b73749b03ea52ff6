//! Notes shell runtime: theme state, reducer, host effects, and shell composition.
//!
//! [`NotesProvider`] is the single owner of application state. Components read it through
//! [`use_notes_runtime`] and mutate it only by dispatching [`NotesAction`] values; the reducer
//! returns [`RuntimeEffect`] intents that the host context executes synchronously (document
//! attribute writes, optional preference persistence).

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod components;
pub mod config;
mod effect_executor;
pub mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;

pub use components::{
    theme_toggle_presentation, Navbar, NoteEditor, NotesShell, NotesSidebar, ThemeToggle,
    ThemeTogglePresentation,
};
pub use config::NotesConfig;
pub use host::NotesHostContext;
pub use model::{NotesState, Theme};
pub use reducer::{reduce_notes, NotesAction, RuntimeEffect};
pub use runtime_context::{use_notes_runtime, NotesProvider, NotesRuntimeContext};
