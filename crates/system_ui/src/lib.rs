//! Shared UI primitive library for the notes shell.
//!
//! The crate owns reusable Leptos primitives, the conditional class-name joiner, and the stable
//! `data-ui-*` DOM contract consumed by the shell stylesheets. Shell components should compose
//! these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_names;
mod primitives;

pub use class_names::cn;
pub use primitives::{
    Button, ButtonAppearance, ButtonOptions, ButtonSize, ButtonVariant, SizeMetrics,
    Spinner, TextArea, VariantPalette,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        cn, Button, ButtonAppearance, ButtonOptions, ButtonSize, ButtonVariant, Spinner, TextArea,
    };
}
