//! Runtime configuration supplied by the entry layer.

use crate::model::Theme;

/// Root-element attribute that mirrors the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Configuration for [`crate::NotesProvider`].
pub struct NotesConfig {
    /// Theme the shell starts with before any hydration.
    pub default_theme: Theme,
    /// Root-element attribute the theme is written to.
    pub theme_attribute: &'static str,
    /// Store the theme in the namespaced preference store and restore it at boot.
    pub persist_theme: bool,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            default_theme: Theme::Light,
            theme_attribute: THEME_ATTRIBUTE,
            persist_theme: false,
        }
    }
}

impl NotesConfig {
    /// Returns a copy with theme persistence enabled.
    pub fn with_persisted_theme(mut self) -> Self {
        self.persist_theme = true;
        self
    }
}
