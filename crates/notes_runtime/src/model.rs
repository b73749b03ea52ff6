//! Core runtime state types for the notes shell.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Shell color theme.
pub enum Theme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Stable token written to the theme attribute and the preference store.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the other theme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// In-memory UI state owned by the runtime provider.
pub struct NotesState {
    /// Active theme.
    pub theme: Theme,
}

impl NotesState {
    /// Creates state starting from `theme`.
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }
}
