//! Reducer actions, side-effect intents, and transition logic for the notes runtime.

use crate::{
    config::NotesConfig,
    model::{NotesState, Theme},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Actions accepted by [`reduce_notes`] to mutate [`NotesState`].
pub enum NotesAction {
    /// Flip between light and dark.
    ToggleTheme,
    /// Switch to a specific theme.
    SetTheme {
        /// Theme to activate.
        theme: Theme,
    },
    /// Restore a theme loaded from storage at boot. Never re-persists.
    HydrateTheme {
        /// Theme read from the preference store.
        theme: Theme,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side effects requested by the reducer and executed by the host context.
pub enum RuntimeEffect {
    /// Mirror the theme onto the root-element attribute.
    ApplyThemeAttribute(Theme),
    /// Store the theme in the namespaced preference store.
    PersistTheme(Theme),
}

/// Applies a [`NotesAction`] to `state` and returns the resulting side effects.
///
/// Actions that leave the theme unchanged emit no effects.
pub fn reduce_notes(
    state: &mut NotesState,
    action: NotesAction,
    config: &NotesConfig,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        NotesAction::ToggleTheme => {
            let next = state.theme.toggled();
            switch_theme(state, next, config.persist_theme, &mut effects);
        }
        NotesAction::SetTheme { theme } => {
            switch_theme(state, theme, config.persist_theme, &mut effects);
        }
        NotesAction::HydrateTheme { theme } => {
            switch_theme(state, theme, false, &mut effects);
        }
    }
    effects
}

fn switch_theme(
    state: &mut NotesState,
    theme: Theme,
    persist: bool,
    effects: &mut Vec<RuntimeEffect>,
) {
    if state.theme == theme {
        return;
    }
    state.theme = theme;
    effects.push(RuntimeEffect::ApplyThemeAttribute(theme));
    if persist {
        effects.push(RuntimeEffect::PersistTheme(theme));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toggle_flips_theme_and_applies_attribute() {
        let mut state = NotesState::default();
        let effects = reduce_notes(&mut state, NotesAction::ToggleTheme, &NotesConfig::default());

        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(effects, vec![RuntimeEffect::ApplyThemeAttribute(Theme::Dark)]);
    }

    #[test]
    fn toggle_persists_when_configured() {
        let mut state = NotesState::default();
        let config = NotesConfig::default().with_persisted_theme();
        let effects = reduce_notes(&mut state, NotesAction::ToggleTheme, &config);

        assert_eq!(
            effects,
            vec![
                RuntimeEffect::ApplyThemeAttribute(Theme::Dark),
                RuntimeEffect::PersistTheme(Theme::Dark),
            ]
        );
    }

    #[test]
    fn setting_current_theme_is_silent() {
        let mut state = NotesState::new(Theme::Dark);
        let effects = reduce_notes(
            &mut state,
            NotesAction::SetTheme { theme: Theme::Dark },
            &NotesConfig::default().with_persisted_theme(),
        );
        assert!(effects.is_empty());
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn hydration_applies_without_persisting() {
        let mut state = NotesState::default();
        let effects = reduce_notes(
            &mut state,
            NotesAction::HydrateTheme { theme: Theme::Dark },
            &NotesConfig::default().with_persisted_theme(),
        );
        assert_eq!(effects, vec![RuntimeEffect::ApplyThemeAttribute(Theme::Dark)]);
    }
}
