//! Host context binding runtime configuration to injected host services.

use platform_host::HostServices;

use crate::{
    config::NotesConfig,
    effect_executor,
    model::NotesState,
    persistence,
    reducer::{reduce_notes, NotesAction, RuntimeEffect},
};

#[derive(Debug, Clone)]
/// Runtime-side view of the host: services plus the configuration that drives effects.
pub struct NotesHostContext {
    services: HostServices,
    config: NotesConfig,
}

impl NotesHostContext {
    /// Binds `services` to `config`.
    pub fn new(services: HostServices, config: NotesConfig) -> Self {
        Self { services, config }
    }

    /// Injected host services.
    pub fn services(&self) -> &HostServices {
        &self.services
    }

    /// Active runtime configuration.
    pub fn config(&self) -> &NotesConfig {
        &self.config
    }

    /// Builds the boot state: mirrors the default theme onto the document, then restores a
    /// stored theme when persistence is enabled.
    pub fn boot(&self) -> NotesState {
        let mut state = NotesState::new(self.config.default_theme);
        self.execute(&[RuntimeEffect::ApplyThemeAttribute(state.theme)]);
        if self.config.persist_theme {
            if let Some(theme) = persistence::load_theme_pref(&*self.services.prefs) {
                self.dispatch(&mut state, NotesAction::HydrateTheme { theme });
            }
        }
        state
    }

    /// Reduces `action` into `state` and executes the resulting effects.
    ///
    /// Returns whether the state changed.
    pub fn dispatch(&self, state: &mut NotesState, action: NotesAction) -> bool {
        let previous = *state;
        let effects = reduce_notes(state, action, &self.config);
        self.execute(&effects);
        *state != previous
    }

    fn execute(&self, effects: &[RuntimeEffect]) {
        effect_executor::execute_effects(self, effects);
    }
}
