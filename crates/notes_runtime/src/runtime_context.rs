//! Runtime provider and context wiring for the notes shell.
//!
//! The provider owns the reactive state signal; descendants dispatch actions through the
//! context instead of writing shared globals.

use leptos::*;
use platform_host::HostServices;

use crate::{
    config::NotesConfig,
    host::NotesHostContext,
    model::NotesState,
    reducer::NotesAction,
};

#[derive(Clone, Copy)]
/// Leptos context for reading notes runtime state and dispatching [`NotesAction`] values.
pub struct NotesRuntimeContext {
    /// Host services and configuration used to execute effects.
    pub host: StoredValue<NotesHostContext>,
    /// Reactive runtime state signal.
    pub state: RwSignal<NotesState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<NotesAction>,
}

impl NotesRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: NotesAction) {
        self.dispatch.call(action);
    }

    /// Flips between the light and dark theme.
    pub fn toggle_theme(&self) {
        self.dispatch_action(NotesAction::ToggleTheme);
    }
}

/// Boots the theme and wires the state signal to reducer dispatch.
pub(crate) fn build_notes_runtime(
    host_services: HostServices,
    config: NotesConfig,
) -> NotesRuntimeContext {
    let host = store_value(NotesHostContext::new(host_services, config));
    let state = create_rw_signal(host.with_value(NotesHostContext::boot));

    let dispatch = Callback::new(move |action: NotesAction| {
        let mut next = state.get_untracked();
        if host.with_value(|host| host.dispatch(&mut next, action)) {
            state.set(next);
        }
    });

    NotesRuntimeContext {
        host,
        state,
        dispatch,
    }
}

#[component]
/// Provides [`NotesRuntimeContext`] to descendant components and boots the theme.
pub fn NotesProvider(
    /// Injected browser or in-memory host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Runtime configuration; defaults to [`NotesConfig::default`].
    #[prop(optional)]
    config: Option<NotesConfig>,
    children: Children,
) -> impl IntoView {
    provide_context(build_notes_runtime(
        host_services,
        config.unwrap_or_default(),
    ));

    children().into_view()
}

/// Returns the current [`NotesRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`NotesProvider`].
pub fn use_notes_runtime() -> NotesRuntimeContext {
    use_context::<NotesRuntimeContext>().expect("NotesRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::Theme, persistence};

    #[test]
    fn toggling_twice_round_trips_state_and_document() {
        let runtime = create_runtime();
        let (services, _, document) = HostServices::in_memory();
        let notes = build_notes_runtime(services, NotesConfig::default());

        assert_eq!(notes.state.get_untracked().theme, Theme::Light);

        notes.toggle_theme();
        assert_eq!(notes.state.get_untracked().theme, Theme::Dark);

        notes.toggle_theme();
        assert_eq!(notes.state.get_untracked().theme, Theme::Light);
        assert_eq!(document.history("data-theme"), vec!["light", "dark", "light"]);

        runtime.dispose();
    }

    #[test]
    fn setting_the_active_theme_leaves_document_untouched() {
        let runtime = create_runtime();
        let (services, _, document) = HostServices::in_memory();
        let notes = build_notes_runtime(services, NotesConfig::default());

        notes.dispatch_action(NotesAction::SetTheme {
            theme: Theme::Light,
        });
        assert_eq!(notes.state.get_untracked().theme, Theme::Light);
        assert_eq!(document.history("data-theme"), vec!["light"]);

        runtime.dispose();
    }

    #[test]
    fn persisted_theme_is_restored_through_the_context() {
        let runtime = create_runtime();
        let (services, prefs, document) = HostServices::in_memory();
        persistence::persist_theme_pref(&prefs, Theme::Dark);
        let notes = build_notes_runtime(services, NotesConfig::default().with_persisted_theme());

        assert_eq!(notes.state.get_untracked().theme, Theme::Dark);
        notes.toggle_theme();
        assert_eq!(notes.state.get_untracked().theme, Theme::Light);
        assert_eq!(document.history("data-theme"), vec!["light", "dark", "light"]);

        runtime.dispose();
    }
}
