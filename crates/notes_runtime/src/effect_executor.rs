//! Synchronous execution of reducer side effects against host services.

use leptos::logging;

use crate::{host::NotesHostContext, persistence, reducer::RuntimeEffect};

pub(crate) fn execute_effects(host: &NotesHostContext, effects: &[RuntimeEffect]) {
    for effect in effects {
        execute_effect(host, effect);
    }
}

fn execute_effect(host: &NotesHostContext, effect: &RuntimeEffect) {
    match effect {
        RuntimeEffect::ApplyThemeAttribute(theme) => {
            if let Err(err) = host
                .services()
                .document
                .set_root_attribute(host.config().theme_attribute, theme.as_str())
            {
                logging::warn!("apply theme attribute failed: {err}");
            }
        }
        RuntimeEffect::PersistTheme(theme) => {
            persistence::persist_theme_pref(&*host.services().prefs, *theme);
        }
    }
}
