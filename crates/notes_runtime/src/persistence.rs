//! Theme preference persistence through the namespaced storage helpers.

use platform_host::PrefsStore;

use crate::model::Theme;

/// Key (before namespacing) the theme preference is stored under.
pub const THEME_PREF_KEY: &str = "theme";

/// Loads the stored theme, or `None` when absent or unreadable.
pub fn load_theme_pref(store: &dyn PrefsStore) -> Option<Theme> {
    platform_storage::get_item_with(store, THEME_PREF_KEY, None)
}

/// Stores `theme`. Failures are logged by the storage layer and otherwise ignored.
pub fn persist_theme_pref(store: &dyn PrefsStore, theme: Theme) {
    platform_storage::set_item_with(store, THEME_PREF_KEY, &theme);
}
