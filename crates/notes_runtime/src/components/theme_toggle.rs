use leptos::*;
use system_ui::{Button, ButtonVariant};

use crate::{model::Theme, runtime_context::use_notes_runtime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Label, accessible name, and accent for the theme toggle in a given theme.
pub struct ThemeTogglePresentation {
    /// Visible label.
    pub label: &'static str,
    /// Accessible name describing the action.
    pub aria_label: &'static str,
    /// Button accent.
    pub variant: ButtonVariant,
}

/// Returns how the theme toggle renders while `theme` is active.
pub fn theme_toggle_presentation(theme: Theme) -> ThemeTogglePresentation {
    match theme {
        Theme::Light => ThemeTogglePresentation {
            label: "🌙 Dark",
            aria_label: "Switch to dark mode",
            variant: ButtonVariant::Secondary,
        },
        Theme::Dark => ThemeTogglePresentation {
            label: "☀️ Light",
            aria_label: "Switch to light mode",
            variant: ButtonVariant::Primary,
        },
    }
}

#[component]
/// Button that flips the shell theme.
pub fn ThemeToggle() -> impl IntoView {
    let runtime = use_notes_runtime();
    let presentation = create_memo(move |_| theme_toggle_presentation(runtime.state.get().theme));

    view! {
        <Button
            layout_class="theme-toggle"
            variant=Signal::derive(move || presentation.get().variant)
            aria_label=Signal::derive(move || presentation.get().aria_label.to_string())
            on_click=Callback::new(move |_| runtime.toggle_theme())
        >
            {move || presentation.get().label}
        </Button>
    }
}
