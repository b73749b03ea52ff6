//! Notes shell UI composition.

mod editor;
mod navbar;
mod sidebar;
mod theme_toggle;

use leptos::*;

pub use self::{
    editor::NoteEditor,
    navbar::Navbar,
    sidebar::NotesSidebar,
    theme_toggle::{theme_toggle_presentation, ThemeToggle, ThemeTogglePresentation},
};

#[component]
/// Root shell layout: title bar, theme toggle, notes sidebar, and editor area.
pub fn NotesShell() -> impl IntoView {
    view! {
        <div class="App overall-layout" data-ui-kind="notes-shell">
            <Navbar />
            <ThemeToggle />
            <div class="main-layout-container">
                <NotesSidebar />
                <main class="main-content">
                    <NoteEditor />
                </main>
            </div>
        </div>
    }
}
