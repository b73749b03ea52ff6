use leptos::*;
use system_ui::cn;

const PLACEHOLDER_NOTES: [(&str, bool); 2] = [("Welcome Note", true), ("Add more...", false)];

#[component]
/// Static notes-list placeholder.
pub fn NotesSidebar() -> impl IntoView {
    view! {
        <aside class="sidebar" aria-label="Notes">
            <div class="sidebar-header">"My Notes"</div>
            <ul class="notes-list">
                {PLACEHOLDER_NOTES
                    .iter()
                    .map(|&(title, selected)| {
                        view! {
                            <li
                                class=cn([Some("note-item"), selected.then_some("selected")])
                                aria-current=selected.then_some("true")
                            >
                                {title}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
