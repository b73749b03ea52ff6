use leptos::*;
use system_ui::TextArea;

#[component]
/// Static note editor placeholder.
pub fn NoteEditor() -> impl IntoView {
    view! {
        <div class="main-editor">
            <h2>"Note Title"</h2>
            <TextArea
                layout_class="note-editor"
                rows=12
                aria_label="Note body"
                placeholder="Start writing your note..."
            />
        </div>
    }
}
