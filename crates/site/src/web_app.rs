use leptos::*;
use leptos_meta::*;
use notes_runtime::{NotesConfig, NotesProvider, NotesShell};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Simple Notes" />
        <Meta name="description" content="A minimal note-taking shell." />

        <div class="site-root">
            <NotesEntry />
        </div>
    }
}

#[component]
pub fn NotesEntry(#[prop(optional)] config: Option<NotesConfig>) -> impl IntoView {
    let host_services = platform_host_web::build_host_services();

    view! {
        <NotesProvider host_services config=config.unwrap_or_default()>
            <NotesShell />
        </NotesProvider>
    }
}
