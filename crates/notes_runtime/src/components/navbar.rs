use leptos::*;
use system_ui::cn;

#[component]
/// Sticky application title bar.
pub fn Navbar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] sticky: Option<bool>,
) -> impl IntoView {
    let class = cn([
        Some("navbar"),
        sticky.unwrap_or(true).then_some("navbar--sticky"),
        layout_class,
    ]);

    view! {
        <nav class=class data-ui-kind="navbar">
            <div class="navbar-container">
                <span class="navbar-title">
                    <span class="accent-strong">"Simple"</span>
                    <span class="accent-weak">"Notes"</span>
                </span>
            </div>
        </nav>
    }
}
