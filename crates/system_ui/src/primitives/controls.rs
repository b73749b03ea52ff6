use super::*;

const SPINNER_STYLE: &str = "border:2.2px solid #fff;border-right-color:transparent;\
border-radius:50%;width:1em;height:1em;display:inline-block;vertical-align:middle;\
margin-right:8px;animation:ui-spin 0.6s linear infinite";
const SPINNER_KEYFRAMES: &str = "@keyframes ui-spin { to { transform: rotate(360deg); } }";
const INERT_OPACITY: &str = "0.56";
const LOADING_CONTENT_OPACITY: &str = "0.7";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Caller-supplied button configuration, resolved by [`ButtonAppearance::resolve`].
pub struct ButtonOptions<'a> {
    /// Visual variant.
    pub variant: ButtonVariant,
    /// Box size.
    pub size: ButtonSize,
    /// Stretch to the container width instead of sizing to content.
    pub full_width: bool,
    /// Non-interactive and de-emphasized.
    pub disabled: bool,
    /// Busy: non-interactive, spinner shown, content dimmed.
    pub loading: bool,
    /// Extra layout class appended after the primitive classes.
    pub layout_class: Option<&'a str>,
    /// Inline style declarations appended after the computed ones.
    pub style: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything the [`Button`] markup needs, derived from [`ButtonOptions`] alone.
pub struct ButtonAppearance {
    /// Space-separated class list.
    pub class: String,
    /// Inline style declarations.
    pub style: String,
    /// Whether the control accepts pointer/keyboard activation.
    pub interactive: bool,
    /// Whether assistive technology should see the control as busy.
    pub aria_busy: bool,
    /// Opacity applied to the content span.
    pub content_opacity: &'static str,
    /// `data-ui-variant` token.
    pub variant_token: &'static str,
    /// `data-ui-size` token.
    pub size_token: &'static str,
    /// `data-ui-state` token.
    pub state_token: &'static str,
}

impl ButtonAppearance {
    /// Resolves the class list, inline style, and interaction state for a button.
    ///
    /// Hover and focus colors are exposed as `--ui-button-hover-bg` and
    /// `--ui-button-focus-ring` for stylesheet rules; no pointer state is tracked here.
    pub fn resolve(options: &ButtonOptions<'_>) -> Self {
        let palette = options.variant.palette();
        let metrics = options.size.metrics();
        let inert = options.disabled || options.loading;

        let class = cn([
            Some("ui-button"),
            Some(options.variant.class_name()),
            Some(options.size.class_name()),
            options.full_width.then_some("ui-button--full-width"),
            options.loading.then_some("is-loading"),
            options.disabled.then_some("is-disabled"),
            options.layout_class,
        ]);

        let mut style = format!(
            "display:inline-flex;align-items:center;justify-content:center;width:{width};\
background:{background};color:{color};border:{border};border-radius:{radius};\
font-size:{font_size};font-weight:600;letter-spacing:0.03em;padding:{padding};\
min-width:{min_width};cursor:{cursor};opacity:{opacity};",
            width = if options.full_width { "100%" } else { "auto" },
            background = palette.background,
            color = palette.color,
            border = palette.border,
            radius = metrics.border_radius,
            font_size = metrics.font_size,
            padding = metrics.padding,
            min_width = metrics.min_width,
            cursor = if inert { "not-allowed" } else { "pointer" },
            opacity = if inert { INERT_OPACITY } else { "1" },
        );
        if options.disabled {
            style.push_str("pointer-events:none;");
        }
        style.push_str(&format!(
            "transition:background 0.13s, border 0.13s, box-shadow 0.14s, color 0.14s;\
outline:none;position:relative;user-select:none;\
box-shadow:0 2px 7px rgba(59,130,246,0.07);\
--ui-button-hover-bg:{};--ui-button-focus-ring:{};",
            palette.hover_background, palette.focus_ring
        ));
        if let Some(extra) = options.style.map(str::trim).filter(|s| !s.is_empty()) {
            style.push_str(extra);
        }

        let state_token = if options.loading {
            "loading"
        } else if options.disabled {
            "disabled"
        } else {
            "idle"
        };

        Self {
            class,
            style,
            interactive: !inert,
            aria_busy: options.loading,
            content_opacity: if options.loading {
                LOADING_CONTENT_OPACITY
            } else {
                "1"
            },
            variant_token: options.variant.token(),
            size_token: options.size.token(),
            state_token,
        }
    }

    /// Whether an activation should reach the caller's click handler.
    pub fn should_dispatch(&self) -> bool {
        self.interactive
    }

    /// Value of the `disabled` attribute.
    pub fn disabled_attr(&self) -> bool {
        !self.interactive
    }

    /// Value of the `aria-busy` attribute.
    pub fn aria_busy_attr(&self) -> &'static str {
        bool_token(self.aria_busy)
    }

    /// Whether a [`Spinner`] precedes the content.
    pub fn shows_spinner(&self) -> bool {
        self.aria_busy
    }
}

#[component]
/// Small indeterminate spinner shown ahead of busy control content.
pub fn Spinner() -> impl IntoView {
    view! {
        <style>{SPINNER_KEYFRAMES}</style>
        <span
            class="ui-spinner"
            style=SPINNER_STYLE
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="spinner"
        ></span>
    }
}

/// Reactive inputs feeding a button's [`ButtonAppearance`].
pub(crate) struct ButtonSignals {
    pub(crate) variant: MaybeSignal<ButtonVariant>,
    pub(crate) size: MaybeSignal<ButtonSize>,
    pub(crate) full_width: MaybeSignal<bool>,
    pub(crate) disabled: MaybeSignal<bool>,
    pub(crate) loading: MaybeSignal<bool>,
    pub(crate) layout_class: Option<&'static str>,
    pub(crate) style: Option<String>,
}

pub(crate) fn appearance_memo(signals: ButtonSignals) -> Memo<ButtonAppearance> {
    let ButtonSignals {
        variant,
        size,
        full_width,
        disabled,
        loading,
        layout_class,
        style,
    } = signals;
    create_memo(move |_| {
        ButtonAppearance::resolve(&ButtonOptions {
            variant: variant.get(),
            size: size.get(),
            full_width: full_width.get(),
            disabled: disabled.get(),
            loading: loading.get(),
            layout_class,
            style: style.as_deref(),
        })
    })
}

#[component]
/// Shared button primitive with variant/size lookup, busy and disabled semantics.
///
/// While `loading` the control is disabled, reports `aria-busy="true"`, shows a [`Spinner`]
/// ahead of its content, and dims the content. Extra attributes (`attr:*`) are forwarded to
/// the `<button>` element.
pub fn Button(
    #[prop(optional, into)] variant: MaybeSignal<ButtonVariant>,
    #[prop(optional, into)] size: MaybeSignal<ButtonSize>,
    #[prop(optional, into)] full_width: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let appearance = appearance_memo(ButtonSignals {
        variant,
        size,
        full_width,
        disabled,
        loading,
        layout_class,
        style,
    });

    view! {
        <button
            type="button"
            class=move || appearance.with(|a| a.class.clone())
            style=move || appearance.with(|a| a.style.clone())
            aria-label=move || aria_label.get()
            disabled=move || appearance.with(ButtonAppearance::disabled_attr)
            aria-busy=move || appearance.with(ButtonAppearance::aria_busy_attr)
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=move || appearance.with(|a| a.variant_token)
            data-ui-size=move || appearance.with(|a| a.size_token)
            data-ui-state=move || appearance.with(|a| a.state_token)
            on:click=move |ev| {
                if !appearance.with_untracked(ButtonAppearance::should_dispatch) {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            {..attrs}
        >
            {move || {
                appearance.with(ButtonAppearance::shows_spinner).then(|| view! { <Spinner /> })
            }}
            <span
                data-ui-slot="content"
                style=move || format!("opacity:{}", appearance.with(|a| a.content_opacity))
            >
                {children()}
            </span>
        </button>
    }
}

#[component]
/// Shared multi-line text input primitive.
pub fn TextArea(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    view! {
        <textarea
            class=cn([Some("ui-textarea"), layout_class])
            aria-label=aria_label
            placeholder=placeholder
            rows=rows
            spellcheck="false"
            data-ui-primitive="true"
            data-ui-kind="text-area"
            data-ui-variant="inset"
        ></textarea>
    }
}
