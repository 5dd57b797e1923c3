use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::frontend::use_theme;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[component]
pub fn Button(
    children: ChildrenFn,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] disabled: Option<Signal<bool>>,
    #[prop(optional, into)] loading: Option<Signal<bool>>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
    #[prop(optional, into)] href: String,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let theme = use_theme();

    let base_classes = "inline-flex items-center justify-center font-semibold rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2";

    let size_classes = match size {
        ButtonSize::Small => "px-4 py-2 text-sm",
        ButtonSize::Medium => "px-6 py-3 text-base",
        ButtonSize::Large => "px-8 py-4 text-lg",
    };

    let variant_classes = match variant {
        ButtonVariant::Primary => theme.accent_button,
        ButtonVariant::Outline => theme.outline_button,
        ButtonVariant::Ghost => "bg-black/50 hover:bg-black/70 text-white focus:ring-white/50",
    };

    let classes = format!(
        "{} {} {} {} disabled:opacity-50 disabled:cursor-not-allowed",
        base_classes, size_classes, variant_classes, class
    );

    if !href.is_empty() {
        return view! {
            <a href=href class=classes>
                {children()}
            </a>
        }
        .into_any();
    }

    let is_loading = move || loading.map(|l| l.get()).unwrap_or(false);
    let is_disabled = move || is_loading() || disabled.map(|d| d.get()).unwrap_or(false);

    let loading_text_display = if loading_text.is_empty() {
        "Loading...".to_string()
    } else {
        loading_text
    };

    let button_type_val = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    view! {
        <button
            type=button_type_val
            class=classes
            disabled=is_disabled
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {move || {
                if is_loading() {
                    view! {
                        <span class="flex items-center justify-center gap-2">
                            <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                            {loading_text_display.clone()}
                        </span>
                    }
                    .into_any()
                } else {
                    children().into_any()
                }
            }}
        </button>
    }
    .into_any()
}
