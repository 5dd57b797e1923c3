use leptos::prelude::*;

use crate::frontend::use_theme;

fn field_classes(input_theme: &str, has_error: bool) -> String {
    format!(
        "w-full px-4 py-3 rounded-lg border focus:outline-none focus:ring-2 focus:border-transparent transition-all {} {}",
        input_theme,
        if has_error { "border-red-500" } else { "" }
    )
}

#[component]
fn FieldError(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error
            .and_then(|e| e.get())
            .map(|message| view! { <p class="text-red-500 text-sm mt-1">{message}</p> })
    }
}

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] hint: String,
    #[prop(optional, into)] min: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
    #[prop(optional, into)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
    let theme = use_theme();
    let has_hint = !hint.is_empty();
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };
    let has_error = move || error.map(|e| e.with(Option::is_some)).unwrap_or(false);

    view! {
        <div>
            <label for=name.clone() class=format!("block text-sm font-medium mb-2 {}", theme.heading)>
                {label}
                {required.then_some(" *")}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                min=(!min.is_empty()).then_some(min)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
                class=move || field_classes(theme.input, has_error())
            />
            {has_hint.then(|| view! { <p class=format!("mt-1 text-xs {}", theme.body)>{hint.clone()}</p> })}
            <FieldError error=error/>
        </div>
    }
}

#[component]
pub fn EmailInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="email"
            placeholder="your.email@example.com"
            input_type="email"
            required=true
            value=value
            on_input=on_input
            error=error.unwrap_or_default()
        />
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(default = 4)] rows: u32,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let theme = use_theme();
    let has_error = move || error.map(|e| e.with(Option::is_some)).unwrap_or(false);

    view! {
        <div>
            <label for=name.clone() class=format!("block text-sm font-medium mb-2 {}", theme.heading)>
                {label}
                {required.then_some(" *")}
            </label>
            <textarea
                id=name.clone()
                name=name
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                class=move || field_classes(theme.input, has_error())
            ></textarea>
            <FieldError error=error/>
        </div>
    }
}

/// `(value, label)` pairs rendered as `<option>`s after an empty placeholder.
#[component]
pub fn SelectInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let theme = use_theme();
    let has_error = move || error.map(|e| e.with(Option::is_some)).unwrap_or(false);
    let has_placeholder = !placeholder.is_empty();

    view! {
        <div>
            <label for=name.clone() class=format!("block text-sm font-medium mb-2 {}", theme.heading)>
                {label}
                {required.then_some(" *")}
            </label>
            <select
                id=name.clone()
                name=name
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                class=move || field_classes(theme.input, has_error())
            >
                {has_placeholder.then(|| view! { <option value="">{placeholder.clone()}</option> })}
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, option_label)| {
                            let selected = option_value == current;
                            view! {
                                <option value=option_value selected=selected>{option_label}</option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <FieldError error=error/>
        </div>
    }
}
