use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum AlertVariant {
    #[default]
    Success,
    Error,
}

/// Inline confirmation or failure banner shown above a form.
#[component]
pub fn Alert(
    #[prop(into)] message: String,
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    let (icon, classes, role) = match variant {
        AlertVariant::Success => (
            "✓",
            "bg-green-500/10 border-green-500/30 text-green-600",
            "status",
        ),
        AlertVariant::Error => ("✕", "bg-red-500/10 border-red-500/30 text-red-500", "alert"),
    };

    view! {
        <div role=role class=format!("relative mb-6 p-4 rounded-lg border text-sm {}", classes)>
            {(!title.is_empty()).then(|| view! { <p class="font-semibold mb-1">{title.clone()}</p> })}
            <p class="flex items-center gap-2">
                <span>{icon}</span>
                <span>{message}</span>
            </p>
            {on_dismiss.map(|cb| view! {
                <button
                    type="button"
                    aria-label="Dismiss"
                    class="absolute top-2 right-3 opacity-60 hover:opacity-100"
                    on:click=move |_| cb.run(())
                >
                    "×"
                </button>
            })}
        </div>
    }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! { <Alert message=message variant=AlertVariant::Error/> }
}
