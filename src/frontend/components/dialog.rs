use leptos::prelude::*;

/// Modal overlay. Closes on backdrop click, the close button or Escape.
#[component]
pub fn Dialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] label: String,
    children: ChildrenFn,
) -> impl IntoView {
    Effect::new(move |_| {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if open.get_untracked() && ev.key() == "Escape" {
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    });

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-[100] flex items-center justify-center bg-black/90 p-4"
                role="dialog"
                aria-modal="true"
                aria-label=label.clone()
                on:click=move |_| on_close.run(())
            >
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute top-4 right-4 text-white text-3xl hover:text-gray-300 transition-colors"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_close.run(());
                    }
                >
                    "✕"
                </button>
                <div class="relative max-w-5xl w-full" on:click=|ev| ev.stop_propagation()>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
