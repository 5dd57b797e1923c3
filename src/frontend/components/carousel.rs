use std::time::Duration;

use leptos::prelude::*;

use crate::frontend::use_theme;
use crate::models::Cursor;

/// Shows one item at a time with prev/next arrows and position dots.
///
/// A non-zero `interval_ms` advances automatically; any manual move restarts
/// the timer.
#[component]
pub fn Carousel<T, F, IV>(
    items: Vec<T>,
    render: F,
    #[prop(optional)] interval_ms: u64,
    #[prop(optional, into)] label: String,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> IV + Clone + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let theme = use_theme();
    let Some(start) = Cursor::new(0, items.len()) else {
        return ().into_any();
    };

    let cursor = RwSignal::new(start);
    // Bumped on every manual move so the auto-advance timer is rebuilt.
    let touched = RwSignal::new(0u32);

    if interval_ms > 0 && start.has_many() {
        Effect::new(move |_| {
            touched.track();
            let handle = set_interval_with_handle(
                move || cursor.update(Cursor::next),
                Duration::from_millis(interval_ms),
            );
            match handle {
                Ok(handle) => on_cleanup(move || handle.clear()),
                Err(err) => log::warn!("Carousel timer unavailable: {:?}", err),
            }
        });
    }

    let step = move |forward: bool| {
        cursor.update(|c| if forward { c.next() } else { c.prev() });
        touched.update(|n| *n = n.wrapping_add(1));
    };

    let slides = items;
    let current = move || {
        let item = slides[cursor.get().index()].clone();
        render(item)
    };

    let dots = (0..start.len())
        .map(|i| {
            let class = move || {
                format!(
                    "w-3 h-3 rounded-full transition-all {}",
                    if cursor.get().index() == i { "bg-amber-500 scale-125" } else { "bg-gray-400/60" }
                )
            };
            view! {
                <button
                    type="button"
                    class=class
                    aria-label=format!("Go to slide {}", i + 1)
                    on:click=move |_| {
                        cursor.update(|c| c.go_to(i));
                        touched.update(|n| *n = n.wrapping_add(1));
                    }
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="relative" role="region" aria-roledescription="carousel" aria-label=label>
            <div class="min-h-[14rem]" aria-live="polite">{current}</div>

            {start.has_many().then(|| view! {
                <div class="flex items-center justify-center gap-6 mt-6">
                    <button
                        type="button"
                        aria-label="Previous"
                        class=format!("w-10 h-10 rounded-full {}", theme.outline_button)
                        on:click=move |_| step(false)
                    >
                        "‹"
                    </button>
                    <div class="flex gap-2">{dots}</div>
                    <button
                        type="button"
                        aria-label="Next"
                        class=format!("w-10 h-10 rounded-full {}", theme.outline_button)
                        on:click=move |_| step(true)
                    >
                        "›"
                    </button>
                </div>
            })}
        </div>
    }
    .into_any()
}
