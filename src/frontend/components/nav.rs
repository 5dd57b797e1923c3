use leptos::prelude::*;

use crate::frontend::use_theme;

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Menu", "/menu"),
    ("Gallery", "/gallery"),
    ("Reservations", "/reservations"),
    ("Contact", "/contact"),
];

/// Page offset past which the bar switches to its "scrolled" look.
const SCROLL_THRESHOLD: f64 = 20.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    // Browser only; effects do not run during SSR.
    Effect::new(move |_| {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = window().scroll_y().unwrap_or(0.0);
            set_scrolled.set(y > SCROLL_THRESHOLD);
        });
        on_cleanup(move || handle.remove());
    });

    let nav_class = move || {
        format!(
            "w-full sticky top-0 z-50 transition-all duration-300 {}",
            if scrolled.get() { theme.nav_scrolled } else { theme.nav }
        )
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-20">
                    <a href="/" class="flex-shrink-0 flex items-center">
                        <img class="h-10 w-auto object-contain rounded" src=theme.logo_url alt=format!("{} logo", theme.brand)/>
                        <span class=format!("ml-3 text-xl font-bold {}", theme.heading)>{theme.brand}</span>
                    </a>

                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS
                            .iter()
                            .map(|(title, href)| view! {
                                <a href=*href class=format!("px-3 py-2 rounded-md text-sm font-medium transition-colors {}", theme.nav_link)>
                                    {*title}
                                </a>
                            })
                            .collect_view()}
                        <a href="/reservations" class=format!("px-4 py-2 rounded-md text-sm font-medium transition-colors {}", theme.accent_button)>
                            "Reserve a Table"
                        </a>
                    </div>

                    <div class="md:hidden flex items-center">
                        <button
                            type="button"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open.get().to_string()
                            class=format!("p-2 rounded-md text-2xl {}", theme.nav_link)
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden px-2 pt-2 pb-3 space-y-1 sm:px-3">
                    {NAV_LINKS
                        .iter()
                        .map(|(title, href)| view! {
                            <a
                                href=*href
                                class=format!("block px-3 py-2 rounded-md text-base font-medium {}", theme.nav_link)
                                on:click=move |_| set_menu_open.set(false)
                            >
                                {*title}
                            </a>
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
