use leptos::prelude::*;

use crate::frontend::components::{Button, ButtonSize, MenuCard, PageHeader};
use crate::frontend::use_theme;
use crate::models::{Filter, MENU_ITEMS, MenuCategory, filtered};

#[component]
pub fn MenuPage() -> impl IntoView {
    let theme = use_theme();
    let filter = RwSignal::new(Filter::<MenuCategory>::All);

    let items = move || filtered(MENU_ITEMS, filter.get());

    let tab = move |label: &'static str, value: Filter<MenuCategory>| {
        let class = move || {
            format!(
                "px-6 py-2 rounded-full font-medium transition-all {}",
                if filter.get() == value { theme.accent_button } else { theme.outline_button }
            )
        };
        view! {
            <button type="button" class=class on:click=move |_| filter.set(value)>
                {label}
            </button>
        }
    };

    view! {
        <PageHeader
            title="Our Menu"
            subtitle="Seasonal ingredients, classic technique and a few surprises."
        />

        <section class="py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-wrap justify-center gap-3 mb-12" role="tablist">
                    {tab("All", Filter::All)}
                    {MenuCategory::ALL
                        .into_iter()
                        .map(|category| tab(category.as_str(), Filter::Only(category)))
                        .collect_view()}
                </div>

                {move || {
                    let items = items();
                    if items.is_empty() {
                        view! {
                            <p class=format!("text-center py-12 {}", theme.body)>
                                "No items found in this category."
                            </p>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                                {items
                                    .into_iter()
                                    .map(|item| view! { <MenuCard item=item/> })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </section>

        <section class=format!("py-16 {}", theme.hero_band)>
            <div class="max-w-3xl mx-auto px-4 text-center">
                <h2 class="text-3xl font-bold mb-4">"Ready to Dine With Us?"</h2>
                <p class="mb-8 opacity-90">"Book your table and let us take care of the rest."</p>
                <Button href="/reservations" size=ButtonSize::Large class="bg-white !text-gray-900 hover:bg-gray-100">
                    "Make a Reservation"
                </Button>
            </div>
        </section>
    }
}
