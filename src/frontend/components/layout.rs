use leptos::prelude::*;

use crate::frontend::use_theme;

/// Coloured title band at the top of every inner page.
#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    let theme = use_theme();

    view! {
        <section class=format!("py-20 {}", theme.hero_band)>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">{title}</h1>
                <p class="text-xl opacity-90 max-w-2xl mx-auto">{subtitle}</p>
            </div>
        </section>
    }
}

#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: &'static str,
) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="text-center mb-12">
            <h2 class=format!("text-3xl md:text-4xl font-bold mb-4 {}", theme.heading)>{title}</h2>
            {(!subtitle.is_empty()).then(|| view! {
                <p class=format!("text-lg max-w-2xl mx-auto {}", theme.body)>{subtitle}</p>
            })}
        </div>
    }
}
