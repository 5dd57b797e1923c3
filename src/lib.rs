pub mod api;
pub mod common;
pub mod frontend;
pub mod models;
#[cfg(feature = "ssr")]
pub mod services;
pub mod types;

/// WASM hydration entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    // The server stamps the theme and time zone it rendered with on <html>.
    let root = document().document_element();
    let attr = |name: &str| root.as_ref().and_then(|root| root.get_attribute(name));
    let variant = attr("data-theme")
        .and_then(|key| key.parse::<models::ThemeVariant>().ok())
        .unwrap_or_default();
    let clock = attr("data-tz")
        .and_then(|name| name.parse::<chrono_tz::Tz>().ok())
        .map(models::SiteClock::new)
        .unwrap_or_default();

    leptos::mount::hydrate_body(move || {
        provide_context(variant.theme());
        provide_context(clock);
        view! { <frontend::App/> }
    });
}
