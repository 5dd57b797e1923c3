pub mod components;
pub mod pages;

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::common::SiteConfig;
use crate::frontend::components::{Footer, Navbar};
use crate::models::{SiteClock, Theme};
use pages::{ContactPage, GalleryPage, HomePage, MenuPage, NotFound, ReservationsPage};

/// Theme provided by the shell (server) or the hydration entry point (client).
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

/// Restaurant clock provided alongside the theme.
pub fn use_clock() -> SiteClock {
    use_context::<SiteClock>().unwrap_or_default()
}

/// Returns a confirmed form to editing and forgets the action result.
///
/// Uses `try_*` so a timer firing after the page unmounted does nothing.
pub fn clear_submission<F, O, R>(form: RwSignal<F>, result: R, reset: fn(&mut F))
where
    F: Send + Sync + 'static,
    O: Send + Sync + 'static,
    R: Set<Value = Option<O>>,
{
    form.try_update(reset);
    result.try_set(None);
}

/// Schedules [`clear_submission`] after `delay`, cancelled with the owning scope.
pub fn schedule_reset<F, O, R>(
    delay: Duration,
    form: RwSignal<F>,
    result: R,
    reset: fn(&mut F),
) where
    F: Send + Sync + 'static,
    O: Send + Sync + 'static,
    R: Set<Value = Option<O>> + 'static,
{
    let handle = set_timeout_with_handle(move || clear_submission(form, result, reset), delay);
    match handle {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => log::warn!("Reset timer unavailable: {:?}", err),
    }
}

/// Message shown to the visitor when a server function fails.
pub fn failure_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        _ => "Something went wrong. Please try again.".to_string(),
    }
}

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let theme = config.theme.theme();
    let clock = config.clock();
    provide_context(theme);
    provide_context(clock);

    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme=theme.variant.as_str() data-tz=clock.tz().name()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let theme = use_theme();

    view! {
        <Stylesheet id="leptos" href="/pkg/savory-bistro.css"/>
        <Title text=format!("{} - Restaurant & Bar", theme.brand)/>
        <Meta name="description" content=theme.tagline/>

        <Router>
            <div class=format!("min-h-screen flex flex-col {}", theme.page)>
                <Navbar/>
                <main class="flex-grow">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/menu") view=MenuPage/>
                        <Route path=path!("/gallery") view=GalleryPage/>
                        <Route path=path!("/reservations") view=ReservationsPage/>
                        <Route path=path!("/contact") view=ContactPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
