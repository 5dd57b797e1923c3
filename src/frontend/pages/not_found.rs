use leptos::prelude::*;

use crate::frontend::components::{Button, ButtonVariant};
use crate::frontend::use_theme;

#[component]
pub fn NotFound() -> impl IntoView {
    let theme = use_theme();

    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_actix::ResponseOptions>() {
            response.set_status(actix_web::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="py-32 flex items-center justify-center px-6">
            <div class="text-center">
                <h1 class=format!("text-8xl md:text-9xl font-bold mb-4 {}", theme.accent)>"404"</h1>
                <p class=format!("text-2xl font-semibold mb-2 {}", theme.heading)>"Page not found"</p>
                <p class=format!("mb-8 max-w-md {}", theme.body)>
                    "This table doesn't seem to exist. Let's get you back to the dining room."
                </p>
                <div class="flex gap-4 justify-center">
                    <Button href="/">"Return Home"</Button>
                    <Button href="/menu" variant=ButtonVariant::Outline>"Browse the Menu"</Button>
                </div>
            </div>
        </div>
    }
}
