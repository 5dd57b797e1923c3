use leptos::prelude::*;

use super::nav::NAV_LINKS;
use crate::frontend::{use_clock, use_theme};
use crate::models::WeeklySchedule;

const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3022.2158!2d-73.9878!3d40.7484!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zNDDCsDQ0JzU0LjIiTiA3M8KwNTknMTYuMSJX!5e0!3m2!1sen!2sus!4v1600000000000";

#[component]
pub fn Footer() -> impl IntoView {
    let theme = use_theme();
    let hours = WeeklySchedule::default().summary();
    let year = use_clock().now().format("%Y").to_string();

    view! {
        <footer class=theme.footer>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div>
                        <h3 class="text-2xl font-bold mb-4">{theme.brand}</h3>
                        <p class="opacity-75 mb-4">{theme.tagline}</p>
                        <div class="flex space-x-4">
                            {theme
                                .socials
                                .iter()
                                .map(|(name, url)| view! {
                                    <a
                                        href=*url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=*name
                                        class="opacity-75 hover:opacity-100 transition-opacity"
                                    >
                                        {*name}
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {NAV_LINKS
                                .iter()
                                .map(|(title, href)| view! {
                                    <li>
                                        <a href=*href class="opacity-75 hover:opacity-100 transition-opacity">{*title}</a>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Opening Hours"</h4>
                        <ul class="space-y-2 opacity-75">
                            {hours
                                .into_iter()
                                .map(|(days, time)| view! {
                                    <li>
                                        <span class="font-medium">{days}</span>
                                        <br/>
                                        {time}
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Contact"</h4>
                        <address class="not-italic opacity-75 space-y-1">
                            {theme.address.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                            <p class="pt-2">
                                <a href=format!("tel:{}", theme.phone_main) class="hover:underline">{theme.phone_main}</a>
                            </p>
                            <p>
                                <a href=format!("mailto:{}", theme.email_general) class="hover:underline">{theme.email_general}</a>
                            </p>
                        </address>
                    </div>
                </div>

                <div class="mt-10 rounded-lg overflow-hidden h-56">
                    <iframe
                        src=MAP_EMBED_URL
                        title=format!("Map showing the location of {}", theme.brand)
                        class="w-full h-full border-0"
                        {leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                        allowfullscreen=true
                        referrerpolicy="no-referrer-when-downgrade"
                    ></iframe>
                </div>

                <div class="border-t border-white/10 mt-8 pt-8 text-center text-sm opacity-60">
                    <p>{format!("© {} {}. All rights reserved.", year, theme.brand)}</p>
                </div>
            </div>
        </footer>
    }
}
