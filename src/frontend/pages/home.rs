use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api::SubscribeNewsletter;
use crate::frontend::components::{
    Alert, Button, ButtonSize, ButtonVariant, Carousel, EventCard, FeaturedDishCard,
    SectionHeading, TestimonialCard,
};
use crate::frontend::{failure_message, schedule_reset, use_theme};
use crate::models::{
    EVENT_PROMOS, FEATURED_DISHES, NewsletterForm, TESTIMONIALS, Testimonial, WeeklySchedule,
};

const TESTIMONIAL_INTERVAL_MS: u64 = 6000;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>
        <FeaturedDishes/>
        <About/>
        <Testimonials/>
        <Events/>
        <Newsletter/>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section
            class="relative h-[85vh] min-h-[500px] flex items-center justify-center bg-cover bg-center"
            style=format!("background-image: url('{}')", theme.hero_image_url)
        >
            <div class="absolute inset-0 bg-black/55"></div>
            <div class="relative z-10 text-center text-white px-4 max-w-3xl">
                <h1 class="text-4xl md:text-6xl font-bold mb-6">{theme.hero_title}</h1>
                <p class="text-xl md:text-2xl mb-10 opacity-90">{theme.hero_subtitle}</p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Button href="/reservations" size=ButtonSize::Large>"Reserve a Table"</Button>
                    <Button href="/menu" size=ButtonSize::Large variant=ButtonVariant::Ghost>"View Menu"</Button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturedDishes() -> impl IntoView {
    view! {
        <section class="py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Featured Dishes"
                    subtitle="A few favourites from our kitchen, made fresh every day."
                />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {FEATURED_DISHES
                        .iter()
                        .map(|dish| view! { <FeaturedDishCard dish=*dish/> })
                        .collect_view()}
                </div>
                <div class="text-center mt-12">
                    <Button href="/menu" variant=ButtonVariant::Outline>"See the Full Menu"</Button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let theme = use_theme();
    let hours = WeeklySchedule::default().summary();

    view! {
        <section class="py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div>
                    <h2 class=format!("text-3xl md:text-4xl font-bold mb-6 {}", theme.heading)>
                        {format!("About {}", theme.brand)}
                    </h2>
                    <p class=format!("text-lg leading-relaxed mb-6 {}", theme.body)>{theme.about}</p>
                    <h3 class=format!("text-xl font-semibold mb-3 {}", theme.heading)>"Opening Hours"</h3>
                    <ul class=format!("space-y-1 {}", theme.body)>
                        {hours
                            .into_iter()
                            .map(|(days, time)| view! {
                                <li class="flex justify-between max-w-sm">
                                    <span class="font-medium">{days}</span>
                                    <span>{time}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="rounded-xl overflow-hidden shadow-2xl">
                    <img
                        src="https://images.unsplash.com/photo-1552566626-52f8b828add9?w=1200&q=80"
                        alt="Our dining room"
                        loading="lazy"
                        class="w-full h-full object-cover"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section class="py-20">
            <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="What Our Guests Say"/>
                <Carousel
                    items=TESTIMONIALS.to_vec()
                    render=|testimonial: Testimonial| view! { <TestimonialCard testimonial=testimonial/> }
                    interval_ms=TESTIMONIAL_INTERVAL_MS
                    label="Guest testimonials"
                />
            </div>
        </section>
    }
}

#[component]
fn Events() -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-br from-purple-900 via-purple-800 to-indigo-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Events & Specials"</h2>
                    <p class="text-lg text-purple-100 max-w-2xl mx-auto">
                        "Something happening every week. Book ahead, tables go fast."
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {EVENT_PROMOS
                        .iter()
                        .map(|event| view! { <EventCard event=*event/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Newsletter() -> impl IntoView {
    let theme = use_theme();
    let form = RwSignal::new(NewsletterForm::default());
    let subscribe = ServerAction::<SubscribeNewsletter>::new();

    Effect::new(move |_| {
        let Some(result) = subscribe.value().get() else {
            return;
        };
        match result {
            Ok(receipt) => {
                let reset_after = Duration::from_millis(receipt.reset_after_ms);
                form.update(|f| f.confirm(receipt));
                schedule_reset(reset_after, form, subscribe.value(), NewsletterForm::reset);
            }
            Err(err) => form.update(|f| f.reject(failure_message(&err))),
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(email) = form.try_update(NewsletterForm::try_submit).flatten() {
            subscribe.dispatch(SubscribeNewsletter { email });
        }
    };

    let submitting = Signal::derive(move || form.with(|f| f.status.is_submitting()));

    view! {
        <section class=format!("py-16 {}", theme.hero_band)>
            <div class="max-w-2xl mx-auto px-4 text-center">
                <h2 class="text-3xl font-bold mb-3">"Stay in the Loop"</h2>
                <p class="mb-8 opacity-90">"New dishes, seasonal menus and event invitations, straight to your inbox."</p>

                {move || {
                    form.with(|f| f.status.submitted().cloned()).map(|receipt| view! {
                        <Alert
                            title="Subscribed!"
                            message=format!("Thanks! We'll keep {} posted.", receipt.email)
                        />
                    })
                }}

                <form on:submit=on_submit class="flex flex-col sm:flex-row gap-3" novalidate=true>
                    <input
                        type="email"
                        name="email"
                        aria-label="Email address"
                        placeholder="your.email@example.com"
                        class="flex-grow px-4 py-3 rounded-lg text-gray-900 focus:outline-none focus:ring-2 focus:ring-white"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                    />
                    <Button loading=submitting loading_text="Subscribing..." class="bg-white !text-gray-900 hover:bg-gray-100">
                        "Subscribe"
                    </Button>
                </form>
                {move || {
                    form.with(|f| f.error().map(str::to_string))
                        .map(|message| view! { <p class="mt-3 text-sm font-medium">{message}</p> })
                }}
            </div>
        </section>
    }
}
