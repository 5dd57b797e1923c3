use leptos::prelude::*;

use crate::frontend::use_theme;
use crate::models::{EventPromo, FeaturedDish, MenuItem, Testimonial};

/// Plain surface used by every card below.
#[component]
pub fn Card(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class=format!("rounded-xl overflow-hidden transition-all duration-300 {} {}", theme.surface, class)>
            {children()}
        </div>
    }
}

#[component]
pub fn DishCard(
    name: &'static str,
    description: &'static str,
    price: &'static str,
    image_url: &'static str,
    #[prop(optional)] category: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();

    view! {
        <Card class="group h-full hover:-translate-y-2 hover:shadow-2xl">
            <div class="aspect-[4/3] w-full overflow-hidden relative">
                <img
                    src=image_url
                    alt=name
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                />
                <span class=format!("absolute top-4 right-4 px-3 py-1 rounded-full text-sm font-bold {}", theme.accent_button)>
                    {price}
                </span>
            </div>
            <div class="p-6">
                {category.map(|c| view! {
                    <p class=format!("text-xs uppercase tracking-wide mb-1 {}", theme.accent)>{c}</p>
                })}
                <h3 class=format!("text-xl font-bold mb-2 {}", theme.heading)>{name}</h3>
                <p class=format!("leading-relaxed {}", theme.body)>{description}</p>
            </div>
        </Card>
    }
}

#[component]
pub fn MenuCard(item: MenuItem) -> impl IntoView {
    view! {
        <DishCard
            name=item.name
            description=item.description
            price=item.price
            image_url=item.image_url
            category=item.category.as_str()
        />
    }
}

#[component]
pub fn FeaturedDishCard(dish: FeaturedDish) -> impl IntoView {
    view! {
        <DishCard
            name=dish.name
            description=dish.description
            price=dish.price
            image_url=dish.image_url
        />
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let theme = use_theme();

    view! {
        <Card class="h-full">
            <div class="p-6 flex flex-col justify-between h-full">
                <div>
                    <div class="flex items-center mb-2" aria-label=format!("{} out of 5 stars", testimonial.rating)>
                        {testimonial
                            .stars()
                            .into_iter()
                            .map(|filled| {
                                let class = if filled { "text-yellow-500" } else { "text-gray-300" };
                                view! { <span class=class>"★"</span> }
                            })
                            .collect_view()}
                    </div>
                    <p class=format!("italic mb-4 {}", theme.body)>"\u{201c}"{testimonial.comment}"\u{201d}"</p>
                </div>
                <div>
                    <p class=format!("font-semibold {}", theme.heading)>{testimonial.name}</p>
                    <p class=format!("text-sm {}", theme.body)>{testimonial.date}</p>
                </div>
            </div>
        </Card>
    }
}

#[component]
pub fn EventCard(event: EventPromo) -> impl IntoView {
    view! {
        <div class="rounded-xl bg-white/10 backdrop-blur-sm border border-white/20 text-white overflow-hidden group hover:bg-white/20 transition-all duration-300">
            <div class="aspect-[4/3] w-full overflow-hidden relative">
                <img
                    src=event.image_url
                    alt=event.title
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute top-4 left-4 bg-purple-600 text-white px-3 py-1 rounded-full text-sm font-semibold">
                    {event.badge}
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2">{event.title}</h3>
                <p class="text-purple-100 mb-4 text-sm">{event.description}</p>
                <div class="flex justify-between items-center">
                    <span class="text-purple-200 text-sm">{event.hours}</span>
                    <span class="text-amber-400 font-semibold">{event.price}</span>
                </div>
            </div>
        </div>
    }
}

/// Icon + heading + lines, used for address/phone/email/hours blocks.
#[component]
pub fn InfoCard(icon: &'static str, title: &'static str, lines: Vec<String>) -> impl IntoView {
    let theme = use_theme();

    view! {
        <Card class="p-6 flex items-start gap-4 hover:-translate-y-1">
            <span class=format!("text-2xl flex-shrink-0 {}", theme.accent)>{icon}</span>
            <div>
                <h3 class=format!("font-semibold mb-1 {}", theme.heading)>{title}</h3>
                {lines
                    .into_iter()
                    .map(|line| view! { <p class=theme.body>{line}</p> })
                    .collect_view()}
            </div>
        </Card>
    }
}
