use leptos::prelude::*;

use crate::frontend::components::{Dialog, PageHeader};
use crate::frontend::use_theme;
use crate::models::{Cursor, Filter, GALLERY_IMAGES, GalleryCategory, filtered};

#[component]
pub fn GalleryPage() -> impl IntoView {
    let theme = use_theme();
    let filter = RwSignal::new(Filter::<GalleryCategory>::All);
    // Open lightbox position within the currently filtered images.
    let lightbox = RwSignal::new(None::<Cursor>);

    let images = Memo::new(move |_| filtered(GALLERY_IMAGES, filter.get()));

    let select_filter = move |value: Filter<GalleryCategory>| {
        lightbox.set(None);
        filter.set(value);
    };

    let tab = move |label: &'static str, value: Filter<GalleryCategory>| {
        let class = move || {
            format!(
                "px-6 py-2 rounded-full font-medium transition-all {}",
                if filter.get() == value { theme.accent_button } else { theme.outline_button }
            )
        };
        view! {
            <button type="button" class=class on:click=move |_| select_filter(value)>
                {label}
            </button>
        }
    };

    let open = Signal::derive(move || lightbox.with(Option::is_some));
    let close = Callback::new(move |_: ()| lightbox.set(None));
    let step = move |forward: bool| {
        lightbox.update(|cursor| {
            if let Some(c) = cursor {
                if forward { c.next() } else { c.prev() }
            }
        })
    };

    view! {
        <PageHeader
            title="Gallery"
            subtitle="A look inside our dining room, our kitchen and the events we host."
        />

        <section class="py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-wrap justify-center gap-3 mb-12" role="tablist">
                    {tab("All", Filter::All)}
                    {GalleryCategory::ALL
                        .into_iter()
                        .map(|category| tab(category.as_str(), Filter::Only(category)))
                        .collect_view()}
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        let images = images.get();
                        let len = images.len();
                        images
                            .into_iter()
                            .enumerate()
                            .map(|(index, image)| view! {
                                <button
                                    type="button"
                                    class="group relative aspect-square overflow-hidden rounded-xl focus:outline-none focus:ring-4 focus:ring-amber-500"
                                    aria-label=format!("Open {}", image.alt)
                                    on:click=move |_| lightbox.set(Cursor::new(index, len))
                                >
                                    <img
                                        src=image.src
                                        alt=image.alt
                                        loading="lazy"
                                        class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                                    />
                                    <div class="absolute inset-0 bg-black/0 group-hover:bg-black/40 transition-colors flex items-end">
                                        <span class="text-white text-sm font-medium p-4 opacity-0 group-hover:opacity-100 transition-opacity">
                                            {image.category.as_str()}
                                        </span>
                                    </div>
                                </button>
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>

        <Dialog open=open on_close=close label="Image viewer">
            {move || {
                lightbox.get().map(|cursor| {
                    let image = images.with(|images| images[cursor.index()]);
                    view! {
                        <figure class="flex flex-col items-center">
                            <img src=image.src alt=image.alt class="max-h-[80vh] w-auto rounded-lg object-contain"/>
                            <figcaption class="text-white mt-4 text-center">
                                <p class="text-lg">{image.alt}</p>
                                <p class="text-sm text-gray-400">{cursor.position_label()}</p>
                            </figcaption>
                        </figure>
                        {cursor.has_many().then(|| view! {
                            <button
                                type="button"
                                aria-label="Previous image"
                                class="absolute left-0 top-1/2 -translate-y-1/2 bg-black/50 hover:bg-black/70 text-white text-3xl w-12 h-12 rounded-full"
                                on:click=move |_| step(false)
                            >
                                "‹"
                            </button>
                            <button
                                type="button"
                                aria-label="Next image"
                                class="absolute right-0 top-1/2 -translate-y-1/2 bg-black/50 hover:bg-black/70 text-white text-3xl w-12 h-12 rounded-full"
                                on:click=move |_| step(true)
                            >
                                "›"
                            </button>
                        })}
                    }
                })
            }}
        </Dialog>
    }
}
