//! Static home-page content.

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FeaturedDish {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub image_url: &'static str,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    /// 1..=5 stars
    pub rating: u8,
    pub comment: &'static str,
    pub date: &'static str,
}

impl Testimonial {
    pub const MAX_RATING: u8 = 5;

    /// One flag per star, filled first.
    pub fn stars(&self) -> [bool; 5] {
        let mut stars = [false; 5];
        for (i, star) in stars.iter_mut().enumerate() {
            *star = (i as u8) < self.rating.min(Self::MAX_RATING);
        }
        stars
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EventPromo {
    pub title: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
    pub hours: &'static str,
    pub price: &'static str,
    pub image_url: &'static str,
}

pub const FEATURED_DISHES: &[FeaturedDish] = &[
    FeaturedDish {
        name: "Truffle Risotto",
        description: "Creamy arborio rice with wild mushrooms and truffle oil",
        price: "$26",
        image_url: "https://images.unsplash.com/photo-1673165311661-5f9a3ad3ffe0?w=800&q=80",
    },
    FeaturedDish {
        name: "Seared Scallops",
        description: "Fresh scallops with citrus glaze and seasonal vegetables",
        price: "$32",
        image_url: "https://images.unsplash.com/photo-1626645738196-c2a7c87a8f58?w=800&q=80",
    },
    FeaturedDish {
        name: "Braised Short Rib",
        description: "Slow-cooked beef short rib with root vegetables and red wine reduction",
        price: "$34",
        image_url: "https://images.unsplash.com/photo-1544025162-d76694265947?w=800&q=80",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        rating: 5,
        comment: "The best dining experience I've had in years. The atmosphere was perfect and the food was exceptional.",
        date: "April 2023",
    },
    Testimonial {
        name: "Michael Chen",
        rating: 5,
        comment: "Incredible flavors and impeccable service. Will definitely be returning soon!",
        date: "May 2023",
    },
    Testimonial {
        name: "Emma Rodriguez",
        rating: 4,
        comment: "Beautiful restaurant with amazing food. The wine pairing suggestions were perfect.",
        date: "June 2023",
    },
    Testimonial {
        name: "David Thompson",
        rating: 5,
        comment: "A culinary masterpiece! Every dish was beautifully presented and tasted even better.",
        date: "July 2023",
    },
];

pub const EVENT_PROMOS: &[EventPromo] = &[
    EventPromo {
        title: "Wine Tasting Evening",
        description: "Join our sommelier for an exclusive wine tasting featuring rare vintages from around the world.",
        badge: "Dec 15",
        hours: "7:00 PM - 10:00 PM",
        price: "$85/person",
        image_url: "https://images.unsplash.com/photo-1510812431401-41d2bd2722f3?w=800&q=80",
    },
    EventPromo {
        title: "Chef's Table Experience",
        description: "An intimate 7-course tasting menu prepared by our head chef with wine pairings.",
        badge: "Dec 22",
        hours: "6:00 PM - 9:30 PM",
        price: "$150/person",
        image_url: "https://images.unsplash.com/photo-1577219491135-ce391730fb2c?w=800&q=80",
    },
    EventPromo {
        title: "Holiday Special Menu",
        description: "Celebrate the holidays with our special festive menu featuring seasonal ingredients.",
        badge: "Dec 24-31",
        hours: "All Day",
        price: "From $65",
        image_url: "https://images.unsplash.com/photo-1482049016688-2d3e1b311543?w=800&q=80",
    },
];
