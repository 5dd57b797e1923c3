use serde::{Deserialize, Serialize};

use std::fmt;

use super::catalog::Categorized;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GalleryCategory {
    Interior,
    Food,
    Events,
    Chef,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 4] = [Self::Interior, Self::Food, Self::Events, Self::Chef];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interior => "Interior",
            Self::Food => "Food",
            Self::Events => "Events",
            Self::Chef => "Chef",
        }
    }
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GalleryImage {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
    pub category: GalleryCategory,
}

impl Categorized for GalleryImage {
    type Category = GalleryCategory;

    fn category(&self) -> GalleryCategory {
        self.category
    }
}

const fn image(id: u32, src: &'static str, alt: &'static str, category: GalleryCategory) -> GalleryImage {
    GalleryImage {
        id,
        src,
        alt,
        category,
    }
}

use GalleryCategory::*;

pub const GALLERY_IMAGES: &[GalleryImage] = &[
    image(1, "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=800&q=80",
        "Elegant dining room with warm lighting", Interior),
    image(2, "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=800&q=80",
        "Cozy restaurant atmosphere", Interior),
    image(3, "https://images.unsplash.com/photo-1552566090-a3d4d1f4d4b8?w=800&q=80",
        "Modern bar area with premium spirits", Interior),
    image(4, "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800&q=80",
        "Private dining room for special occasions", Interior),
    image(5, "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=800&q=80",
        "Beautifully plated signature dish", Food),
    image(6, "https://images.unsplash.com/photo-1673165311661-5f9a3ad3ffe0?w=800&q=80",
        "Truffle risotto with seasonal vegetables", Food),
    image(7, "https://images.unsplash.com/photo-1626645738196-c2a7c87a8f58?w=800&q=80",
        "Fresh seared scallops with citrus glaze", Food),
    image(8, "https://images.unsplash.com/photo-1544025162-d76694265947?w=800&q=80",
        "Braised short rib with root vegetables", Food),
    image(9, "https://images.unsplash.com/photo-1606313564200-e75d5e30476c?w=800&q=80",
        "Decadent chocolate lava cake", Food),
    image(10, "https://images.unsplash.com/photo-1571877227200-a0d98ea607e9?w=800&q=80",
        "Classic tiramisu with espresso", Food),
    image(11, "https://images.unsplash.com/photo-1511795409834-ef04bbd61622?w=800&q=80",
        "Wedding reception in our main dining room", Events),
    image(12, "https://images.unsplash.com/photo-1530103862676-de8c9debad1d?w=800&q=80",
        "Corporate dinner event", Events),
    image(13, "https://images.unsplash.com/photo-1464366400600-7168b8af9bc3?w=800&q=80",
        "Wine tasting evening", Events),
    image(14, "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&q=80",
        "Birthday celebration setup", Events),
    image(15, "https://images.unsplash.com/photo-1577219491135-ce391730fb2c?w=800&q=80",
        "Head chef preparing signature dish", Chef),
    image(16, "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=800&q=80",
        "Kitchen team in action", Chef),
    image(17, "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=800&q=80",
        "Chef plating with precision", Chef),
    image(18, "https://images.unsplash.com/photo-1581299894007-aaa50297cf16?w=800&q=80",
        "Fresh ingredients preparation", Chef),
];
