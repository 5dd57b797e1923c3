use serde::{Deserialize, Serialize};

use std::fmt;

/// Which branding the site is served with.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Light "Savory Bistro" look
    #[default]
    Savory,
    /// Dark "Noctora" look
    Noctora,
}

impl ThemeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Savory => "savory",
            Self::Noctora => "noctora",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            Self::Savory => Theme::SAVORY,
            Self::Noctora => Theme::NOCTORA,
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ThemeVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "savory" | "savory-bistro" | "light" => Ok(Self::Savory),
            "noctora" | "dark" => Ok(Self::Noctora),
            _ => Err(format!("invalid theme: {}", s)),
        }
    }
}

/// Copy, contact details and palette for one branding of the site.
///
/// Palette entries are utility class lists applied by the components.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Theme {
    pub variant: ThemeVariant,
    pub brand: &'static str,
    pub tagline: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub about: &'static str,
    pub logo_url: &'static str,
    pub hero_image_url: &'static str,

    pub phone_main: &'static str,
    pub phone_reservations: &'static str,
    pub email_general: &'static str,
    pub email_reservations: &'static str,
    pub email_events: &'static str,
    pub address: [&'static str; 3],
    pub socials: [(&'static str, &'static str); 3],

    pub page: &'static str,
    pub surface: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub accent: &'static str,
    pub accent_button: &'static str,
    pub outline_button: &'static str,
    pub input: &'static str,
    pub nav: &'static str,
    pub nav_scrolled: &'static str,
    pub nav_link: &'static str,
    pub hero_band: &'static str,
    pub footer: &'static str,
}

impl Theme {
    pub const SAVORY: Theme = Theme {
        variant: ThemeVariant::Savory,
        brand: "Savory Bistro",
        tagline: "Fine dining crafted from seasonal, local ingredients.",
        hero_title: "A Taste of Something Special",
        hero_subtitle: "Seasonal plates, warm service and a wine list worth lingering over.",
        about: "Since opening our doors, Savory Bistro has brought together classic technique and the best of the season. Every plate is prepared to order by a kitchen that cares about the details.",
        logo_url: "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=120&q=80",
        hero_image_url: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=1920&q=80",

        phone_main: "(555) 123-4567",
        phone_reservations: "(555) 123-4568",
        email_general: "info@savorybistro.com",
        email_reservations: "reservations@savorybistro.com",
        email_events: "events@savorybistro.com",
        address: ["123 Culinary Avenue", "Foodie District", "Gourmet City, GC 12345"],
        socials: [
            ("Facebook", "https://www.facebook.com/"),
            ("Instagram", "https://www.instagram.com/"),
            ("LinkedIn", "https://www.linkedin.com/"),
        ],

        page: "bg-gray-50 text-gray-900",
        surface: "bg-white shadow-lg",
        heading: "text-gray-900",
        body: "text-gray-600",
        accent: "text-amber-600",
        accent_button: "bg-amber-600 hover:bg-amber-700 text-white focus:ring-amber-500",
        outline_button: "border border-amber-600 text-amber-700 hover:bg-amber-50 focus:ring-amber-500",
        input: "bg-white border-gray-300 text-gray-900 placeholder-gray-400 focus:ring-amber-500",
        nav: "bg-white shadow-md",
        nav_scrolled: "bg-white/95 backdrop-blur shadow-lg",
        nav_link: "text-gray-600 hover:text-gray-900",
        hero_band: "bg-gradient-to-r from-amber-600 to-amber-700 text-white",
        footer: "bg-slate-900 text-white",
    };

    pub const NOCTORA: Theme = Theme {
        variant: ThemeVariant::Noctora,
        brand: "Noctora",
        tagline: "Great food, good vibes, made with fresh local ingredients.",
        hero_title: "Where the Night Tastes Better",
        hero_subtitle: "Late dinners, bold flavours and a room that glows after dark.",
        about: "Noctora is an evening kitchen built around fire, smoke and the season's best produce. Come for the food, stay for the atmosphere.",
        logo_url: "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=120&q=80",
        hero_image_url: "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=1920&q=80",

        phone_main: "(555) 123-4567",
        phone_reservations: "(555) 123-4568",
        email_general: "info@noctora.com",
        email_reservations: "reservations@noctora.com",
        email_events: "events@noctora.com",
        address: ["123 Culinary Avenue", "Foodie District", "Gourmet City, GC 12345"],
        socials: [
            ("Facebook", "https://www.facebook.com/"),
            ("Instagram", "https://www.instagram.com/"),
            ("LinkedIn", "https://www.linkedin.com/"),
        ],

        page: "bg-[#111827] text-[#d1d5db]",
        surface: "bg-gradient-to-br from-[#1f2937] to-[#111827] shadow-[0_6px_20px_rgba(0,0,0,0.25)]",
        heading: "text-white",
        body: "text-[#d1d5db]",
        accent: "text-[#f59e0b]",
        accent_button: "bg-[#f59e0b] hover:bg-[#d97706] text-[#111827] focus:ring-[#f59e0b]",
        outline_button: "border border-[#f59e0b] text-[#f59e0b] hover:bg-[#f59e0b]/10 focus:ring-[#f59e0b]",
        input: "bg-[#1f2937] border-[#374151] text-white placeholder-[#6b7280] focus:ring-[#f59e0b]",
        nav: "bg-[#111827]",
        nav_scrolled: "bg-[#111827]/95 backdrop-blur shadow-lg shadow-black/40",
        nav_link: "text-[#d1d5db] hover:text-[#f59e0b]",
        hero_band: "bg-gradient-to-r from-[#f59e0b] to-[#d97706] text-white",
        footer: "bg-black text-[#d1d5db]",
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::SAVORY
    }
}
