use serde::{Deserialize, Serialize};

use std::fmt;

use super::catalog::Categorized;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MenuCategory {
    Starters,
    MainDishes,
    Desserts,
    Drinks,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 4] = [
        Self::Starters,
        Self::MainDishes,
        Self::Desserts,
        Self::Drinks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starters => "Starters",
            Self::MainDishes => "Main Dishes",
            Self::Desserts => "Desserts",
            Self::Drinks => "Drinks",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct MenuItem {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub image_url: &'static str,
    pub category: MenuCategory,
}

impl Categorized for MenuItem {
    type Category = MenuCategory;

    fn category(&self) -> MenuCategory {
        self.category
    }
}

const fn item(
    id: u32,
    name: &'static str,
    description: &'static str,
    price: &'static str,
    image_url: &'static str,
    category: MenuCategory,
) -> MenuItem {
    MenuItem {
        id,
        name,
        description,
        price,
        image_url,
        category,
    }
}

use MenuCategory::*;

pub const MENU_ITEMS: &[MenuItem] = &[
    item(1, "Truffle Arancini",
        "Crispy risotto balls with truffle oil and parmesan, served with marinara sauce",
        "$14", "https://images.unsplash.com/photo-1551782450-17144efb9c50?w=800&q=80", Starters),
    item(2, "Burrata Caprese",
        "Fresh burrata cheese with heirloom tomatoes, basil, and balsamic glaze",
        "$16", "https://images.unsplash.com/photo-1608897013039-887f21d8c804?w=800&q=80", Starters),
    item(3, "Seared Scallops",
        "Pan-seared scallops with cauliflower puree and pancetta crisps",
        "$18", "https://images.unsplash.com/photo-1626645738196-c2a7c87a8f58?w=800&q=80", Starters),
    item(4, "Tuna Tartare",
        "Fresh yellowfin tuna with avocado, cucumber, and sesame dressing",
        "$19", "https://images.unsplash.com/photo-1546833999-b9f581a1996d?w=800&q=80", Starters),
    item(5, "Braised Short Rib",
        "Slow-cooked beef short rib with root vegetables and red wine reduction",
        "$34", "https://images.unsplash.com/photo-1544025162-d76694265947?w=800&q=80", MainDishes),
    item(6, "Pan-Seared Salmon",
        "Atlantic salmon with lemon herb butter, asparagus, and quinoa pilaf",
        "$28", "https://images.unsplash.com/photo-1467003909585-2f8a72700288?w=800&q=80", MainDishes),
    item(7, "Duck Confit",
        "Traditional French duck leg with garlic mashed potatoes and cherry gastrique",
        "$32", "https://images.unsplash.com/photo-1432139555190-58524dae6a55?w=800&q=80", MainDishes),
    item(8, "Lobster Risotto",
        "Creamy arborio rice with fresh lobster, peas, and saffron",
        "$36", "https://images.unsplash.com/photo-1673165311661-5f9a3ad3ffe0?w=800&q=80", MainDishes),
    item(9, "Chocolate Lava Cake",
        "Warm chocolate cake with molten center, vanilla ice cream, and berry coulis",
        "$12", "https://images.unsplash.com/photo-1606313564200-e75d5e30476c?w=800&q=80", Desserts),
    item(10, "Tiramisu",
        "Classic Italian dessert with espresso-soaked ladyfingers and mascarpone",
        "$10", "https://images.unsplash.com/photo-1571877227200-a0d98ea607e9?w=800&q=80", Desserts),
    item(11, "Crème Brûlée",
        "Vanilla custard with caramelized sugar crust and fresh berries",
        "$11", "https://images.unsplash.com/photo-1470324161839-ce2bb6fa6bc3?w=800&q=80", Desserts),
    item(12, "Lemon Tart",
        "Tangy lemon curd in buttery pastry shell with meringue and candied lemon",
        "$9", "https://images.unsplash.com/photo-1565958011703-44f9829ba187?w=800&q=80", Desserts),
    item(13, "Signature Cocktail",
        "House special with premium spirits, fresh herbs, and seasonal fruits",
        "$14", "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?w=800&q=80", Drinks),
    item(14, "Wine Selection",
        "Curated selection of fine wines from renowned vineyards worldwide",
        "$12-45", "https://images.unsplash.com/photo-1510812431401-41d2bd2722f3?w=800&q=80", Drinks),
    item(15, "Craft Beer",
        "Local and imported craft beers, rotating seasonal selections",
        "$8-12", "https://images.unsplash.com/photo-1608270586620-248524c67de9?w=800&q=80", Drinks),
    item(16, "Artisan Coffee",
        "Single-origin coffee beans, expertly roasted and freshly brewed",
        "$5-8", "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=800&q=80", Drinks),
];
