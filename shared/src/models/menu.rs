//! Menu Model

use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MenuCategory {
    Snacks,
    Beverages,
    Meals,
}

impl MenuCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snacks => "Snacks",
            Self::Beverages => "Beverages",
            Self::Meals => "Meals",
        }
    }
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Menu item entity
///
/// `price` is in rupees, the smallest unit the counter charges.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub description: &'static str,
    pub category: MenuCategory,
    pub emoji: &'static str,
}

/// The fixed counter menu, in display order
pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        id: "sandwich",
        name: "Sandwich",
        price: 60,
        description: "Freshly made grilled sandwich with veggies and cheese",
        category: MenuCategory::Snacks,
        emoji: "S",
    },
    MenuItem {
        id: "burger",
        name: "Burger",
        price: 80,
        description: "Classic crispy burger with lettuce, tomato & special sauce",
        category: MenuCategory::Snacks,
        emoji: "B",
    },
    MenuItem {
        id: "juice",
        name: "Fresh Juice",
        price: 40,
        description: "Freshly squeezed seasonal fruit juice",
        category: MenuCategory::Beverages,
        emoji: "J",
    },
    MenuItem {
        id: "coffee",
        name: "Coffee",
        price: 30,
        description: "Hot brewed coffee with milk",
        category: MenuCategory::Beverages,
        emoji: "C",
    },
    MenuItem {
        id: "dosa",
        name: "Masala Dosa",
        price: 50,
        description: "Crispy dosa with potato filling and chutney",
        category: MenuCategory::Meals,
        emoji: "D",
    },
    MenuItem {
        id: "biryani",
        name: "Veg Biryani",
        price: 100,
        description: "Fragrant basmati rice with mixed vegetables and spices",
        category: MenuCategory::Meals,
        emoji: "V",
    },
];

pub fn menu_items() -> &'static [MenuItem] {
    MENU_ITEMS
}

pub fn find_menu_item(id: &str) -> Option<&'static MenuItem> {
    MENU_ITEMS.iter().find(|item| item.id == id)
}

/// Distinct categories in first-appearance order
pub fn menu_categories() -> Vec<MenuCategory> {
    let mut categories = Vec::new();
    for item in MENU_ITEMS {
        if !categories.contains(&item.category) {
            categories.push(item.category);
        }
    }
    categories
}
