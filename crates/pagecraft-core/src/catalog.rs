//! Product taxonomy shared by the API surface and the prompt tables.

use serde::{Deserialize, Serialize};

/// Storefront product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fashion,
    Beauty,
    Food,
    Electronics,
    Home,
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Fashion => "fashion",
            Category::Beauty => "beauty",
            Category::Food => "food",
            Category::Electronics => "electronics",
            Category::Home => "home",
            Category::Other => "other",
        }
    }
}

/// Requested design mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Luxury,
    Casual,
    Cute,
    Simple,
    Professional,
}

impl Mood {
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Luxury => "luxury",
            Mood::Casual => "casual",
            Mood::Cute => "cute",
            Mood::Simple => "simple",
            Mood::Professional => "professional",
        }
    }
}
