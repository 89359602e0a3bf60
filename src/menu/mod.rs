//! # Menu Data
//!
//! Categorized, ordered menu items built from the bar and kitchen tables, and the
//! dietary/allergen filter applied to them before display.
use crate::config::AllergenSpec;
use crate::config::FoodType;
use crate::config::NumberFormat;
use crate::helpers::string::normalize;
use crate::helpers::string::parse_decimal;
use crate::i18n::LanguageChain;
use crate::i18n::Localized;
use serde::Serialize;

pub mod filter;
pub mod normalize;

/// Sort order of categories missing from the categories table.
pub const DEFAULT_CATEGORY_ORDER: f64 = 999.0;

/// Category of rows with a blank category cell.
pub const DEFAULT_CATEGORY: &str = "other";

/// Price cell, numeric when it parses, verbatim text otherwise ("market price").
#[derive(Clone, Debug, PartialEq)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl Price {
    /// Parses a price cell; blank cells have no price.
    pub fn parse(value: &str, format: NumberFormat) -> Option<Price> {
        let value = value.trim();
        if value.is_empty() {
            None
        } else if let Some(amount) = parse_decimal(value, format) {
            Some(Price::Amount(amount))
        } else {
            Some(Price::Text(value.to_owned()))
        }
    }
}

/// Dietary classification of an item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Diet {
    #[default]
    Standard,
    Vegetarian,
    Vegan,
    /// Any other food type listed in the catalog
    Custom(String),
}

impl Diet {
    pub fn as_str(&self) -> &str {
        match self {
            Diet::Standard => "standard",
            Diet::Vegetarian => "vegetarian",
            Diet::Vegan => "vegan",
            Diet::Custom(id) => id.as_str(),
        }
    }

    /// Classifies a `type` cell. Blank cells, and cells naming a type that is not in a
    /// non-empty food-type catalog, are standard.
    pub fn classify(value: &str, food_types: &[FoodType]) -> Diet {
        let value = normalize(value);
        if value.is_empty() {
            return Diet::Standard;
        }
        if !food_types.is_empty() && !food_types.iter().any(|food_type| food_type.id == value) {
            return Diet::Standard;
        }
        match value.as_str() {
            "standard" => Diet::Standard,
            "vegetarian" => Diet::Vegetarian,
            "vegan" => Diet::Vegan,
            _ if food_types.is_empty() => Diet::Standard,
            _ => Diet::Custom(value),
        }
    }
}

/// Allergen present in an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Allergen {
    pub key: String,
    pub code: u32,
    pub icon: String,
}

impl From<&AllergenSpec> for Allergen {
    fn from(spec: &AllergenSpec) -> Self {
        Allergen {
            key: spec.key.to_owned(),
            code: spec.code,
            icon: spec.icon.to_owned(),
        }
    }
}

/// One active menu row.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub names: Localized,
    pub descriptions: Localized,
    pub price: Option<Price>,
    /// Position among the active rows of the table
    pub order: usize,
    /// Sorted by allergen code
    pub allergens: Vec<Allergen>,
    pub diet: Diet,
    pub no_gluten_option: bool,
}

impl MenuItem {
    pub fn allergen_keys(&self) -> impl Iterator<Item = &str> {
        self.allergens.iter().map(|allergen| allergen.key.as_str())
    }
}

/// Items sharing a category, in sheet order.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub id: String,
    pub labels: Localized,
    pub order: f64,
    pub items: Vec<MenuItem>,
}

impl Category {
    /// Display label, the category id when the categories table has none.
    pub fn label(&self, chain: &LanguageChain) -> &str {
        self.labels.resolve_or(chain, &self.id)
    }
}

/// Normalized content of one menu table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Menu {
    pub categories: Vec<Category>,
    /// Last non-blank `last_updated` cell of the table
    pub last_updated: Option<String>,
}
