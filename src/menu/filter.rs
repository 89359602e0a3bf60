use crate::menu::Category;
use crate::menu::Diet;
use crate::menu::MenuItem;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Dietary restriction chosen by the reader.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DietFilter {
    #[default]
    All,
    Vegetarian,
    Vegan,
}

impl DietFilter {
    /// Returns true if an item of the given diet satisfies the restriction.
    /// Vegan items satisfy the vegetarian restriction.
    pub fn accept(&self, diet: &Diet) -> bool {
        match self {
            DietFilter::All => true,
            DietFilter::Vegetarian => matches!(diet, Diet::Vegetarian | Diet::Vegan),
            DietFilter::Vegan => matches!(diet, Diet::Vegan),
        }
    }
}

impl FromStr for DietFilter {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(DietFilter::All),
            "vegetarian" => Ok(DietFilter::Vegetarian),
            "vegan" => Ok(DietFilter::Vegan),
            _ => Err(format!("unknown diet '{name}', expected all, vegetarian or vegan")),
        }
    }
}

/// Criteria for selecting the menu items shown to a reader.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub diet: DietFilter,
    /// Allergen keys the reader wants to avoid
    pub exclude_allergens: BTreeSet<String>,
}

impl FilterSpec {
    /// Returns true if any restriction is set.
    pub fn is_active(&self) -> bool {
        self.diet != DietFilter::All || !self.exclude_allergens.is_empty()
    }

    /// Checks if an item passes the diet restriction and contains no excluded allergen.
    pub fn accept(&self, item: &MenuItem) -> bool {
        self.diet.accept(&item.diet)
            && !item
                .allergen_keys()
                .any(|key| self.exclude_allergens.contains(key))
    }

    /// Returns the categories restricted to accepted items, dropping emptied categories.
    /// The input is left untouched.
    pub fn apply(&self, categories: &[Category]) -> Vec<Category> {
        categories
            .iter()
            .filter_map(|category| {
                let items: Vec<MenuItem> = category
                    .items
                    .iter()
                    .filter(|item| self.accept(item))
                    .cloned()
                    .collect();
                if items.is_empty() {
                    None
                } else {
                    Some(Category {
                        items,
                        ..category.clone()
                    })
                }
            })
            .collect()
    }
}
