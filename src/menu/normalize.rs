use crate::config::Config;
use crate::helpers::string::normalize;
use crate::helpers::string::parse_decimal;
use crate::i18n::Localized;
use crate::menu::Allergen;
use crate::menu::Category;
use crate::menu::Diet;
use crate::menu::Menu;
use crate::menu::MenuItem;
use crate::menu::Price;
use crate::menu::DEFAULT_CATEGORY;
use crate::menu::DEFAULT_CATEGORY_ORDER;
use crate::table::column::Column;
use crate::table::record::Record;
use std::collections::HashMap;
use tracing::debug;

/// Label and order of a category, from the categories table.
struct CategoryInfo {
    labels: Localized,
    order: f64,
}

/// Indexes the categories table by normalized id (`category_id`, else `id`).
fn category_index(records: &[Record], config: &Config) -> HashMap<String, CategoryInfo> {
    let mut index = HashMap::new();
    for record in records {
        let id = record
            .non_blank(&Column::CategoryId)
            .or_else(|| record.non_blank(&Column::Id))
            .map(normalize);
        let Some(id) = id else {
            continue;
        };
        let order = parse_decimal(record.get(&Column::Order), config.input.csv_number_format)
            .unwrap_or(DEFAULT_CATEGORY_ORDER);
        let labels = record.localized(|column| matches!(column, Column::Label(_)));
        index.insert(id, CategoryInfo { labels, order });
    }
    index
}

/// Allergens flagged on a row, sorted by code.
fn allergens(record: &Record, config: &Config) -> Vec<Allergen> {
    let mut allergens: Vec<Allergen> = config
        .allergens
        .iter()
        .filter(|spec| record.is_truthy(&Column::parse(&spec.column)))
        .map(Allergen::from)
        .collect();
    allergens.sort_by_key(|allergen| allergen.code);
    allergens
}

/// Builds the categorized menu of one table.
///
/// Only active rows become items; their display order is their position among the
/// active rows. Categories are sorted by the order of the categories table, keeping
/// first-seen order between equal orders.
pub fn normalize_menu(records: &[Record], categories: &[Record], config: &Config) -> Menu {
    let index = category_index(categories, config);
    let last_updated = records
        .iter()
        .filter_map(|record| record.non_blank(&Column::LastUpdated))
        .last()
        .map(str::to_owned);

    let mut menu: Vec<Category> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let active = records.iter().filter(|record| record.is_truthy(&Column::Active));
    for (order, record) in active.enumerate() {
        let id = record
            .non_blank(&Column::Category)
            .map(normalize)
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned());
        let position = *positions.entry(id.to_owned()).or_insert_with(|| {
            let (labels, order) = index
                .get(&id)
                .map(|info| (info.labels.to_owned(), info.order))
                .unwrap_or_else(|| (Localized::default(), DEFAULT_CATEGORY_ORDER));
            menu.push(Category {
                id: id.to_owned(),
                labels,
                order,
                items: Vec::new(),
            });
            menu.len() - 1
        });
        menu[position].items.push(MenuItem {
            names: record.localized(|column| matches!(column, Column::Name(_))),
            descriptions: record.localized(|column| matches!(column, Column::Description(_))),
            price: Price::parse(record.get(&Column::Price), config.input.csv_number_format),
            order,
            allergens: allergens(record, config),
            diet: Diet::classify(record.get(&Column::Type), &config.food_types),
            no_gluten_option: record.is_truthy(&Column::NoGlutenOption),
        });
    }

    menu.sort_by(|a, b| a.order.total_cmp(&b.order));
    debug!(
        rows = records.len(),
        categories = menu.len(),
        items = menu.iter().map(|category| category.items.len()).sum::<usize>(),
        "menu normalized"
    );
    Menu {
        categories: menu,
        last_updated,
    }
}
