use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Weekday;
use menu_sheet::content::ContentItem;
use menu_sheet::menu::Diet;
use menu_sheet::menu::Price;
use menu_sheet::schedule::status::SlotState;
use menu_sheet::Config;
use menu_sheet::DietFilter;
use menu_sheet::FilterSpec;
use menu_sheet::LanguageChain;
use menu_sheet::MenuData;
use menu_sheet::MenuSource;
use menu_sheet::MenuView;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config").join(name)
}

fn config() -> Config {
    Config::load(fixture("menu.json")).unwrap()
}

fn data(config: &Config) -> MenuData {
    let source = MenuSource {
        url: None,
        fallback: fixture("fallback_data.csv"),
    };
    let sheet = source.read().unwrap();
    assert!(!sheet.used_fallback);
    MenuData::parse(&sheet.text, config)
}

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap()
}

fn category_ids(menu: &menu_sheet::menu::Menu) -> Vec<&str> {
    menu.categories.iter().map(|category| category.id.as_str()).collect()
}

#[test]
fn kitchen_menu_is_categorized_and_ordered() {
    let config = config();
    let data = data(&config);
    assert_eq!(category_ids(&data.kitchen), vec!["antipasti", "primi", "dolci", "other"]);

    let primi = &data.kitchen.categories[1];
    assert_eq!(primi.label(&LanguageChain::new(["en"])), "First courses");
    let orders: Vec<usize> = primi.items.iter().map(|item| item.order).collect();
    assert_eq!(orders, vec![0, 1]);

    let lasagna = &primi.items[0];
    assert_eq!(lasagna.names.get("it"), Some("Lasagna"));
    assert_eq!(lasagna.descriptions.get("en"), Some("Meat sauce, béchamel"));
    assert_eq!(lasagna.price, Some(Price::Amount(12.5)));
    assert_eq!(lasagna.allergen_keys().collect::<Vec<_>>(), vec!["gluten", "eggs", "milk"]);
    assert_eq!(lasagna.diet, Diet::Standard);
    assert_eq!(primi.items[1].diet, Diet::Vegetarian);

    let bruschetta = &data.kitchen.categories[0].items[0];
    assert_eq!(bruschetta.order, 2);
    assert!(bruschetta.no_gluten_option);
    assert_eq!(bruschetta.diet, Diet::Vegan);

    let tiramisu = &data.kitchen.categories[2].items[0];
    assert_eq!(tiramisu.price, Some(Price::Text("S.Q.".to_owned())));
    assert_eq!(data.kitchen.last_updated.as_deref(), Some("2024-06-12"));
}

#[test]
fn bar_menu_is_isolated_from_kitchen_columns() {
    let config = config();
    let data = data(&config);
    assert_eq!(category_ids(&data.bar), vec!["bevande", "caffetteria"]);
    let names: Vec<&str> = data
        .bar
        .categories
        .iter()
        .flat_map(|category| category.items.iter())
        .filter_map(|item| item.names.get("en"))
        .collect();
    assert_eq!(names, vec!["Aperol Spritz", "Craft beer", "Espresso"]);
    assert!(data
        .bar
        .categories
        .iter()
        .flat_map(|category| category.items.iter())
        .all(|item| item.allergens.is_empty() && item.descriptions.is_empty()));
    assert_eq!(data.bar.last_updated, None);
    assert_eq!(data.last_updated(), Some("2024-06-12"));
}

#[test]
fn schedule_is_grouped_and_collapsed() {
    let config = config();
    let data = data(&config);
    let ids: Vec<&str> = data.schedule.slots.iter().map(|slot| slot.id.as_str()).collect();
    assert_eq!(ids, vec!["pranzo", "cena", "bar"]);
    assert_eq!(data.schedule.hero.len(), 3);

    let lunch = &data.schedule.info[0];
    assert_eq!(lunch.slot.schedule[3].day, Weekday::Fri);
    assert_eq!(lunch.slot.schedule[3].open, "12:00");
    assert_eq!(lunch.slot.schedule[3].close, "15:00");
    assert_eq!(lunch.collapsed.len(), 2);

    let italian = config.language_chain("it");
    assert_eq!(lunch.collapsed[0].days_label(&italian), "Lunedì - Mercoledì");
    assert_eq!(lunch.collapsed[1].days_label(&italian), "Venerdì");
    assert_eq!(lunch.collapsed[0].times(), "12:00 - 15:00");

    let bar = &data.schedule.info[2];
    assert_eq!(bar.collapsed.len(), 1);
    assert_eq!(bar.collapsed[0].days_label(&config.language_chain("en")), "Friday - Saturday");
    assert!(!bar.slot.is_kitchen);
}

#[test]
fn content_blocks_are_translated() {
    let config = config();
    let data = data(&config);
    let header = data.content.kitchen_header.as_ref().unwrap();
    assert_eq!(header.title.get("en"), Some("The kitchen"));
    assert_eq!(header.style, "card");
    assert!(data.content.bar_header.is_none());
    assert_eq!(data.content.items.len(), 2);
    assert!(matches!(&data.content.items[0], ContentItem::Text { style, .. } if style == "plain"));
    assert!(matches!(
        &data.content.items[1],
        ContentItem::Cta { link, style, .. } if link == "https://example.org/book" && style == "primary"
    ));
}

#[test]
fn status_on_friday_morning() {
    let config = config();
    let data = data(&config);
    let view = MenuView::build(
        &data,
        &config,
        &config.language_chain("en"),
        &FilterSpec::default(),
        at(14, 10, 0),
    );
    let slots: Vec<(&str, u32)> = view
        .status
        .slots
        .iter()
        .map(|slot| (slot.label.as_str(), slot.minutes_until))
        .collect();
    assert_eq!(slots, vec![("Lunch", 120), ("Bar", 480), ("Dinner", 540)]);
    assert!(view.status.show_next_prefix);
}

#[test]
fn status_after_midnight_on_saturday() {
    let config = config();
    let data = data(&config);
    let view = MenuView::build(
        &data,
        &config,
        &config.language_chain("it"),
        &FilterSpec::default(),
        at(15, 1, 0),
    );
    assert_eq!(view.status.slots.len(), 2);
    assert_eq!(view.status.slots[0].slot_id, "bar");
    assert_eq!(view.status.slots[0].state, SlotState::Active);
    assert_eq!(view.status.slots[1].label, "Cena");
    assert_eq!(view.status.slots[1].minutes_until, 1080);
    assert!(!view.status.show_next_prefix);
}

#[test]
fn view_in_italian_with_filters() {
    let config = config();
    let data = data(&config);
    let filter = FilterSpec {
        diet: DietFilter::Vegan,
        exclude_allergens: BTreeSet::from(["gluten".to_owned()]),
    };
    let view = MenuView::build(&data, &config, &config.language_chain("it"), &filter, at(14, 10, 0));
    assert!(view.filters_active);
    assert!(view.kitchen.categories.is_empty());
    assert_eq!(view.kitchen.header.as_ref().map(|header| header.title.as_str()), Some("La cucina"));

    let bar: Vec<(&str, &str, Option<&str>)> = view
        .bar
        .categories
        .iter()
        .flat_map(|category| category.items.iter().map(move |item| (category.label.as_str(), item)))
        .map(|(label, item)| (label, item.name.as_str(), item.price.as_deref()))
        .collect();
    assert_eq!(
        bar,
        vec![
            ("Bevande", "Spritz Aperol", Some("7,00 €")),
            ("Caffetteria", "Caffè", Some("1,20 €")),
        ]
    );
    assert_eq!(view.info[0].hours[1].days, "Venerdì");
}

#[test]
fn unfiltered_view_keeps_everything() {
    let config = config();
    let data = data(&config);
    let view = MenuView::build(
        &data,
        &config,
        &config.language_chain("fr"),
        &FilterSpec::default(),
        at(14, 10, 0),
    );
    let items: usize = view.kitchen.categories.iter().map(|category| category.items.len()).sum();
    assert_eq!(items, 5);
    assert_eq!(view.kitchen.categories[3].label, "other");
    assert_eq!(view.kitchen.categories[0].label, "Starters");
    assert_eq!(view.last_updated.as_deref(), Some("2024-06-12"));
}

#[test]
fn unreachable_source_uses_fallback() {
    let mut fallback = tempfile::NamedTempFile::new().unwrap();
    fallback
        .write_all(std::fs::read(fixture("fallback_data.csv")).unwrap().as_slice())
        .unwrap();
    let source = MenuSource {
        url: Some("http://127.0.0.1:9/menu.csv".to_owned()),
        fallback: fallback.path().to_owned(),
    };
    let sheet = source.read().unwrap();
    assert!(sheet.used_fallback);
    let config = config();
    let data = MenuData::parse(&sheet.text, &config);
    assert_eq!(data.kitchen.categories.len(), 4);
}

#[test]
fn invalid_config_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "input": { "csvLanguage": "it" } }"#).unwrap();
    let error = Config::load(file.path()).unwrap_err();
    assert!(error.to_string().contains("allergens"));
}
