//! Display-ready projection of [`MenuData`] for one reader: language resolved,
//! filters applied, prices formatted and live opening status computed.
use crate::config::Config;
use crate::config::RegionalSettings;
use crate::content::ContentBlocks;
use crate::content::ContentItem;
use crate::content::MenuHeader;
use crate::i18n::LanguageChain;
use crate::menu::filter::FilterSpec;
use crate::menu::Allergen;
use crate::menu::Category;
use crate::menu::MenuItem;
use crate::menu::Price;
use crate::pipeline::MenuData;
use crate::schedule::status::show_next_prefix;
use crate::schedule::status::upcoming_slots;
use crate::schedule::status::SlotStatus;
use crate::schedule::InfoSlot;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Languages writing decimals with a comma and the currency symbol after the amount.
const COMMA_DECIMAL_LANGUAGES: [&str; 6] = ["it", "de", "fr", "es", "pt", "nl"];

/// Renders a price for the configured locale: `12,50 €` or `€12.50`.
pub fn format_price(price: &Price, regional: &RegionalSettings) -> String {
    match price {
        Price::Text(text) => text.to_owned(),
        Price::Amount(amount) => {
            let language = regional
                .locale
                .split(['-', '_'])
                .next()
                .unwrap_or_default()
                .to_lowercase();
            let symbol = &regional.currency_symbol;
            if COMMA_DECIMAL_LANGUAGES.contains(&language.as_str()) {
                format!("{} {symbol}", format!("{amount:.2}").replace('.', ","))
            } else {
                format!("{symbol}{amount:.2}")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub allergens: Vec<Allergen>,
    pub diet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_icon: Option<String>,
    pub no_gluten_option: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryView {
    pub id: String,
    pub label: String,
    pub items: Vec<ItemView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub title: String,
    pub text: String,
    pub style: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SectionView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderView>,
    pub categories: Vec<CategoryView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusView {
    pub slots: Vec<SlotStatus>,
    pub show_next_prefix: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RangeView {
    pub days: String,
    pub times: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoSlotView {
    pub id: String,
    pub label: String,
    pub is_kitchen: bool,
    pub hours: Vec<RangeView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentView {
    Text { label: String, text: String, style: String },
    Cta { label: String, link: String, style: String },
}

/// Everything a page needs to render the menu for one reader.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuView {
    pub language: String,
    pub filters_active: bool,
    pub kitchen: SectionView,
    pub bar: SectionView,
    pub status: StatusView,
    pub info: Vec<InfoSlotView>,
    pub content: Vec<ContentView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl MenuView {
    pub fn build(
        data: &MenuData,
        config: &Config,
        chain: &LanguageChain,
        filter: &FilterSpec,
        now: NaiveDateTime,
    ) -> MenuView {
        let builder = ViewBuilder { config, chain };
        let slots = upcoming_slots(&data.schedule.hero, now, chain);
        MenuView {
            language: chain.primary().unwrap_or_default().to_owned(),
            filters_active: filter.is_active(),
            kitchen: builder.section(&data.kitchen.categories, data.content.kitchen_header.as_ref(), filter),
            bar: builder.section(&data.bar.categories, data.content.bar_header.as_ref(), filter),
            status: StatusView {
                show_next_prefix: show_next_prefix(&slots),
                slots,
            },
            info: data.schedule.info.iter().map(|slot| builder.info_slot(slot)).collect(),
            content: builder.content(&data.content),
            last_updated: data.last_updated().map(str::to_owned),
        }
    }
}

struct ViewBuilder<'a> {
    config: &'a Config,
    chain: &'a LanguageChain,
}

impl ViewBuilder<'_> {
    fn section(&self, categories: &[Category], header: Option<&MenuHeader>, filter: &FilterSpec) -> SectionView {
        SectionView {
            header: header.map(|header| HeaderView {
                title: header.title.resolve_or(self.chain, "").to_owned(),
                text: header.text.resolve_or(self.chain, "").to_owned(),
                style: header.style.to_owned(),
            }),
            categories: filter
                .apply(categories)
                .iter()
                .map(|category| CategoryView {
                    id: category.id.to_owned(),
                    label: category.label(self.chain).to_owned(),
                    items: category.items.iter().map(|item| self.item(item)).collect(),
                })
                .collect(),
        }
    }

    fn item(&self, item: &MenuItem) -> ItemView {
        let diet = item.diet.as_str();
        ItemView {
            name: item.names.resolve_or(self.chain, "").to_owned(),
            description: item.descriptions.resolve(self.chain).map(str::to_owned),
            price: item
                .price
                .as_ref()
                .map(|price| format_price(price, &self.config.regional)),
            allergens: item.allergens.to_owned(),
            diet: diet.to_owned(),
            diet_icon: self
                .config
                .food_type(diet)
                .map(|food_type| food_type.icon.to_owned())
                .filter(|icon| !icon.is_empty()),
            no_gluten_option: item.no_gluten_option,
        }
    }

    fn info_slot(&self, info: &InfoSlot) -> InfoSlotView {
        InfoSlotView {
            id: info.slot.id.to_owned(),
            label: info.slot.label(self.chain).to_owned(),
            is_kitchen: info.slot.is_kitchen,
            hours: info
                .collapsed
                .iter()
                .map(|range| RangeView {
                    days: range.days_label(self.chain),
                    times: range.times(),
                })
                .collect(),
        }
    }

    fn content(&self, content: &ContentBlocks) -> Vec<ContentView> {
        content
            .items
            .iter()
            .map(|item| match item {
                ContentItem::Text { label, text, style } => ContentView::Text {
                    label: label.resolve_or(self.chain, "").to_owned(),
                    text: text.resolve_or(self.chain, "").to_owned(),
                    style: style.to_owned(),
                },
                ContentItem::Cta { label, link, style } => ContentView::Cta {
                    label: label.resolve_or(self.chain, "").to_owned(),
                    link: link.to_owned(),
                    style: style.to_owned(),
                },
            })
            .collect()
    }
}
