//! Editorial blocks from the `content` table: menu headers, text blocks and links.
use crate::helpers::string::normalize;
use crate::i18n::Localized;
use crate::table::column::Column;
use crate::table::record::Record;
use tracing::debug;

const DEFAULT_HEADER_STYLE: &str = "card";
const DEFAULT_TEXT_STYLE: &str = "plain";
const DEFAULT_CTA_STYLE: &str = "secondary";

/// Introduction shown above a menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuHeader {
    pub title: Localized,
    pub text: Localized,
    pub style: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentItem {
    Text {
        label: Localized,
        text: Localized,
        style: String,
    },
    /// Call to action
    Cta {
        label: Localized,
        link: String,
        style: String,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentBlocks {
    pub kitchen_header: Option<MenuHeader>,
    pub bar_header: Option<MenuHeader>,
    /// In sheet order
    pub items: Vec<ContentItem>,
}

fn style(record: &Record, default: &str) -> String {
    record.non_blank(&Column::Style).unwrap_or(default).to_owned()
}

fn labels(record: &Record) -> Localized {
    record.localized(|column| matches!(column, Column::Label(_)))
}

fn texts(record: &Record) -> Localized {
    record.localized(|column| matches!(column, Column::Text(_)))
}

fn header(record: &Record) -> MenuHeader {
    MenuHeader {
        title: labels(record),
        text: texts(record),
        style: style(record, DEFAULT_HEADER_STYLE),
    }
}

/// Sorts content rows by their `type`. Later headers replace earlier ones and rows of
/// unknown type are ignored.
pub fn normalize_content(records: &[Record]) -> ContentBlocks {
    let mut blocks = ContentBlocks::default();
    for record in records {
        match normalize(record.get(&Column::Type)).as_str() {
            "menu_header_kitchen" => blocks.kitchen_header = Some(header(record)),
            "menu_header_bar" => blocks.bar_header = Some(header(record)),
            "text" => blocks.items.push(ContentItem::Text {
                label: labels(record),
                text: texts(record),
                style: style(record, DEFAULT_TEXT_STYLE),
            }),
            "cta" => blocks.items.push(ContentItem::Cta {
                label: labels(record),
                link: record.get(&Column::Link).trim().to_owned(),
                style: style(record, DEFAULT_CTA_STYLE),
            }),
            other => debug!(content_type = other, "ignoring content row"),
        }
    }
    blocks
}
