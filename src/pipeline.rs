use crate::config::Config;
use crate::content::normalize_content;
use crate::content::ContentBlocks;
use crate::menu::normalize::normalize_menu;
use crate::menu::Menu;
use crate::schedule::normalize_schedule;
use crate::schedule::Schedule;
use crate::spreadsheet::tokenizer::tokenize;
use crate::table::demux::demultiplex;
use crate::table::demux::single_table;
use tracing::info;

/// Everything one refresh of the published sheet yields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuData {
    pub kitchen: Menu,
    pub bar: Menu,
    pub schedule: Schedule,
    pub content: ContentBlocks,
}

impl MenuData {
    /// Parses a multi-table sheet.
    ///
    /// Never fails: missing tables come out empty and malformed cells degrade to
    /// their defaults.
    pub fn parse(text: &str, config: &Config) -> MenuData {
        let grid = tokenize(text);
        let translator = config.translator();
        let tables = demultiplex(&grid, &translator);

        let data = MenuData {
            kitchen: normalize_menu(&tables.kitchen, &tables.categories, config),
            bar: normalize_menu(&tables.bar, &tables.categories, config),
            schedule: normalize_schedule(&tables.timeslots, config),
            content: normalize_content(&tables.content),
        };
        info!(
            rows = grid.len(),
            kitchen_categories = data.kitchen.categories.len(),
            bar_categories = data.bar.categories.len(),
            slots = data.schedule.slots.len(),
            content_items = data.content.items.len(),
            "menu sheet parsed"
        );
        data
    }

    /// Parses a legacy sheet holding only the kitchen menu, headers on the first row.
    pub fn parse_single_table(text: &str, config: &Config) -> MenuData {
        let grid = tokenize(text);
        let records = single_table(&grid, &config.translator());
        let data = MenuData {
            kitchen: normalize_menu(&records, &[], config),
            ..MenuData::default()
        };
        info!(
            rows = grid.len(),
            kitchen_categories = data.kitchen.categories.len(),
            "single table menu parsed"
        );
        data
    }

    /// Freshness stamp of the sheet, kitchen first.
    pub fn last_updated(&self) -> Option<&str> {
        self.kitchen
            .last_updated
            .as_deref()
            .or(self.bar.last_updated.as_deref())
    }
}
