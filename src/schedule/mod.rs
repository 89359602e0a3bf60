//! # Opening Hours
//!
//! Time slots from the `timeslots` table: per-weekday opening hours, the collapsed
//! form shown in the info section and the live status shown in the hero banner.
use crate::config::Config;
use crate::helpers::string::normalize;
use crate::i18n::LanguageChain;
use crate::i18n::Localized;
use crate::schedule::collapse::collapse_days;
use crate::schedule::collapse::CollapsedRange;
use crate::schedule::time::parse_time_value;
use crate::table::column::Column;
use crate::table::record::Record;
use chrono::Weekday;
use std::collections::HashMap;
use tracing::debug;
use tracing::warn;

pub mod collapse;
pub mod status;
pub mod time;

/// Opening hours of a slot on one weekday.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub day: Weekday,
    pub open: String,
    pub close: String,
}

/// A named service period, e.g. lunch or aperitivo.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSlot {
    pub id: String,
    pub labels: Localized,
    pub is_kitchen: bool,
    pub show_in_hero: bool,
    pub show_in_info: bool,
    pub schedule: Vec<ScheduleEntry>,
}

impl TimeSlot {
    /// Display label, the slot id when no label is set.
    pub fn label(&self, chain: &LanguageChain) -> &str {
        self.labels.resolve_or(chain, &self.id)
    }
}

/// Info-visible slot with its collapsed opening hours.
#[derive(Clone, Debug, PartialEq)]
pub struct InfoSlot {
    pub slot: TimeSlot,
    pub collapsed: Vec<CollapsedRange>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schedule {
    /// Every slot, in first-seen order
    pub slots: Vec<TimeSlot>,
    pub hero: Vec<TimeSlot>,
    pub info: Vec<InfoSlot>,
}

/// Parses a canonical day token (`mon`..`sun`) or a full English day name.
pub fn parse_day(value: &str) -> Option<Weekday> {
    match normalize(value).as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Groups timeslot rows into slots.
///
/// A row belongs to the slot named by `slot_id`; rows without a slot id or a known day
/// are skipped. Labels and flags come from the first row of each slot. A row adds an
/// entry only when both its opening and closing times are set.
pub fn normalize_schedule(records: &[Record], config: &Config) -> Schedule {
    let format = config.input.csv_number_format;
    let mut slots: Vec<TimeSlot> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(id) = record.non_blank(&Column::SlotId).map(normalize) else {
            continue;
        };
        let Some(day) = parse_day(record.get(&Column::Day)) else {
            warn!(slot = %id, day = record.get(&Column::Day), "skipping timeslot row without a known day");
            continue;
        };
        let position = *positions.entry(id.to_owned()).or_insert_with(|| {
            slots.push(TimeSlot {
                id: id.to_owned(),
                labels: record.localized(|column| matches!(column, Column::Label(_))),
                is_kitchen: record.is_truthy(&Column::IsKitchen),
                show_in_hero: record.is_truthy(&Column::ShowInHero),
                show_in_info: record.is_truthy(&Column::ShowInInfo),
                schedule: Vec::new(),
            });
            slots.len() - 1
        });
        if let (Some(open), Some(close)) = (record.non_blank(&Column::Open), record.non_blank(&Column::Close)) {
            slots[position].schedule.push(ScheduleEntry {
                day,
                open: parse_time_value(open, format),
                close: parse_time_value(close, format),
            });
        }
    }

    let hero = slots.iter().filter(|slot| slot.show_in_hero).cloned().collect();
    let info = slots
        .iter()
        .filter(|slot| slot.show_in_info)
        .map(|slot| InfoSlot {
            slot: slot.clone(),
            collapsed: collapse_days(&slot.schedule),
        })
        .collect();
    debug!(slots = slots.len(), "schedule normalized");
    Schedule { slots, hero, info }
}
