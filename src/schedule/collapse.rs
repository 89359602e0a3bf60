use crate::i18n::day_name;
use crate::i18n::LanguageChain;
use crate::schedule::ScheduleEntry;
use chrono::Weekday;

/// Run of consecutive weekdays sharing the same opening hours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollapsedRange {
    pub start_day: Weekday,
    pub end_day: Weekday,
    pub open: String,
    pub close: String,
}

impl CollapsedRange {
    fn from_entry(entry: &ScheduleEntry) -> Self {
        CollapsedRange {
            start_day: entry.day,
            end_day: entry.day,
            open: entry.open.to_owned(),
            close: entry.close.to_owned(),
        }
    }

    /// Returns true if the entry continues this run on the following weekday.
    fn extends_with(&self, entry: &ScheduleEntry) -> bool {
        self.end_day.number_from_monday() + 1 == entry.day.number_from_monday()
            && self.open == entry.open
            && self.close == entry.close
    }

    pub fn is_single_day(&self) -> bool {
        self.start_day == self.end_day
    }

    /// Day label in the chain's language, `start - end` for multi-day runs.
    pub fn days_label(&self, chain: &LanguageChain) -> String {
        let start = day_name(self.start_day, chain);
        if self.is_single_day() {
            start.to_owned()
        } else {
            format!("{start} - {}", day_name(self.end_day, chain))
        }
    }

    pub fn times(&self) -> String {
        format!("{} - {}", self.open, self.close)
    }
}

/// Merges a slot's entries into runs of consecutive weekdays with identical hours.
///
/// Entries are ordered by weekday first, keeping their relative order within a day.
/// Runs never wrap from Sunday to Monday.
pub fn collapse_days(schedule: &[ScheduleEntry]) -> Vec<CollapsedRange> {
    let mut sorted: Vec<&ScheduleEntry> = schedule.iter().collect();
    sorted.sort_by_key(|entry| entry.day.number_from_monday());

    let mut ranges: Vec<CollapsedRange> = Vec::new();
    for entry in sorted {
        match ranges.last_mut() {
            Some(current) if current.extends_with(entry) => current.end_day = entry.day,
            _ => ranges.push(CollapsedRange::from_entry(entry)),
        }
    }
    ranges
}
