use crate::i18n::LanguageChain;
use crate::schedule::time::clock_minutes;
use crate::schedule::ScheduleEntry;
use crate::schedule::TimeSlot;
use chrono::Datelike;
use chrono::NaiveDateTime;
use chrono::Timelike;
use serde::Serialize;

/// Maximum number of slots reported by [`upcoming_slots`].
pub const MAX_STATUS_SLOTS: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    Active,
    Upcoming,
}

/// Current state of a hero slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotStatus {
    pub slot_id: String,
    pub label: String,
    pub is_kitchen: bool,
    pub state: SlotState,
    /// Zero for active slots
    pub minutes_until: u32,
}

impl SlotStatus {
    pub fn is_active(&self) -> bool {
        self.state == SlotState::Active
    }
}

/// Opening and closing minute of an entry, `None` when either time is not a clock.
fn window(entry: &ScheduleEntry) -> Option<(u32, u32)> {
    Some((clock_minutes(&entry.open)?, clock_minutes(&entry.close)?))
}

/// State of one of today's entries at `now` minutes since midnight.
fn entry_state(open: u32, close: u32, now: u32) -> Option<SlotState> {
    if close < open {
        if now >= open || now < close {
            Some(SlotState::Active)
        } else {
            Some(SlotState::Upcoming)
        }
    } else if open <= now && now < close {
        Some(SlotState::Active)
    } else if now < open {
        Some(SlotState::Upcoming)
    } else {
        None
    }
}

/// Reports which slots are open now and which open later today.
///
/// Only entries on the current weekday are considered, plus entries of the previous
/// weekday that run past midnight and have not closed yet. Active slots come first,
/// then upcoming ones by time until opening; at most [`MAX_STATUS_SLOTS`] are kept.
pub fn upcoming_slots(slots: &[TimeSlot], now: NaiveDateTime, chain: &LanguageChain) -> Vec<SlotStatus> {
    let today = now.weekday();
    let yesterday = today.pred();
    let minutes = now.hour() * 60 + now.minute();

    let mut statuses = Vec::new();
    for slot in slots {
        let status = |state: SlotState, minutes_until: u32| SlotStatus {
            slot_id: slot.id.to_owned(),
            label: slot.label(chain).to_owned(),
            is_kitchen: slot.is_kitchen,
            state,
            minutes_until,
        };

        let mut active_today = false;
        for entry in slot.schedule.iter().filter(|entry| entry.day == today) {
            let Some((open, close)) = window(entry) else {
                continue;
            };
            match entry_state(open, close, minutes) {
                Some(SlotState::Active) => {
                    active_today = true;
                    statuses.push(status(SlotState::Active, 0));
                }
                Some(SlotState::Upcoming) => statuses.push(status(SlotState::Upcoming, open - minutes)),
                None => {}
            }
        }

        let spills_over = slot
            .schedule
            .iter()
            .filter(|entry| entry.day == yesterday)
            .filter_map(window)
            .any(|(open, close)| close < open && minutes < close);
        if spills_over && !active_today {
            statuses.push(status(SlotState::Active, 0));
        }
    }

    statuses.sort_by_key(|status| (!status.is_active(), status.minutes_until));
    statuses.truncate(MAX_STATUS_SLOTS);
    statuses
}

/// Returns true if the status line should be introduced as "next today", i.e. nothing is open.
pub fn show_next_prefix(statuses: &[SlotStatus]) -> bool {
    !statuses.iter().any(SlotStatus::is_active)
}
