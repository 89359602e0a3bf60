use crate::config::NumberFormat;
use crate::helpers::string::parse_decimal;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

const MINUTES_PER_DAY: f64 = 1440.0;

static CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})").expect("Hardcode regex pattern"));

/// Normalizes a time cell to `HH:MM`.
///
/// Cells already holding a clock literal are kept as written. Numeric cells are a
/// fraction of a day (spreadsheet time serials), rounded to the minute with hours
/// wrapped at 24. Anything else is returned trimmed but otherwise unchanged.
pub fn parse_time_value(value: &str, format: NumberFormat) -> String {
    let value = value.trim();
    if value.contains(':') {
        return value.to_owned();
    }
    let Some(fraction) = parse_decimal(value, format) else {
        debug!(value, "time cell is neither a clock nor a day fraction");
        return value.to_owned();
    };
    let minutes = (fraction * MINUTES_PER_DAY).round() as i64;
    let hours = (minutes / 60).rem_euclid(24);
    let minutes = minutes.rem_euclid(60);
    format!("{hours:02}:{minutes:02}")
}

/// Minutes since midnight of an `HH:MM` clock, `None` when the text is not a clock.
pub fn clock_minutes(value: &str) -> Option<u32> {
    let captures = CLOCK.captures(value.trim())?;
    let hours: u32 = captures[1].parse().ok()?;
    let minutes: u32 = captures[2].parse().ok()?;
    Some(hours * 60 + minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_literals_pass_through() {
        assert_eq!(parse_time_value("18:30", NumberFormat::Dot), "18:30");
        assert_eq!(parse_time_value(" 9:05 ", NumberFormat::Comma), "9:05");
    }

    #[test]
    fn day_fractions() {
        assert_eq!(parse_time_value("0.5", NumberFormat::Dot), "12:00");
        assert_eq!(parse_time_value("0,75", NumberFormat::Comma), "18:00");
        assert_eq!(parse_time_value("0.0833333", NumberFormat::Dot), "02:00");
        assert_eq!(parse_time_value("0", NumberFormat::Dot), "00:00");
    }

    #[test]
    fn hours_wrap_at_midnight() {
        assert_eq!(parse_time_value("1.25", NumberFormat::Dot), "06:00");
        assert_eq!(parse_time_value("0.99999", NumberFormat::Dot), "00:00");
    }

    #[test]
    fn unparsable_is_kept() {
        assert_eq!(parse_time_value("noon", NumberFormat::Dot), "noon");
        assert_eq!(parse_time_value("", NumberFormat::Dot), "");
    }

    #[test]
    fn minutes_since_midnight() {
        assert_eq!(clock_minutes("00:00"), Some(0));
        assert_eq!(clock_minutes("9:15"), Some(555));
        assert_eq!(clock_minutes("23:59"), Some(1439));
        assert_eq!(clock_minutes("noon"), None);
        assert_eq!(clock_minutes("12"), None);
    }
}
