//! Cell text utilities shared by the normalizers.
//! Keyword normalization, truthy detection and locale-aware decimal parsing.

use crate::config::NumberFormat;

/// Tokens accepted as "true" in boolean columns, across the supported authoring languages.
const TRUTHY_TOKENS: [&str; 7] = ["true", "1", "x", "si", "sì", "yes", "vero"];

/// Trims and lower-cases a cell so it can be compared against a keyword.
#[inline]
pub(crate) fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Returns true if the cell holds one of the truthy tokens.
/// Matching is exact after trimming and lower-casing; "yes please" is not truthy.
pub fn is_truthy(value: &str) -> bool {
    let value = normalize(value);
    !value.is_empty() && TRUTHY_TOKENS.contains(&value.as_str())
}

/// Returns true if the cell is empty once surrounding whitespace is removed.
#[inline]
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parses a decimal number written with the separator of the given number format.
/// Only the first comma is rewritten for comma formats, so thousand separators are not supported.
pub(crate) fn parse_decimal(value: &str, format: NumberFormat) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let value = match format {
        NumberFormat::Comma => value.replacen(',', ".", 1),
        NumberFormat::Dot => value.to_owned(),
    };
    value.parse::<f64>().ok().filter(|number| number.is_finite())
}
