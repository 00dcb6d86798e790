//! Lenient amount parsing for spreadsheet exports.

use std::str::FromStr as _;

use rust_decimal::Decimal;
use salesbook_shared::types::round_cents;

/// Parses an amount cell, rounded to cents.
///
/// Whitespace (including non-breaking and narrow no-break spaces) is removed
/// and a decimal comma is accepted: when both `,` and `.` occur, the last one
/// is the decimal separator and the other is a thousands separator. An empty
/// cell is zero.
///
/// Returns `None` if the cell is not a number; callers coerce it to zero.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Some(Decimal::ZERO);
    }

    let normalized = match (cleaned.rfind(','), cleaned.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (Some(_), None) if cleaned.matches(',').count() == 1 => cleaned.replace(',', "."),
        (Some(_), None) => cleaned.replace(',', ""),
        (None, Some(_)) if cleaned.matches('.').count() > 1 => cleaned.replace('.', ""),
        _ => cleaned,
    };

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
        .map(round_cents)
}
