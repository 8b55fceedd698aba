//! Display formatting for amounts and dates.
//!
//! Amounts are stored in minor units (cents) and rendered as US dollars.
//! Dates are rendered in the en-US style used on the dashboard.

use chrono::NaiveDateTime;

/// Format minor units as a currency string, e.g. `500` as `$5.00`.
pub fn format_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{}${}.{:02}", sign, group_thousands(abs / 100), abs % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Parse a user entered amount in major units into minor units.
///
/// Accepts an optional leading `$`, thousands separators and up to two
/// decimals. Negative amounts are rejected, the status carries the sign.
pub fn parse_currency(input: &str) -> Option<i64> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if fraction.len() > 2 || !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }
    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let cents: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(cents)
}

/// `Oct 18, 2026`
pub fn format_date_to_local(date: &NaiveDateTime) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Oct 18, 2026, 2:05 PM`
pub fn format_date_time_to_local(date: &NaiveDateTime) -> String {
    date.format("%b %-d, %Y, %-I:%M %p").to_string()
}
