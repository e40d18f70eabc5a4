//! Formatting utilities used for CLI and report outputs.

use chrono::TimeDelta;

use super::time::hours_minutes;

/// `8時間30分`
pub fn jp_hours_minutes(hours: i64, minutes: i64) -> String {
    format!("{}時間{}分", hours, minutes)
}

pub fn jp_duration(d: TimeDelta) -> String {
    let (h, m) = hours_minutes(d);
    jp_hours_minutes(h, m)
}

/// Fractional hour total → `H時間M分`, both parts truncated.
pub fn jp_total_hours(total: f64) -> String {
    let hours = total.trunc();
    let minutes = ((total - hours) * 60.0).trunc();
    jp_hours_minutes(hours as i64, minutes as i64)
}

/// Separator line for reports, built from the configured character.
pub fn separator(ch: &str, width: usize) -> String {
    let unit = ch.chars().next().unwrap_or('-');
    std::iter::repeat_n(unit, width).collect()
}
