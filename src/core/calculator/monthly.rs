use super::pairing::{group_by_day, parse_entries, summarize_day};
use crate::errors::AppResult;
use crate::models::entry::AttendanceLog;
use crate::models::report::MonthlySummary;
use crate::utils::time::fractional_hours;
use chrono::FixedOffset;

/// Aggregate an unordered set of entries into per-day summaries and a
/// monthly total (fractional hours, summed across days).
pub fn build_monthly_summary(
    entries: &[AttendanceLog],
    tz: FixedOffset,
) -> AppResult<MonthlySummary> {
    let events = parse_entries(entries, tz)?;

    let days: Vec<_> = group_by_day(events)
        .into_iter()
        .map(|(date, evs)| summarize_day(date, evs))
        .collect();

    let total_hours: f64 = days.iter().map(|d| fractional_hours(d.total)).sum();

    Ok(MonthlySummary { days, total_hours })
}
