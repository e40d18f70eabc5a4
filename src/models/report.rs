use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta};
use serde::Serialize;

use super::entry::AttendanceLog;

/// A start immediately followed by an end on the same day.
#[derive(Debug, Clone)]
pub struct WorkPair {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub duration: TimeDelta,
}

#[derive(Debug, Clone)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub pairs: Vec<WorkPair>,
    pub total: TimeDelta,
}

#[derive(Debug, Clone, Default)]
pub struct MonthlySummary {
    pub days: Vec<DaySummary>,
    /// Sum of day totals, in fractional hours.
    pub total_hours: f64,
}

/// Payload of `report --json`, shaped like the monthly-hours API response.
#[derive(Debug, Serialize)]
pub struct MonthlyReport {
    pub workplace: String,
    pub year_month: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attendance_logs: Vec<AttendanceLog>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub formatted_data: String,
    pub message: String,
    pub success: bool,
}
