use crate::core::calculator::monthly::build_monthly_summary;
use crate::core::require_identity;
use crate::db::bindings::find_binding;
use crate::db::entries::find_entries;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::AttendanceLog;
use crate::models::report::{MonthlyReport, MonthlySummary};
use crate::utils::date::YearMonth;
use crate::utils::formatting::{jp_duration, jp_total_hours, separator};
use chrono::FixedOffset;
use std::fmt::Write;

const SEPARATOR_WIDTH: usize = 37;

pub const NO_RECORDS_MESSAGE: &str = "出勤記録がありません。";

/// How reports are rendered.
#[derive(Debug, Clone)]
pub struct ReportStyle {
    pub tz: FixedOffset,
    pub separator_char: String,
}

impl ReportStyle {
    pub fn new(tz: FixedOffset, separator_char: &str) -> Self {
        Self {
            tz,
            separator_char: separator_char.to_string(),
        }
    }

    fn rule(&self) -> String {
        separator(&self.separator_char, SEPARATOR_WIDTH)
    }
}

/// Render the monthly attendance text of `entries`.
///
/// An unparsable timestamp aborts the aggregation: the result is then a
/// single `Error: ...` line instead of a partial report.
pub fn format_attendance(
    entries: &[AttendanceLog],
    workplace: &str,
    month: Option<YearMonth>,
    style: &ReportStyle,
) -> String {
    match build_monthly_summary(entries, style.tz) {
        Ok(summary) => render(&summary, workplace, month, style),
        Err(e) => format!("Error: {}", e),
    }
}

pub fn render(
    summary: &MonthlySummary,
    workplace: &str,
    month: Option<YearMonth>,
    style: &ReportStyle,
) -> String {
    let rule = style.rule();
    let mut sb = String::new();

    let month_label = month
        .map(|m| m.label())
        .or_else(|| summary.days.first().map(|d| d.date.format("%-m月").to_string()))
        .unwrap_or_default();

    // writeln! on a String cannot fail
    let _ = writeln!(sb, "勤務先: {}", workplace);
    let _ = writeln!(sb, "{}\n", rule);
    let _ = writeln!(sb, "{}の勤怠記録", month_label);
    let _ = writeln!(sb, "{}\n", rule);

    for day in &summary.days {
        let _ = writeln!(sb, "日付: {}", day.date.format("%Y-%m-%d"));
        for p in &day.pairs {
            let _ = writeln!(
                sb,
                "・出勤 {} / 退勤 {}（{}）",
                p.start.format("%H:%M"),
                p.end.format("%H:%M"),
                jp_duration(p.duration)
            );
        }
        let _ = writeln!(sb, "合計: {}", jp_duration(day.total));
        let _ = writeln!(sb, "{}\n", rule);
    }

    let _ = writeln!(sb, "月間合計勤務時間: {}", jp_total_hours(summary.total_hours));

    sb
}

pub struct ReportLogic;

impl ReportLogic {
    /// Entries of (team, channel, user) for one month, with the rendered text.
    pub fn monthly(
        pool: &mut DbPool,
        team_id: &str,
        channel_id: &str,
        user_id: &str,
        month: YearMonth,
        style: &ReportStyle,
    ) -> AppResult<MonthlyReport> {
        require_identity(team_id, channel_id, user_id)?;

        let binding = find_binding(&pool.conn, team_id, channel_id, user_id)?
            .ok_or(AppError::BindingNotFound)?;

        let (from, to) = month.stored_range(style.tz)?;
        let entries = find_entries(&pool.conn, &binding.id, &from, &to)?;

        if entries.is_empty() {
            return Ok(MonthlyReport {
                workplace: binding.workplace,
                year_month: month.to_string(),
                attendance_logs: Vec::new(),
                formatted_data: String::new(),
                message: NO_RECORDS_MESSAGE.to_string(),
                success: true,
            });
        }

        let formatted = format_attendance(&entries, &binding.workplace, Some(month), style);

        Ok(MonthlyReport {
            workplace: binding.workplace,
            year_month: month.to_string(),
            attendance_logs: entries,
            formatted_data: formatted,
            message: "Successfully retrieved attendance logs".to_string(),
            success: true,
        })
    }

    /// Entries of one month, for listing and correction.
    pub fn entries(
        pool: &mut DbPool,
        team_id: &str,
        channel_id: &str,
        user_id: &str,
        month: YearMonth,
        tz: FixedOffset,
    ) -> AppResult<Vec<AttendanceLog>> {
        require_identity(team_id, channel_id, user_id)?;

        let binding = find_binding(&pool.conn, team_id, channel_id, user_id)?
            .ok_or(AppError::BindingNotFound)?;

        let (from, to) = month.stored_range(tz)?;
        find_entries(&pool.conn, &binding.id, &from, &to)
    }
}
