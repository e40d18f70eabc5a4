use crate::core::report::{ReportLogic, ReportStyle};
use crate::core::subscribe::SubscribeLogic;
use crate::core::transition::TransitionLogic;
use crate::db::pool::DbPool;
use crate::utils::date::YearMonth;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

pub const HELP_TEXT: &str = "以下のコマンドが利用できます。\n\
/start-work: 出勤\n\
/end-work: 退勤\n\
/subscribe-workplace: 職場登録\n\
/monthly-hours: 月間出勤時間\n\
/help-attendance: ヘルプ";

pub const UNKNOWN_COMMAND: &str = "不明なコマンドです。";

pub const START_FAILED: &str = "Failed to add attendance In log";
pub const END_FAILED: &str = "Failed to add attendance log";
pub const SUBSCRIBE_FAILED: &str = "Failed to subscribe workplace";

/// Slash commands understood by the bot. Each name is also accepted with a
/// `-dev` suffix (development app).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    StartWork,
    EndWork,
    SubscribeWorkplace,
    MonthlyHours,
    Help,
    Unknown(String),
}

impl SlashCommand {
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        let base = name.strip_suffix("-dev").unwrap_or(name);

        match base {
            "/start-work" => SlashCommand::StartWork,
            "/end-work" => SlashCommand::EndWork,
            "/subscribe-workplace" => SlashCommand::SubscribeWorkplace,
            "/monthly-hours" => SlashCommand::MonthlyHours,
            "/help-attendance" => SlashCommand::Help,
            _ => SlashCommand::Unknown(name.to_string()),
        }
    }
}

/// Reply body posted back to Slack.
#[derive(Debug, Serialize)]
pub struct SlackMessage {
    pub text: String,
}

/// What Slack sends for a slash command, reduced to the fields we use.
#[derive(Debug, Clone)]
pub struct SlashRequest<'a> {
    pub team_id: &'a str,
    pub channel_id: &'a str,
    pub user_id: &'a str,
    pub command: &'a str,
    pub text: &'a str,
}

pub struct SlashLogic;

impl SlashLogic {
    /// Run a slash command and build the reply text.
    ///
    /// Failures never propagate: like any bot reply they end up in the text.
    pub fn respond(
        pool: &mut DbPool,
        req: &SlashRequest<'_>,
        now: &DateTime<FixedOffset>,
        style: &ReportStyle,
    ) -> SlackMessage {
        let text = match SlashCommand::parse(req.command) {
            SlashCommand::StartWork => {
                match TransitionLogic::start(pool, req.team_id, req.channel_id, req.user_id, now) {
                    Ok(entry) => format!("{}: 出勤", entry.workplace_name),
                    Err(e) => format!("{}: {}", START_FAILED, e),
                }
            }
            SlashCommand::EndWork => {
                match TransitionLogic::end(pool, req.team_id, req.channel_id, req.user_id, now) {
                    Ok(entry) => format!("{}: 退勤", entry.workplace_name),
                    Err(e) => format!("{}: {}", END_FAILED, e),
                }
            }
            SlashCommand::SubscribeWorkplace => match SubscribeLogic::apply(
                pool,
                req.team_id,
                req.channel_id,
                req.user_id,
                req.text,
                now,
            ) {
                Ok(binding) => format!("職場登録完了: {}", binding.workplace),
                Err(e) => format!("{}: {}", SUBSCRIBE_FAILED, e),
            },
            SlashCommand::MonthlyHours => Self::monthly_hours(pool, req, now, style),
            SlashCommand::Help => HELP_TEXT.to_string(),
            SlashCommand::Unknown(_) => UNKNOWN_COMMAND.to_string(),
        };

        SlackMessage { text }
    }

    fn monthly_hours(
        pool: &mut DbPool,
        req: &SlashRequest<'_>,
        now: &DateTime<FixedOffset>,
        style: &ReportStyle,
    ) -> String {
        let month = match YearMonth::resolve(Some(req.text), now) {
            Ok(m) => m,
            Err(e) => return e.to_string(),
        };

        match ReportLogic::monthly(pool, req.team_id, req.channel_id, req.user_id, month, style) {
            Ok(report) if report.attendance_logs.is_empty() => report.message,
            Ok(report) => report.formatted_data,
            Err(e) => format!("Failed to get attendance log: {}", e),
        }
    }
}
