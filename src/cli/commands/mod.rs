pub mod attendance;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
pub mod slash;
pub mod subscribe;

use crate::config::Config;
use crate::core::report::ReportStyle;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::time::{now_in, parse_input_datetime};
use chrono::{DateTime, FixedOffset};

pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    Ok(DbPool::new(cfg.database_path())?)
}

pub(crate) fn report_style(cfg: &Config) -> AppResult<ReportStyle> {
    Ok(ReportStyle::new(cfg.tz()?, &cfg.separator_char))
}

/// `--at` value, or the current time, in the reporting timezone.
pub(crate) fn event_time(cfg: &Config, at: &Option<String>) -> AppResult<DateTime<FixedOffset>> {
    let tz = cfg.tz()?;
    match at {
        Some(s) => parse_input_datetime(s, tz),
        None => Ok(now_in(tz)),
    }
}
