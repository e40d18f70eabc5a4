/// ANSI color helper utilities for terminal output.
use crate::models::action::Action;
use crate::models::status::AttendanceStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub fn color_for_status(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Started => GREEN,
        AttendanceStatus::Ended => YELLOW,
        AttendanceStatus::NoHistory => GREY,
    }
}

pub fn colorize_action(action: Action) -> String {
    let color = if action.is_start() { GREEN } else { RED };
    format!("{color}{}{RESET}", action.to_db_str())
}
