use super::action::Action;
use crate::errors::AppResult;
use crate::utils::time::parse_stored_timestamp;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One timestamped start/end event.
///
/// `timestamp` keeps the stored text as-is: it is only parsed when needed,
/// so a damaged row can still be listed, edited or deleted.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceLog {
    pub id: String,
    pub team_id: String,
    pub user_id: String,
    pub channel_id: String,
    pub workplace_id: String, // ⇔ workplace_bindings.id
    pub workplace_name: String, // joined from the binding, never stored here
    pub action: Action,
    pub timestamp: String,
}

impl AttendanceLog {
    pub fn parsed_timestamp(&self) -> AppResult<DateTime<FixedOffset>> {
        parse_stored_timestamp(&self.timestamp)
    }
}
