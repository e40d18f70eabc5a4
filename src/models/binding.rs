use super::status::AttendanceStatus;
use serde::Serialize;

pub const COMPOSITE_KEY_SEPARATOR: &str = "#";

/// Build the lookup key of a (team, channel, user) triple.
pub fn composite_key(team_id: &str, channel_id: &str, user_id: &str) -> String {
    [team_id, channel_id, user_id].join(COMPOSITE_KEY_SEPARATOR)
}

/// Association between a chat team/channel/user triple and one workplace.
#[derive(Debug, Clone, Serialize)]
pub struct WorkplaceBinding {
    pub id: String,
    pub team_id: String,
    pub channel_id: String,
    pub user_id: String,
    pub workplace: String,
    pub composite_key: String,
    pub status: AttendanceStatus,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl WorkplaceBinding {
    pub fn new(
        id: String,
        team_id: &str,
        channel_id: &str,
        user_id: &str,
        workplace: &str,
        now: &str,
    ) -> Self {
        Self {
            id,
            team_id: team_id.to_string(),
            channel_id: channel_id.to_string(),
            user_id: user_id.to_string(),
            workplace: workplace.to_string(),
            composite_key: composite_key(team_id, channel_id, user_id),
            status: AttendanceStatus::NoHistory,
            created_at: now.to_string(),
            updated_at: now.to_string(),
            deleted_at: None,
        }
    }
}
