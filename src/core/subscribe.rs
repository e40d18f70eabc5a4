use crate::core::require_identity;
use crate::db::bindings::{find_binding, insert_binding};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::binding::WorkplaceBinding;
use crate::utils::id::new_id;
use crate::utils::time::format_timestamp;
use chrono::{DateTime, FixedOffset};

/// Binds a team/channel/user triple to a workplace.
pub struct SubscribeLogic;

impl SubscribeLogic {
    pub fn apply(
        pool: &mut DbPool,
        team_id: &str,
        channel_id: &str,
        user_id: &str,
        workplace: &str,
        now: &DateTime<FixedOffset>,
    ) -> AppResult<WorkplaceBinding> {
        require_identity(team_id, channel_id, user_id)?;

        let workplace = workplace.trim();
        if workplace.is_empty() {
            return Err(AppError::InvalidInput("Workplace name is required.".into()));
        }

        if find_binding(&pool.conn, team_id, channel_id, user_id)?.is_some() {
            return Err(AppError::AlreadySubscribed);
        }

        let binding = WorkplaceBinding::new(
            new_id(),
            team_id,
            channel_id,
            user_id,
            workplace,
            &format_timestamp(now),
        );

        insert_binding(&pool.conn, &binding)?;

        Ok(binding)
    }
}
