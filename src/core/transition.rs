use crate::core::require_identity;
use crate::db::bindings::{find_binding, update_status_if};
use crate::db::entries::{find_latest_entry, insert_entry};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::binding::WorkplaceBinding;
use crate::models::entry::AttendanceLog;
use crate::utils::id::new_id;
use crate::utils::time::format_timestamp;
use chrono::{DateTime, FixedOffset};
use rusqlite::TransactionBehavior;

/// Start/end state machine, scoped per workplace binding.
pub struct TransitionLogic;

impl TransitionLogic {
    /// Record a start or end event for the binding of (team, channel, user).
    ///
    /// The binding status is read and swapped inside one `BEGIN IMMEDIATE`
    /// transaction together with the entry insert: either both land or
    /// nothing does, and a concurrent writer cannot slip in between.
    pub fn record(
        pool: &mut DbPool,
        team_id: &str,
        channel_id: &str,
        user_id: &str,
        action: Action,
        now: &DateTime<FixedOffset>,
    ) -> AppResult<AttendanceLog> {
        require_identity(team_id, channel_id, user_id)?;

        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let binding = find_binding(&tx, team_id, channel_id, user_id)?
            .ok_or(AppError::BindingNotFound)?;

        let current = binding.status;
        let next = current.apply(action)?;

        // Backfilled events must not land before the latest one, otherwise
        // the stored status would disagree with the log. A damaged latest
        // row blocks the transition until it is edited or deleted.
        if let Some(latest) = find_latest_entry(&tx, &binding.id)? {
            let latest_at = latest.parsed_timestamp()?;
            if *now < latest_at {
                return Err(AppError::InvalidInput(format!(
                    "Cannot record {} before the latest entry ({}).",
                    action.to_db_str(),
                    latest.timestamp
                )));
            }
        }

        let timestamp = format_timestamp(now);
        let entry = AttendanceLog {
            id: new_id(),
            team_id: team_id.to_string(),
            user_id: binding.user_id.clone(),
            channel_id: binding.channel_id.clone(),
            workplace_id: binding.id.clone(),
            workplace_name: binding.workplace.clone(),
            action,
            timestamp: timestamp.clone(),
        };

        if !update_status_if(&tx, &binding.id, current, next, &timestamp)? {
            return Err(AppError::ConcurrentUpdate);
        }
        insert_entry(&tx, &entry)?;

        tx.commit()?;

        Ok(entry)
    }

    pub fn start(
        pool: &mut DbPool,
        team_id: &str,
        channel_id: &str,
        user_id: &str,
        now: &DateTime<FixedOffset>,
    ) -> AppResult<AttendanceLog> {
        Self::record(pool, team_id, channel_id, user_id, Action::Start, now)
    }

    pub fn end(
        pool: &mut DbPool,
        team_id: &str,
        channel_id: &str,
        user_id: &str,
        now: &DateTime<FixedOffset>,
    ) -> AppResult<AttendanceLog> {
        Self::record(pool, team_id, channel_id, user_id, Action::End, now)
    }

    /// Binding and latest entry of (team, channel, user).
    pub fn status(
        pool: &mut DbPool,
        team_id: &str,
        channel_id: &str,
        user_id: &str,
    ) -> AppResult<(WorkplaceBinding, Option<AttendanceLog>)> {
        let binding = find_binding(&pool.conn, team_id, channel_id, user_id)?
            .ok_or(AppError::BindingNotFound)?;
        let latest = find_latest_entry(&pool.conn, &binding.id)?;
        Ok((binding, latest))
    }
}
