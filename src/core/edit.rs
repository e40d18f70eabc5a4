use crate::db::entries::{
    delete_entry, entry_workplace_id, get_entry, sync_binding_status, update_entry_timestamp,
};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::AttendanceLog;
use crate::utils::time::format_timestamp;
use chrono::{DateTime, FixedOffset, Utc};

fn updated_at_now() -> String {
    format_timestamp(&Utc::now().fixed_offset())
}

/// Direct corrections of single log entries.
///
/// No check is made against neighbouring entries: an edit may break the
/// start/end alternation. The binding status is re-derived from whatever
/// entry ends up latest.
pub struct EditLogic;

impl EditLogic {
    pub fn update_timestamp(
        pool: &mut DbPool,
        id: &str,
        new_timestamp: &DateTime<FixedOffset>,
    ) -> AppResult<AttendanceLog> {
        let tx = pool.conn.transaction()?;

        let workplace_id =
            entry_workplace_id(&tx, id)?.ok_or_else(|| AppError::NotFound(id.to_string()))?;

        update_entry_timestamp(&tx, id, &format_timestamp(new_timestamp))?;
        sync_binding_status(&tx, &workplace_id, &updated_at_now())?;

        let updated = get_entry(&tx, id)?.ok_or_else(|| AppError::NotFound(id.to_string()))?;
        tx.commit()?;

        Ok(updated)
    }

    pub fn delete(pool: &mut DbPool, id: &str) -> AppResult<()> {
        let tx = pool.conn.transaction()?;

        let workplace_id =
            entry_workplace_id(&tx, id)?.ok_or_else(|| AppError::NotFound(id.to_string()))?;

        if delete_entry(&tx, id)? == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }

        sync_binding_status(&tx, &workplace_id, &updated_at_now())?;

        tx.commit()?;
        Ok(())
    }
}
