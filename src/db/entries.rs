use crate::db::bindings::{list_active_binding_ids, set_status};
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::entry::AttendanceLog;
use crate::models::status::AttendanceStatus;
use crate::utils::time::format_timestamp;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// workplace_name comes from the binding; entries only store the id.
const SELECT_ENTRY: &str = "SELECT l.id, l.team_id, l.user_id, l.channel_id, l.workplace_id,
        COALESCE(b.workplace, '') AS workplace_name, l.action, l.timestamp
 FROM attendance_logs l
 LEFT JOIN workplace_bindings b ON b.id = l.workplace_id";

pub fn map_entry_row(row: &Row) -> Result<AttendanceLog> {
    let action_str: String = row.get("action")?;
    let action = Action::from_db_str(&action_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidAction(action_str.clone())),
        )
    })?;

    Ok(AttendanceLog {
        id: row.get("id")?,
        team_id: row.get("team_id")?,
        user_id: row.get("user_id")?,
        channel_id: row.get("channel_id")?,
        workplace_id: row.get("workplace_id")?,
        workplace_name: row.get("workplace_name")?,
        action,
        timestamp: row.get("timestamp")?,
    })
}

/// Most recent entry of a workplace (timestamp desc, id desc as tie-break).
/// Rows are stored in UTC, so text order is instant order.
pub fn find_latest_entry(conn: &Connection, workplace_id: &str) -> AppResult<Option<AttendanceLog>> {
    let mut stmt = conn.prepare_cached(&format!(
        "{SELECT_ENTRY} WHERE l.workplace_id = ?1 ORDER BY l.timestamp DESC, l.id DESC LIMIT 1"
    ))?;
    Ok(stmt.query_row([workplace_id], map_entry_row).optional()?)
}

/// Entries of a workplace with `from <= timestamp < to`.
/// Bounds are stored-format strings (see `YearMonth::stored_range`).
pub fn find_entries(
    conn: &Connection,
    workplace_id: &str,
    from: &str,
    to: &str,
) -> AppResult<Vec<AttendanceLog>> {
    let mut stmt = conn.prepare_cached(&format!(
        "{SELECT_ENTRY}
         WHERE l.workplace_id = ?1 AND l.timestamp >= ?2 AND l.timestamp < ?3
         ORDER BY l.timestamp ASC, l.id ASC"
    ))?;

    let rows = stmt.query_map(params![workplace_id, from, to], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_entry(conn: &Connection, id: &str) -> AppResult<Option<AttendanceLog>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_ENTRY} WHERE l.id = ?1"))?;
    Ok(stmt.query_row([id], map_entry_row).optional()?)
}

/// Workplace id of an entry, read without decoding the rest of the row.
pub fn entry_workplace_id(conn: &Connection, id: &str) -> AppResult<Option<String>> {
    Ok(conn
        .query_row(
            "SELECT workplace_id FROM attendance_logs WHERE id = ?1",
            [id],
            |row| row.get(0),
        )
        .optional()?)
}

pub fn insert_entry(conn: &Connection, e: &AttendanceLog) -> AppResult<()> {
    conn.execute(
        "INSERT INTO attendance_logs (id, team_id, user_id, channel_id, workplace_id, action, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            e.id,
            e.team_id,
            e.user_id,
            e.channel_id,
            e.workplace_id,
            e.action.to_db_str(),
            e.timestamp,
        ],
    )?;
    Ok(())
}

/// Overwrite the timestamp of one entry. Returns the number of rows changed.
pub fn update_entry_timestamp(conn: &Connection, id: &str, timestamp: &str) -> AppResult<usize> {
    Ok(conn.execute(
        "UPDATE attendance_logs SET timestamp = ?1 WHERE id = ?2",
        params![timestamp, id],
    )?)
}

pub fn delete_entry(conn: &Connection, id: &str) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM attendance_logs WHERE id = ?1", [id])?)
}

/// Recompute a binding's status from its latest entry and store it.
pub fn sync_binding_status(
    conn: &Connection,
    workplace_id: &str,
    updated_at: &str,
) -> AppResult<AttendanceStatus> {
    let latest = find_latest_entry(conn, workplace_id)?;
    let status = AttendanceStatus::from_latest(latest.as_ref());
    set_status(conn, workplace_id, status, updated_at)?;
    Ok(status)
}

pub fn rebuild_all_statuses(conn: &Connection) -> AppResult<usize> {
    let now = format_timestamp(&Utc::now().fixed_offset());
    let ids = list_active_binding_ids(conn)?;
    for id in &ids {
        sync_binding_status(conn, id, &now)?;
    }
    Ok(ids.len())
}
