use crate::errors::{AppError, AppResult};
use crate::models::binding::{WorkplaceBinding, composite_key};
use crate::models::status::AttendanceStatus;
use rusqlite::{Connection, ErrorCode, OptionalExtension, Result, Row, params};

const SELECT_BINDING: &str = "SELECT id, team_id, channel_id, user_id, workplace, composite_key,
        status, created_at, updated_at, deleted_at
 FROM workplace_bindings";

pub fn map_binding_row(row: &Row) -> Result<WorkplaceBinding> {
    let status_str: String = row.get("status")?;
    let status = AttendanceStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidInput(format!(
                "Invalid binding status: {}",
                status_str
            ))),
        )
    })?;

    Ok(WorkplaceBinding {
        id: row.get("id")?,
        team_id: row.get("team_id")?,
        channel_id: row.get("channel_id")?,
        user_id: row.get("user_id")?,
        workplace: row.get("workplace")?,
        composite_key: row.get("composite_key")?,
        status,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        deleted_at: row.get("deleted_at")?,
    })
}

/// Active binding of a (team, channel, user) triple, if any.
///
/// "Not found" is `Ok(None)`; every `Err` is a real store failure.
pub fn find_binding(
    conn: &Connection,
    team_id: &str,
    channel_id: &str,
    user_id: &str,
) -> AppResult<Option<WorkplaceBinding>> {
    let key = composite_key(team_id, channel_id, user_id);
    let mut stmt = conn.prepare_cached(&format!(
        "{SELECT_BINDING} WHERE composite_key = ?1 AND deleted_at IS NULL LIMIT 1"
    ))?;

    Ok(stmt.query_row([key], map_binding_row).optional()?)
}

pub fn list_active_binding_ids(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt =
        conn.prepare("SELECT id FROM workplace_bindings WHERE deleted_at IS NULL ORDER BY id")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new binding. The partial unique index on `composite_key`
/// turns a duplicate active triple into `AlreadySubscribed`.
pub fn insert_binding(conn: &Connection, b: &WorkplaceBinding) -> AppResult<()> {
    let res = conn.execute(
        "INSERT INTO workplace_bindings
            (id, team_id, channel_id, user_id, workplace, composite_key, status, created_at, updated_at, deleted_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            b.id,
            b.team_id,
            b.channel_id,
            b.user_id,
            b.workplace,
            b.composite_key,
            b.status.to_db_str(),
            b.created_at,
            b.updated_at,
            b.deleted_at,
        ],
    );

    match res {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            Err(AppError::AlreadySubscribed)
        }
        Err(e) => Err(e.into()),
    }
}

/// Compare-and-swap on the binding status.
/// Returns false when the stored status was no longer `expected`.
pub fn update_status_if(
    conn: &Connection,
    id: &str,
    expected: AttendanceStatus,
    new: AttendanceStatus,
    updated_at: &str,
) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE workplace_bindings
         SET status = ?1, updated_at = ?2
         WHERE id = ?3 AND status = ?4 AND deleted_at IS NULL",
        params![new.to_db_str(), updated_at, id, expected.to_db_str()],
    )?;
    Ok(changed == 1)
}

pub fn set_status(
    conn: &Connection,
    id: &str,
    status: AttendanceStatus,
    updated_at: &str,
) -> AppResult<()> {
    conn.execute(
        "UPDATE workplace_bindings SET status = ?1, updated_at = ?2 WHERE id = ?3",
        params![status.to_db_str(), updated_at, id],
    )?;
    Ok(())
}
