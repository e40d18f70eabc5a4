use crate::db::entries::rebuild_all_statuses;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::time::{format_timestamp, parse_stored_timestamp};
use rusqlite::{Connection, OptionalExtension};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `workplace_bindings` table (including `status`).
fn create_bindings_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS workplace_bindings (
            id            TEXT PRIMARY KEY,
            team_id       TEXT NOT NULL,
            channel_id    TEXT NOT NULL,
            user_id       TEXT NOT NULL,
            workplace     TEXT NOT NULL,
            composite_key TEXT NOT NULL,
            status        TEXT NOT NULL DEFAULT 'none' CHECK(status IN ('none','started','ended')),
            created_at    TEXT NOT NULL,
            updated_at    TEXT NOT NULL,
            deleted_at    TEXT
        );
        "#,
    )?;
    Ok(())
}

/// Create the `attendance_logs` table.
fn create_entries_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance_logs (
            id           TEXT PRIMARY KEY,
            team_id      TEXT NOT NULL,
            user_id      TEXT NOT NULL,
            channel_id   TEXT NOT NULL,
            workplace_id TEXT NOT NULL REFERENCES workplace_bindings(id),
            action       TEXT NOT NULL,
            timestamp    TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn ensure_indexes(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_bindings_active_key
            ON workplace_bindings(composite_key) WHERE deleted_at IS NULL;
        CREATE INDEX IF NOT EXISTS idx_logs_workplace_timestamp
            ON attendance_logs(workplace_id, timestamp);
        "#,
    )?;
    Ok(())
}

/// Bindings created before the status column existed: add it, statuses are
/// rebuilt from the log afterwards.
fn migrate_add_status_to_bindings(conn: &Connection) -> AppResult<bool> {
    let version = "20250610_0002_binding_status";

    if column_exists(conn, "workplace_bindings", "status")? {
        return Ok(false);
    }

    warning("Adding 'status' column to workplace_bindings table...");

    conn.execute(
        "ALTER TABLE workplace_bindings
         ADD COLUMN status TEXT NOT NULL DEFAULT 'none'
         CHECK(status IN ('none','started','ended'));",
        [],
    )
    .map_err(|e| AppError::Migration(format!("Failed to add 'status' column: {}", e)))?;

    mark_applied(conn, version, "Added status column to workplace_bindings")?;
    success(format!("Migration applied: {}", version));
    Ok(true)
}

/// Rewrite the early `checkin`/`checkout` action names to `start`/`end`.
fn migrate_normalize_legacy_actions(conn: &Connection) -> AppResult<bool> {
    let version = "20250610_0003_normalize_legacy_actions";

    let changed = conn.execute(
        "UPDATE attendance_logs
         SET action = CASE action WHEN 'checkin' THEN 'start' ELSE 'end' END
         WHERE action IN ('checkin', 'checkout')",
        [],
    )?;

    if changed == 0 {
        return Ok(false);
    }

    if !migration_applied(conn, version)? {
        mark_applied(conn, version, "Renamed checkin/checkout actions to start/end")?;
    }
    success(format!(
        "Migration applied: {} → {} legacy action(s) normalized",
        version, changed
    ));
    Ok(true)
}

/// Rewrite entry timestamps into the UTC stored layout (legacy layouts and
/// rows written with another offset). Unparsable rows are left untouched.
fn migrate_normalize_timestamps(conn: &Connection) -> AppResult<bool> {
    let version = "20250610_0004_normalize_timestamps";

    let rows: Vec<(String, String)> = {
        let mut stmt = conn.prepare("SELECT id, timestamp FROM attendance_logs")?;
        let mapped = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        mapped.collect::<rusqlite::Result<_>>()?
    };

    let mut changed = 0;
    for (id, raw) in rows {
        let Ok(dt) = parse_stored_timestamp(&raw) else {
            warning(format!("Unparsable timestamp left as-is: {} ({})", raw, id));
            continue;
        };

        let normalized = format_timestamp(&dt);
        if normalized != raw {
            conn.execute(
                "UPDATE attendance_logs SET timestamp = ?1 WHERE id = ?2",
                [&normalized, &id],
            )?;
            changed += 1;
        }
    }

    if changed == 0 {
        return Ok(false);
    }

    if !migration_applied(conn, version)? {
        mark_applied(conn, version, "Normalized entry timestamps to UTC")?;
    }
    success(format!(
        "Migration applied: {} → {} timestamp(s) normalized",
        version, changed
    ));
    Ok(true)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create missing tables (modern schema)
    let bindings_exist = table_exists(conn, "workplace_bindings")?;
    if !bindings_exist {
        create_bindings_table(conn)?;
        success("Created workplace_bindings table.");
    }

    if !table_exists(conn, "attendance_logs")? {
        create_entries_table(conn)?;
        success("Created attendance_logs table.");
    }

    // 3) Upgrade older layouts
    let mut needs_status_rebuild = false;
    if bindings_exist {
        needs_status_rebuild |= migrate_add_status_to_bindings(conn)?;
    }
    needs_status_rebuild |= migrate_normalize_legacy_actions(conn)?;
    needs_status_rebuild |= migrate_normalize_timestamps(conn)?;

    ensure_indexes(conn)?;

    // 4) Align binding status with the latest entry of each workplace
    if needs_status_rebuild {
        let n = rebuild_all_statuses(conn)?;
        success(format!("Rebuilt attendance status for {} binding(s).", n));
    }

    Ok(())
}
