use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;
use std::path::Path;

fn count(pool: &DbPool, sql: &str) -> AppResult<i64> {
    Ok(pool.conn.query_row(sql, [], |row| row.get(0))?)
}

pub fn print_db_info(pool: &mut DbPool, db_path: &Path) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!(
        "{}• File:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        db_path.display(),
        RESET
    );
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    let bindings = count(
        pool,
        "SELECT COUNT(*) FROM workplace_bindings WHERE deleted_at IS NULL",
    )?;
    let working = count(
        pool,
        "SELECT COUNT(*) FROM workplace_bindings WHERE deleted_at IS NULL AND status = 'started'",
    )?;
    let entries = count(pool, "SELECT COUNT(*) FROM attendance_logs")?;

    println!(
        "{}• Workplace bindings:{} {}{}{} ({} working now)",
        CYAN, RESET, GREEN, bindings, RESET, working
    );
    println!(
        "{}• Attendance entries:{} {}{}{}",
        CYAN, RESET, GREEN, entries, RESET
    );

    //
    // 3) DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT substr(timestamp, 1, 10) FROM attendance_logs ORDER BY timestamp ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT substr(timestamp, 1, 10) FROM attendance_logs ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
