#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, FixedOffset, TimeZone};
use rattendance::db::initialize::init_db;
use rattendance::db::pool::DbPool;
use rattendance::models::action::Action;
use rattendance::models::entry::AttendanceLog;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const TEAM: &str = "T001";
pub const CHANNEL: &str = "C001";
pub const USER: &str = "U001";

pub fn rti() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a DB file through the CLI and bind the default identity to `workplace`
pub fn init_db_with_binding(db_path: &str, workplace: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rti()
        .args(["--db", db_path, "subscribe"])
        .args(identity_args())
        .arg(workplace)
        .assert()
        .success();
}

pub fn identity_args() -> [&'static str; 6] {
    ["--team", TEAM, "--channel", CHANNEL, "--user", USER]
}

/// Fresh in-memory store with the full schema
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init schema");
    pool
}

pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).unwrap()
}

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<FixedOffset> {
    jst().with_ymd_and_hms(y, mo, d, h, mi, 0).single().unwrap()
}

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap()
}

/// Log entry with only the fields the aggregation reads filled in
pub fn entry(id: &str, action: Action, timestamp: &str) -> AttendanceLog {
    AttendanceLog {
        id: id.to_string(),
        team_id: TEAM.to_string(),
        user_id: USER.to_string(),
        channel_id: CHANNEL.to_string(),
        workplace_id: "wp".to_string(),
        workplace_name: "本社".to_string(),
        action,
        timestamp: timestamp.to_string(),
    }
}
