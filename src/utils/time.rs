//! Time utilities: stored timestamp format, timezone offsets, duration parts.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Fixed-width RFC 3339 layout, always written in UTC: lexical order of
/// stored rows is chronological order.
pub const STORED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.9f%:z";

/// Input layout for manual corrections.
pub const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

// Legacy rows look like "2025-05-01 09:00:00.123 +0900 JST m=+0.000123".
static MONOTONIC_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" m=[+-].*$").expect("valid monotonic regex"));
static LEGACY_LAYOUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}(?:\.\d+)? [+-]\d{4})(?: [A-Za-z0-9+-]+)?$")
        .expect("valid legacy layout regex")
});

/// Stored form of an instant, normalised to `+00:00` whatever the input offset.
pub fn format_timestamp(dt: &DateTime<FixedOffset>) -> String {
    dt.with_timezone(&Utc).fixed_offset().format(STORED_FORMAT).to_string()
}

pub fn now_in(tz: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&tz)
}

/// Parse a timestamp as stored in `attendance_logs.timestamp`.
pub fn parse_stored_timestamp(raw: &str) -> AppResult<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt);
    }

    let cleaned = MONOTONIC_SUFFIX.replace(trimmed, "");
    let caps = LEGACY_LAYOUT
        .captures(&cleaned)
        .ok_or_else(|| AppError::TimestampParse {
            value: raw.to_string(),
            reason: "unrecognized timestamp layout".into(),
        })?;

    DateTime::parse_from_str(&caps[1], "%Y-%m-%d %H:%M:%S%.f %z").map_err(|e| {
        AppError::TimestampParse {
            value: raw.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Parse a `YYYY-MM-DD HH:MM` wall-clock time in the given offset.
pub fn parse_input_datetime(s: &str, tz: FixedOffset) -> AppResult<DateTime<FixedOffset>> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), INPUT_FORMAT).map_err(|_| {
        AppError::InvalidInput("時刻の形式が不正です。形式: YYYY-MM-DD HH:MM".into())
    })?;

    naive
        .and_local_timezone(tz)
        .single()
        .ok_or_else(|| AppError::InvalidInput(format!("Ambiguous local time: {}", s)))
}

/// Parse a UTC offset such as `+09:00`, `+0900`, `-05:30` or `UTC`.
pub fn parse_offset(s: &str) -> AppResult<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("utc") || s == "Z" {
        return FixedOffset::east_opt(0).ok_or_else(|| AppError::Config(s.to_string()));
    }

    let invalid = || AppError::Config(format!("Invalid timezone offset: {}", s));

    let (sign, rest) = match s.chars().next() {
        Some('+') => (1, &s[1..]),
        Some('-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i32 = digits[..2].parse().map_err(|_| invalid())?;
    let minutes: i32 = digits[2..].parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Whole hours and the remaining whole minutes of a duration (truncated).
pub fn hours_minutes(d: TimeDelta) -> (i64, i64) {
    (d.num_hours(), d.num_minutes() % 60)
}

/// Fractional hours at full (sub-second) precision.
pub fn fractional_hours(d: TimeDelta) -> f64 {
    match d.num_nanoseconds() {
        Some(ns) => ns as f64 / 3_600_000_000_000.0,
        None => d.num_seconds() as f64 / 3_600.0,
    }
}
