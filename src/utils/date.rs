use crate::errors::{AppError, AppResult};
use crate::utils::time::format_timestamp;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};
use std::fmt;

/// A calendar month, written `YYYYMM` on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(dt: &DateTime<FixedOffset>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
        }
    }

    /// `YYYYMM` → YearMonth.
    pub fn parse(s: &str) -> AppResult<Self> {
        let invalid = || AppError::InvalidInput("年月の形式が不正です。".into());

        if s.len() != 6 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = s[..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[4..].parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Self { year, month })
    }

    /// Empty or missing input means the month containing `now`.
    pub fn resolve(input: Option<&str>, now: &DateTime<FixedOffset>) -> AppResult<Self> {
        match input.map(str::trim) {
            None | Some("") => Ok(Self::of(now)),
            Some(s) => Self::parse(s),
        }
    }

    fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Midnight of the first day of the month, in `tz`.
    pub fn first_instant(&self, tz: FixedOffset) -> AppResult<DateTime<FixedOffset>> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .and_then(|dt| dt.and_local_timezone(tz).single())
            .ok_or_else(|| AppError::InvalidInput(format!("Invalid month: {}", self)))
    }

    /// Half-open range `[from, to)` of stored timestamps falling in this
    /// month as seen from `tz`.
    pub fn stored_range(&self, tz: FixedOffset) -> AppResult<(String, String)> {
        let from = self.first_instant(tz)?;
        let to = self.next().first_instant(tz)?;
        Ok((format_timestamp(&from), format_timestamp(&to)))
    }

    pub fn label(&self) -> String {
        format!("{}月", self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}
