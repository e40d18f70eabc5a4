use super::action::Action;
use super::entry::AttendanceLog;
use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Attendance status of a workplace binding.
///
/// Persisted on the binding row and kept equal to what the latest log entry
/// implies: no entry → `NoHistory`, latest `start` → `Started`, latest `end` → `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttendanceStatus {
    NoHistory,
    Started,
    Ended,
}

impl AttendanceStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AttendanceStatus::NoHistory => "none",
            AttendanceStatus::Started => "started",
            AttendanceStatus::Ended => "ended",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(AttendanceStatus::NoHistory),
            "started" => Some(AttendanceStatus::Started),
            "ended" => Some(AttendanceStatus::Ended),
            _ => None,
        }
    }

    pub fn from_latest(latest: Option<&AttendanceLog>) -> Self {
        match latest.map(|e| e.action) {
            None => AttendanceStatus::NoHistory,
            Some(Action::Start) => AttendanceStatus::Started,
            Some(Action::End) => AttendanceStatus::Ended,
        }
    }

    /// Transition table. Returns the status reached by `action`, or the
    /// conflict that forbids it.
    pub fn apply(self, action: Action) -> AppResult<Self> {
        match (self, action) {
            (AttendanceStatus::NoHistory | AttendanceStatus::Ended, Action::Start) => {
                Ok(AttendanceStatus::Started)
            }
            (AttendanceStatus::Started, Action::Start) => Err(AppError::AlreadyStarted),
            (AttendanceStatus::Started, Action::End) => Ok(AttendanceStatus::Ended),
            (AttendanceStatus::NoHistory, Action::End) => Err(AppError::NoPriorStart),
            (AttendanceStatus::Ended, Action::End) => Err(AppError::AlreadyEnded),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            AttendanceStatus::NoHistory => "no records yet",
            AttendanceStatus::Started => "working",
            AttendanceStatus::Ended => "off duty",
        }
    }
}
