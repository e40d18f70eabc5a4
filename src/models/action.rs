use serde::{Deserialize, Serialize};

/// Kind of an attendance event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Start,
    End,
}

impl Action {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::End => "end",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "start" => Some(Action::Start),
            "end" => Some(Action::End),
            _ => None,
        }
    }

    /// Label shown in Slack replies and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Start => "出勤",
            Action::End => "退勤",
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, Action::Start)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Action::End)
    }
}
