pub mod calculator;
pub mod config;
pub mod edit;
pub mod log;
pub mod report;
pub mod slash;
pub mod subscribe;
pub mod transition;

use crate::errors::{AppError, AppResult};
use crate::models::binding::COMPOSITE_KEY_SEPARATOR;

/// Every operation trusts the caller-supplied identifiers, but they must be
/// present and free of the composite key separator.
pub(crate) fn require_identity(team_id: &str, channel_id: &str, user_id: &str) -> AppResult<()> {
    for (name, value) in [
        ("team_id", team_id),
        ("channel_id", channel_id),
        ("user_id", user_id),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::InvalidInput(format!("{} is required", name)));
        }
        // the separator would make composite keys ambiguous
        if value.contains(COMPOSITE_KEY_SEPARATOR) {
            return Err(AppError::InvalidInput(format!(
                "{} must not contain '{}'",
                name, COMPOSITE_KEY_SEPARATOR
            )));
        }
    }
    Ok(())
}
