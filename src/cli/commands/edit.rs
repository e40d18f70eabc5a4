use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::parse_input_datetime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, datetime } = cmd {
        let new_time = parse_input_datetime(datetime, cfg.tz()?)?;

        let mut pool = open_pool(cfg)?;
        let updated = EditLogic::update_timestamp(&mut pool, id, &new_time)?;

        ttlog_quiet(
            &pool.conn,
            "edit",
            id,
            &format!("Timestamp set to {}", updated.timestamp),
        );

        success(format!(
            "勤怠記録を更新しました ID: {} 新しい時刻: {}",
            updated.id,
            new_time.format("%Y-%m-%d %H:%M")
        ));
    }

    Ok(())
}
