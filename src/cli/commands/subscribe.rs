use crate::cli::commands::{event_time, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::subscribe::SubscribeLogic;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Subscribe { who, workplace } = cmd {
        let mut pool = open_pool(cfg)?;
        let now = event_time(cfg, &None)?;

        let binding = SubscribeLogic::apply(
            &mut pool,
            &who.team,
            &who.channel,
            &who.user,
            workplace,
            &now,
        )?;

        ttlog_quiet(
            &pool.conn,
            "subscribe",
            &binding.composite_key,
            &format!("Bound to workplace '{}' ({})", binding.workplace, binding.id),
        );

        success(format!("職場登録完了: {}", binding.workplace));
    }

    Ok(())
}
