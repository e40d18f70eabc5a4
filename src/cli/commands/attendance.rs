use crate::cli::commands::{event_time, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::transition::TransitionLogic;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::action::Action;
use crate::ui::messages::{info, success};
use crate::utils::colors::{RESET, color_for_status, colorize_action};

/// `start` and `end`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (who, at, action) = match cmd {
        Commands::Start { who, at } => (who, at, Action::Start),
        Commands::End { who, at } => (who, at, Action::End),
        _ => return Ok(()),
    };

    let mut pool = open_pool(cfg)?;
    let now = event_time(cfg, at)?;

    let entry = TransitionLogic::record(&mut pool, &who.team, &who.channel, &who.user, action, &now)?;

    ttlog_quiet(
        &pool.conn,
        action.to_db_str(),
        &entry.id,
        &format!("{} at {}", entry.workplace_name, entry.timestamp),
    );

    success(format!(
        "{}: {} ({})",
        entry.workplace_name,
        action.label(),
        now.format("%Y-%m-%d %H:%M")
    ));
    info(format!("Entry id: {}", entry.id));

    Ok(())
}

pub fn handle_status(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { who } = cmd {
        let tz = cfg.tz()?;
        let mut pool = open_pool(cfg)?;
        let (binding, latest) =
            TransitionLogic::status(&mut pool, &who.team, &who.channel, &who.user)?;

        println!("Workplace : {}", binding.workplace);
        println!(
            "Status    : {}{}{}",
            color_for_status(binding.status),
            binding.status.describe(),
            RESET
        );

        match latest {
            Some(e) => {
                let at = e
                    .parsed_timestamp()
                    .map(|dt| dt.with_timezone(&tz).format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|_| e.timestamp.clone());
                println!("Latest    : {} {} ({})", colorize_action(e.action), at, e.id);
            }
            None => println!("Latest    : --"),
        }
    }

    Ok(())
}
