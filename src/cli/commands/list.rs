use crate::cli::commands::{event_time, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::models::entry::AttendanceLog;
use crate::utils::date::YearMonth;
use crate::utils::table::Table;
use chrono::FixedOffset;

/// Entry time in the reporting timezone; damaged rows show their raw text.
fn local_time(e: &AttendanceLog, tz: FixedOffset) -> String {
    e.parsed_timestamp()
        .map(|dt| dt.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| e.timestamp.clone())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { who, month } = cmd {
        let tz = cfg.tz()?;
        let now = event_time(cfg, &None)?;
        let month = YearMonth::resolve(month.as_deref(), &now)?;

        let mut pool = open_pool(cfg)?;
        let entries =
            ReportLogic::entries(&mut pool, &who.team, &who.channel, &who.user, month, tz)?;

        if entries.is_empty() {
            println!("No entries for {}", month);
            return Ok(());
        }

        println!("📅 Entries for {} ({}):\n", month, entries[0].workplace_name);

        let mut table = Table::new(&["ID", "TIMESTAMP", "ACTION"]);
        for e in &entries {
            table.add_row(vec![
                e.id.clone(),
                local_time(e, tz),
                e.action.to_db_str().to_string(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
