use crate::cli::commands::{event_time, open_pool, report_style};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::utils::date::YearMonth;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { who, month, json } = cmd {
        let now = event_time(cfg, &None)?;
        let month = YearMonth::resolve(month.as_deref(), &now)?;
        let style = report_style(cfg)?;

        let mut pool = open_pool(cfg)?;
        let report =
            ReportLogic::monthly(&mut pool, &who.team, &who.channel, &who.user, month, &style)?;

        if *json || cfg.default_report_format.eq_ignore_ascii_case("json") {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else if report.attendance_logs.is_empty() {
            println!("{}", report.message);
        } else {
            print!("{}", report.formatted_data);
        }
    }

    Ok(())
}
