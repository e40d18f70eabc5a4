use crate::cli::commands::{event_time, open_pool, report_style};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::slash::{SlashLogic, SlashRequest};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Slash {
        who,
        command,
        text,
        json,
    } = cmd
    {
        let now = event_time(cfg, &None)?;
        let style = report_style(cfg)?;
        let text = text.join(" ");

        let mut pool = open_pool(cfg)?;
        let req = SlashRequest {
            team_id: &who.team,
            channel_id: &who.channel,
            user_id: &who.user,
            command,
            text: &text,
        };

        let reply = SlashLogic::respond(&mut pool, &req, &now, &style);

        if *json {
            println!("{}", serde_json::to_string(&reply)?);
        } else {
            println!("{}", reply.text);
        }
    }

    Ok(())
}
