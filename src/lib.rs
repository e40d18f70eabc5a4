//! rattendance library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cmd = &cli.command;
    match cmd {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(cmd, cfg),
        Commands::Db { .. } => commands::db::handle(cmd, cfg),
        Commands::Log { .. } => commands::log::handle(cmd, cfg),
        Commands::Subscribe { .. } => commands::subscribe::handle(cmd, cfg),
        Commands::Start { .. } | Commands::End { .. } => commands::attendance::handle(cmd, cfg),
        Commands::Status { .. } => commands::attendance::handle_status(cmd, cfg),
        Commands::List { .. } => commands::list::handle(cmd, cfg),
        Commands::Report { .. } => commands::report::handle(cmd, cfg),
        Commands::Edit { .. } => commands::edit::handle(cmd, cfg),
        Commands::Del { .. } => commands::del::handle(cmd, cfg),
        Commands::Slash { .. } => commands::slash::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and shared by every handler
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
