use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rattendance
/// Attendance tracker for Slack workspaces, backed by SQLite
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in/out per Slack channel and workplace, and report monthly worked hours",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Chat identity every attendance command is scoped to.
#[derive(Args, Debug, Clone)]
pub struct Identity {
    /// Slack team (workspace) id
    #[arg(long = "team")]
    pub team: String,

    /// Slack channel id
    #[arg(long = "channel")]
    pub channel: String,

    /// Slack user id
    #[arg(long = "user")]
    pub user: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Bind a team/channel/user to a workplace
    Subscribe {
        #[command(flatten)]
        who: Identity,

        /// Workplace name
        workplace: String,
    },

    /// Clock in
    Start {
        #[command(flatten)]
        who: Identity,

        #[arg(long = "at", help = "Record at this time instead of now (YYYY-MM-DD HH:MM)")]
        at: Option<String>,
    },

    /// Clock out
    End {
        #[command(flatten)]
        who: Identity,

        #[arg(long = "at", help = "Record at this time instead of now (YYYY-MM-DD HH:MM)")]
        at: Option<String>,
    },

    /// Show the current attendance status
    Status {
        #[command(flatten)]
        who: Identity,
    },

    /// List the entries of a month with their ids
    List {
        #[command(flatten)]
        who: Identity,

        #[arg(long, short, help = "Month as YYYYMM (default: current month)")]
        month: Option<String>,
    },

    /// Monthly worked-hours report
    Report {
        #[command(flatten)]
        who: Identity,

        #[arg(long, short, help = "Month as YYYYMM (default: current month)")]
        month: Option<String>,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },

    /// Change the timestamp of one entry
    Edit {
        /// Entry id (see `list`)
        id: String,

        /// New time, YYYY-MM-DD HH:MM
        datetime: String,
    },

    /// Delete one entry
    Del {
        /// Entry id (see `list`)
        id: String,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Run a Slack slash command and print the bot reply
    Slash {
        #[command(flatten)]
        who: Identity,

        /// Command name, e.g. /start-work
        command: String,

        /// Command text (workplace name, YYYYMM, ...)
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,

        #[arg(long = "json", help = "Print the reply as a Slack message payload")]
        json: bool,
    },
}
