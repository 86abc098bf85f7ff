use clap::Parser;
use std::env;
use std::path::PathBuf;

use crate::cli::command::Command;
use crate::configuration::{DEFAULT_ACTIVITY_LIMIT, DEFAULT_ROOM_CAPACITY};
use crate::render::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Student housing administration console",
    long_about = "Manage the student roster, maintenance requests, document uploads and feedback from one console.\n\nWithout a subcommand, commands are read line by line from --script or stdin until `exit`.",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    #[arg(
        long = "log-file",
        env = "DORMDESK_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Read session commands from FILE instead of stdin"
    )]
    pub script: Option<PathBuf>,

    #[arg(
        long,
        env = "DORMDESK_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "How lists and the dashboard are printed"
    )]
    pub format: OutputFormat,

    #[arg(
        long,
        env = "DORMDESK_CAPACITY",
        default_value_t = DEFAULT_ROOM_CAPACITY,
        value_name = "ROOMS",
        help = "Number of rooms used for the dashboard occupancy rate"
    )]
    pub capacity: u32,

    #[arg(
        long,
        default_value_t = DEFAULT_ACTIVITY_LIMIT,
        value_name = "N",
        help = "Recent activity entries kept for the dashboard"
    )]
    pub activity_limit: usize,

    #[arg(
        long,
        default_value_t = false,
        help = "Start with empty pages instead of the mock records"
    )]
    pub empty: bool,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    match dotenvy::from_filename(&dotenv_path) {
        Ok(_) => log::debug!("loaded env from {}", dotenv_path),
        Err(err) => log::debug!("no env file at {}: {}", dotenv_path, err),
    }
    Cli::parse()
}
