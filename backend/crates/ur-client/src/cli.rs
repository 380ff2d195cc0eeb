use crate::commands::Commands;

use ur_config::LogLevel;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ur")]
#[command(about = "User registry client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL
    #[arg(long, global = true, default_value = "http://localhost:8080")]
    pub(crate) server: String,

    /// Log level for diagnostics on stderr
    #[arg(long, global = true, default_value = "warn")]
    pub(crate) log_level: LogLevel,
}
