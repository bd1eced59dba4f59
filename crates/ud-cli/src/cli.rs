use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ud")]
#[command(about = "User directory admin console")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (overrides the configured base URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Debug-level logging regardless of configuration
    #[arg(long, global = true)]
    pub verbose: bool,
}
