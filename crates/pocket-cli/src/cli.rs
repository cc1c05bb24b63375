use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pocket")]
#[command(about = "Local sign-up and login shell backed by on-device storage")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
