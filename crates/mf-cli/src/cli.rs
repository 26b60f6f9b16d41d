use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "mf")]
#[command(about = "Missing Finder - report missing persons and sightings from the command line")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Gateway URL (overrides config and MF_GATEWAY_URL)
    #[arg(long, global = true)]
    pub gateway: Option<String>,

    /// Use an in-process gateway loaded with the seed records
    #[arg(long, global = true)]
    pub demo: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
