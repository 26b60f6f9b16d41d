//! mf - Missing Finder CLI
//!
//! Files reports and browses records through the Supabase gateway. Every
//! command prints a single JSON document on stdout; logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Browse found persons against the seed data
//! mf --demo list missing-persons --status found --pretty
//!
//! # Report a sighting
//! mf report sighting --date 2024-01-01 --time 09:00 --location "Main St" \
//!     --description "Seen walking" --contact-info a@b.com
//!
//! # Sign in, then check who is signed in
//! mf login --email jane@example.com --password hunter22
//! mf whoami
//! ```

use mf_cli::cli::Cli;
use mf_cli::{CliResult, Runner, logger, session_file};
use mf_config::Config;
use mf_gateway::{AuthContext, Gateway, MemoryGateway, SupabaseGateway};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::warn;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let mut config = Config::load()?;
    if let Some(url) = cli.gateway {
        config.gateway.url = url;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    let session_dir: PathBuf = Config::config_dir()?;
    let stored = session_file::load(&session_dir)?;
    if let Some(error) = stored.corruption_error {
        warn!("Ignoring unreadable session file: {error}");
    }
    let auth = match stored.session {
        Some(session) => AuthContext::with_session(session),
        None => AuthContext::new(),
    };

    let memory;
    let supabase;
    let (gateway, label): (&dyn Gateway, String) = if cli.demo {
        memory = MemoryGateway::with_seed();
        (&memory, "demo".to_string())
    } else {
        supabase = SupabaseGateway::from_config(&config.gateway, auth.clone());
        (&supabase, config.gateway.url.clone())
    };

    let mut runner = Runner::new(&config, gateway, label, auth, session_dir);
    let output = runner.run(cli.command).await?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);

    Ok(())
}
