//! nexuscat - list Nexus Mods categories for Baldur's Gate 3
//!
//! Reads NEXUS_API_KEY, queries the categories endpoint (falling back to
//! the game details endpoint) and prints a tab-separated table.

use anyhow::{Context, Result};
use clap::Parser;
use nexus_common::config::{self, ApiConfig};
use nexus_common::HttpNexusClient;
use nexuscat::cli::Cli;
use nexuscat::errors::{EXIT_GENERAL_ERROR, EXIT_MISSING_CREDENTIAL};
use nexuscat::{logging, runner};
use std::io;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    // No key, no network
    let api_key = match config::api_key_from_env() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_MISSING_CREDENTIAL);
        }
    };

    if let Err(e) = run(&cli, &api_key) {
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_GENERAL_ERROR);
    }
}

fn run(cli: &Cli, api_key: &str) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ApiConfig::load_from(path)?,
        None => ApiConfig::load()?,
    }
    .with_env_overrides();

    tracing::debug!(
        "Using {} (timeout {}s)",
        config.api_root(),
        config.timeout_secs
    );

    let client = HttpNexusClient::new(&config, api_key).context("Failed to set up API client")?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    runner::run(
        &client,
        cli.output_format(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    Ok(())
}
