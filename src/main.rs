//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `deliverability_api` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use deliverability_api::initialization::init_logger_with;
use deliverability_api::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), so RUST_LOG
    // can be set there
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Ignoring unreadable .env file: {e}");
        }
    }

    let config = Config::parse();

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        log::error!("{:#}", e);
        eprintln!("deliverability_api error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
