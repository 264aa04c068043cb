//! Dexdle - Unified CLI
//!
//! Terminal game, HTTP API and one-shot comparison.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use dexdle::{GameConfig, GameController, PokeApiRoster, RosterProvider, StaticRoster};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { roster_file } => run_play(&cli.config, roster_file).await,
        Command::Serve {
            host,
            port,
            roster_file,
        } => run_serve(&cli.config, host, port, roster_file).await,
        Command::Compare {
            guess,
            secret,
            roster_file,
        } => run_compare(&cli.config, guess, secret, roster_file).await,
    }
}

/// Run the terminal game
async fn run_play(config_path: &Path, roster_file: Option<PathBuf>) -> Result<()> {
    // The TUI installs its own file logger.
    let config = GameConfig::load_or_default(config_path)?;
    let provider = build_provider(&config, roster_file.as_deref())?;
    dexdle::run_tui(GameController::new(provider, config)).await
}

/// Run the JSON HTTP API
async fn run_serve(
    config_path: &Path,
    host: String,
    port: u16,
    roster_file: Option<PathBuf>,
) -> Result<()> {
    initialize_tracing();
    info!("Starting Dexdle HTTP API");

    let config = GameConfig::load_or_default(config_path)?;
    let provider = build_provider(&config, roster_file.as_deref())?;
    let mut controller = GameController::new(provider, config);

    // An unavailable roster at boot is not fatal; clients can POST /api/session later.
    if let Err(e) = controller.start_session().await {
        tracing::warn!(error = %e, "Initial session failed to start");
    }

    let shared = Arc::new(tokio::sync::Mutex::new(controller));
    dexdle::serve(shared, &host, port).await
}

/// Fetch two creatures and print their verdicts
#[instrument(skip(config_path, roster_file))]
async fn run_compare(
    config_path: &Path,
    guess: String,
    secret: String,
    roster_file: Option<PathBuf>,
) -> Result<()> {
    initialize_tracing();

    let config = GameConfig::load_or_default(config_path)?;
    let provider = build_provider(&config, roster_file.as_deref())?;

    let guess = provider.fetch_detail(&guess).await?;
    let secret = provider.fetch_detail(&secret).await?;
    let verdict = dexdle::compare(&guess, &secret);
    info!(%verdict, "Compared");

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "guess": guess,
            "secret": secret,
            "verdict": verdict,
        }))?
    );
    Ok(())
}

#[instrument(skip(config))]
fn build_provider(
    config: &GameConfig,
    roster_file: Option<&Path>,
) -> Result<Box<dyn RosterProvider>> {
    match roster_file {
        Some(path) => {
            info!(path = %path.display(), "Using static roster");
            Ok(Box::new(StaticRoster::from_file(path)?))
        }
        None => {
            info!(base_url = %config.api_base_url(), "Using PokeAPI roster");
            Ok(Box::new(PokeApiRoster::new(
                config.api_base_url(),
                *config.roster_limit(),
            )))
        }
    }
}

#[instrument]
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,dexdle=debug")),
        )
        .init();
}
