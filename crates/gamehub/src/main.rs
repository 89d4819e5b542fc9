//! GameHub - terminal front end
//!
//! Runs a wallet panel and a rock-paper-scissors table in one session.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use gamehub::{GameHubConfig, Notification, Session};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            delay_ms,
            address,
        } => {
            let config = load_config(config)?
                .with_opponent_seed(seed)
                .with_reveal_delay_ms(delay_ms)
                .with_wallet_address(address);
            run_play(config).await
        }
        Command::Network { config, json } => run_network(load_config(config)?, json),
    }
}

/// Loads the config file, or defaults when none is given.
#[instrument]
fn load_config(path: Option<PathBuf>) -> Result<GameHubConfig> {
    match path {
        Some(path) => Ok(GameHubConfig::from_file(path)?),
        None => Ok(GameHubConfig::default()),
    }
}

/// Run the interactive session
async fn run_play(config: GameHubConfig) -> Result<()> {
    info!("Starting GameHub session");

    let (tx, mut rx) = mpsc::unbounded_channel::<Notification>();
    let printer = tokio::spawn(async move {
        while let Some(notification) = rx.recv().await {
            println!("{notification}");
        }
    });

    let session = Session::from_config(&config, Arc::new(tx));
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    gamehub::console::run(&session, stdin).await?;

    drop(session);
    printer.abort();
    Ok(())
}

/// Print chain information
fn run_network(config: GameHubConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config.chain().rpc_params()?)?);
    } else {
        println!("{}", gamehub::console::render_network(config.chain()));
    }
    Ok(())
}
