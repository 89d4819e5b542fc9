//! Command-line interface for gamehub.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// GameHub - rock-paper-scissors for zTTC credits
#[derive(Parser, Debug)]
#[command(name = "gamehub")]
#[command(about = "Credit-metered rock-paper-scissors with a mock wallet", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive session in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for a reproducible opponent
        #[arg(long)]
        seed: Option<u64>,

        /// Reveal delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Account address the mock wallet grants
        #[arg(long)]
        address: Option<String>,
    },

    /// Print the chain suggested to the wallet
    Network {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the wallet_addEthereumChain params as JSON
        #[arg(long)]
        json: bool,
    },
}
