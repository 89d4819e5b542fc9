//! Line-oriented terminal front end.

use crate::balance::format_balance;
use crate::round::{RoundPhase, RoundReport, TableSnapshot};
use crate::session::Session;
use crate::wallet::ChainSpec;
use anyhow::Result;
use gamehub_rps::Move;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument};

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Play a move.
    Play(Move),
    /// Connect the wallet.
    Connect,
    /// Disconnect the wallet.
    Disconnect,
    /// Start a new game (clear the last result).
    Reset,
    /// Show board, balance and stats.
    Status,
    /// Show chain information.
    Network,
    /// List commands.
    Help,
    /// Leave the session.
    Quit,
}

/// Input that matches no command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unknown command '{}'. Type 'help' for options.", input)]
pub struct UnknownCommand {
    /// The rejected input.
    pub input: String,
}

impl FromStr for ConsoleCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();
        let command = match input.as_str() {
            "r" => ConsoleCommand::Play(Move::Rock),
            "p" => ConsoleCommand::Play(Move::Paper),
            "s" => ConsoleCommand::Play(Move::Scissors),
            "connect" | "c" => ConsoleCommand::Connect,
            "disconnect" => ConsoleCommand::Disconnect,
            "reset" | "new" => ConsoleCommand::Reset,
            "status" | "stats" => ConsoleCommand::Status,
            "network" => ConsoleCommand::Network,
            "help" | "?" => ConsoleCommand::Help,
            "quit" | "exit" | "q" => ConsoleCommand::Quit,
            other => match Move::from_str(other) {
                Ok(choice) => ConsoleCommand::Play(choice),
                Err(_) => {
                    return Err(UnknownCommand {
                        input: s.trim().to_string(),
                    });
                }
            },
        };
        Ok(command)
    }
}

/// Renders the battle area: player slot, result marker, computer slot.
pub fn render_board(snapshot: &TableSnapshot) -> String {
    let glyph = |choice: Option<Move>| choice.map(Move::glyph).unwrap_or("❓");
    let (center, computer) = match &snapshot.phase {
        RoundPhase::Idle => ("VS", "❓"),
        RoundPhase::Committed(_) => ("⚡", "🤔"),
        RoundPhase::Resolved(round) => (round.outcome().label(), round.opponent().glyph()),
    };
    format!(
        "You {}   {}   {} Computer\n{}  |  Balance: {}",
        glyph(snapshot.phase.player_move()),
        center,
        computer,
        snapshot.stats,
        format_balance(snapshot.balance),
    )
}

/// Renders the chain information card.
pub fn render_network(chain: &ChainSpec) -> String {
    let chain_id = chain
        .chain_id_decimal()
        .map(|id| id.to_string())
        .unwrap_or_else(|_| chain.chain_id().clone());
    format!(
        "Network Name:    {}\nChain ID:        {}\nNative Currency: {}\nRPC URL:         {}\nExplorer:        {}",
        chain.chain_name(),
        chain_id,
        chain.native_currency().symbol(),
        chain.rpc_urls().first().map(String::as_str).unwrap_or("-"),
        chain.explorer_url().unwrap_or("-"),
    )
}

fn render_report(report: &RoundReport) -> String {
    format!(
        "You {} {} {} Computer  ({})",
        report.round.player().glyph(),
        report.outcome().label(),
        report.round.opponent().glyph(),
        report.stats,
    )
}

const HELP: &str = "\
Commands:
  connect | disconnect       manage the wallet
  rock | paper | scissors    play a round (r/p/s), costs 1 zTTC
  reset                      clear the last result
  status                     show board, balance and stats
  network                    show chain information
  quit";

/// Runs the prompt loop until `quit` or end of input.
#[instrument(skip_all)]
pub async fn run<R>(session: &Session, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    println!("{HELP}");
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<ConsoleCommand>() {
            Ok(ConsoleCommand::Quit) => break,
            Ok(command) => execute(session, command).await,
            Err(e) => println!("{e}"),
        }
    }
    info!("Console session ended");
    Ok(())
}

/// Applies one command to the session, printing what the user sees.
#[instrument(skip(session))]
pub async fn execute(session: &Session, command: ConsoleCommand) {
    match command {
        ConsoleCommand::Play(choice) => match session.table().play(choice) {
            Ok(handle) => {
                println!("{}", render_board(&session.table().snapshot()));
                tokio::spawn(async move {
                    if let Some(report) = handle.finished().await {
                        println!("{}", render_report(&report));
                    }
                });
            }
            Err(e) => debug!(error = %e, "Play refused"),
        },
        ConsoleCommand::Connect => {
            if let Ok(address) = session.wallet().connect().await {
                println!("Wallet Address: {}", address.short());
            }
        }
        ConsoleCommand::Disconnect => session.wallet().disconnect(),
        ConsoleCommand::Reset => match session.table().reset() {
            Ok(()) => println!("{}", render_board(&session.table().snapshot())),
            Err(e) => println!("{e}"),
        },
        ConsoleCommand::Status => {
            let snapshot = session.table().snapshot();
            match session.wallet().address() {
                Some(address) => println!("Wallet Address: {}", address.short()),
                None => println!("To start playing, connect your wallet"),
            }
            println!("{}", render_board(&snapshot));
        }
        ConsoleCommand::Network => println!("{}", render_network(session.wallet().chain())),
        ConsoleCommand::Help => println!("{HELP}"),
        ConsoleCommand::Quit => {}
    }
}
