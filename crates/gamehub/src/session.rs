//! Wiring of one GameHub session from configuration.

use crate::balance::MemoryLedger;
use crate::config::GameHubConfig;
use crate::notify::Notifier;
use crate::round::{RoundOrchestrator, Table};
use crate::wallet::{WalletConnector, WalletProvider};
use gamehub_rps::{OpponentSource, RandomOpponent};
use std::sync::Arc;
use tracing::{info, instrument};

/// A wallet panel and a game table sharing one connection state.
#[derive(Debug, Clone)]
pub struct Session {
    table: Table,
    wallet: Arc<WalletConnector>,
}

impl Session {
    /// Builds a session whose opponent follows the configured seed.
    #[instrument(skip_all)]
    pub fn from_config(config: &GameHubConfig, notifier: Arc<dyn Notifier>) -> Self {
        let opponent: Box<dyn OpponentSource> = match config.opponent_seed() {
            Some(seed) => Box::new(RandomOpponent::seeded(*seed)),
            None => Box::new(RandomOpponent::new()),
        };
        let provider: Arc<dyn WalletProvider> = Arc::new(config.wallet().provider());
        Self::new(config, provider, opponent, notifier)
    }

    /// Builds a session from explicit capabilities.
    #[instrument(skip_all)]
    pub fn new(
        config: &GameHubConfig,
        provider: Arc<dyn WalletProvider>,
        opponent: Box<dyn OpponentSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let wallet = Arc::new(WalletConnector::new(
            provider,
            config.chain().clone(),
            notifier.clone(),
        ));
        let orchestrator = RoundOrchestrator::new(
            wallet.clone(),
            Box::new(MemoryLedger::new(*config.starting_balance())),
            opponent,
            notifier,
        )
        .with_reveal_delay(config.reveal_delay());

        info!(
            starting_balance = config.starting_balance(),
            chain = %config.chain().chain_name(),
            "Session ready"
        );
        Self {
            table: Table::new(orchestrator),
            wallet,
        }
    }

    /// The game table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The wallet panel.
    pub fn wallet(&self) -> &WalletConnector {
        &self.wallet
    }
}
