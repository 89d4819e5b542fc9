//! Credit balance capability.

use tracing::{debug, instrument, warn};

/// Credits charged for one round.
pub const PLAY_COST: u64 = 1;

/// Ticker shown next to balances.
pub const TOKEN_SYMBOL: &str = "zTTC";

/// Holder of the player's spendable credits.
///
/// The round orchestrator reads the balance and asks for exactly one
/// deduction per accepted round. There is no refund or rollback.
pub trait BalanceLedger: Send {
    /// Current spendable credits.
    fn balance(&self) -> u64;

    /// Removes one credit.
    fn deduct_one(&mut self);
}

/// In-memory mock ledger, as the demo has no token contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLedger {
    balance: u64,
}

impl MemoryLedger {
    /// Default balance handed to a new session.
    pub const DEFAULT_BALANCE: u64 = 100;

    /// Creates a ledger holding `balance` credits.
    #[instrument]
    pub fn new(balance: u64) -> Self {
        Self { balance }
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BALANCE)
    }
}

impl BalanceLedger for MemoryLedger {
    fn balance(&self) -> u64 {
        self.balance
    }

    fn deduct_one(&mut self) {
        if self.balance >= PLAY_COST {
            self.balance -= PLAY_COST;
            debug!(balance = self.balance, "Deducted one credit");
        } else {
            warn!("Deduction requested on empty ledger");
        }
    }
}

/// Renders a balance the way the wallet panel shows it.
pub fn format_balance(balance: u64) -> String {
    format!("{balance}.00 {TOKEN_SYMBOL}")
}
