//! Preconditions and postconditions for rounds.
//!
//! A play is accepted only when every precondition in [`CanPlay`] holds;
//! the first failing one names the rejection.

use super::error::PlayError;
use super::phases::RoundPhase;
use crate::balance::{BalanceLedger, PLAY_COST};
use crate::wallet::WalletStatus;
use gamehub_rps::SessionStats;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: no other round is waiting for its reveal.
pub struct RoundSlotFree;

impl RoundSlotFree {
    #[instrument(skip(phase))]
    pub fn check(phase: &RoundPhase) -> Result<(), PlayError> {
        if phase.is_pending() {
            Err(PlayError::RoundInProgress)
        } else {
            Ok(())
        }
    }
}

/// Precondition: a wallet is connected.
pub struct WalletConnected;

impl WalletConnected {
    #[instrument(skip(wallet))]
    pub fn check(wallet: &dyn WalletStatus) -> Result<(), PlayError> {
        if wallet.is_connected() {
            Ok(())
        } else {
            Err(PlayError::NotConnected)
        }
    }
}

/// Precondition: the ledger covers one round.
pub struct SufficientBalance;

impl SufficientBalance {
    #[instrument(skip(ledger))]
    pub fn check(ledger: &dyn BalanceLedger) -> Result<(), PlayError> {
        let balance = ledger.balance();
        if balance < PLAY_COST {
            Err(PlayError::InsufficientBalance { balance })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for accepting a play.
pub struct CanPlay;

impl CanPlay {
    /// Validates all preconditions for a play, in order.
    #[instrument(skip_all)]
    pub fn check(
        phase: &RoundPhase,
        wallet: &dyn WalletStatus,
        ledger: &dyn BalanceLedger,
    ) -> Result<(), PlayError> {
        RoundSlotFree::check(phase)?;
        WalletConnected::check(wallet)?;
        SufficientBalance::check(ledger)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Invariant: one recorded outcome per resolved round.
pub struct StatsMatchRounds;

impl StatsMatchRounds {
    #[instrument(skip(stats))]
    pub fn holds(stats: &SessionStats, rounds_resolved: u64) -> bool {
        let valid = u64::from(stats.total()) == rounds_resolved;
        if !valid {
            warn!(recorded = stats.total(), rounds_resolved, "Stats out of step with rounds");
        }
        valid
    }
}
