//! Synchronous round state machine.

use super::contracts::{CanPlay, RoundSlotFree, StatsMatchRounds};
use super::error::PlayError;
use super::phases::{CommittedRound, ResolvedRound, RoundPhase};
use crate::balance::BalanceLedger;
use crate::notify::{Notification, Notifier};
use crate::wallet::WalletStatus;
use gamehub_rps::{Move, OpponentSource, Outcome, SessionStats};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Ticket for the deferred reveal of a committed round.
///
/// Whoever schedules the reveal hands the ticket back to
/// [`RoundOrchestrator::reveal`] once `delay` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReveal {
    round: u64,
    delay: Duration,
}

impl PendingReveal {
    /// Round this ticket resolves.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Presentation delay before the reveal.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Everything a front end shows once a round resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    /// The resolved round.
    pub round: ResolvedRound,
    /// Session statistics including this round.
    pub stats: SessionStats,
    /// Balance after the round's charge.
    pub balance: u64,
}

impl RoundReport {
    /// Outcome from the player's perspective.
    pub fn outcome(&self) -> Outcome {
        self.round.outcome()
    }
}

/// Round state machine for one session.
///
/// Owns the session's [`SessionStats`] and the single round slot. Wallet,
/// ledger, opponent and notifier are injected capabilities.
pub struct RoundOrchestrator {
    phase: RoundPhase,
    stats: SessionStats,
    rounds_started: u64,
    rounds_resolved: u64,
    reveal_delay: Duration,
    wallet: Arc<dyn WalletStatus>,
    ledger: Box<dyn BalanceLedger>,
    opponent: Box<dyn OpponentSource>,
    notifier: Arc<dyn Notifier>,
}

impl RoundOrchestrator {
    /// Default pause between commit and reveal.
    pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(2000);

    /// Creates an idle orchestrator with fresh statistics.
    #[instrument(skip_all)]
    pub fn new(
        wallet: Arc<dyn WalletStatus>,
        ledger: Box<dyn BalanceLedger>,
        opponent: Box<dyn OpponentSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        info!(balance = ledger.balance(), "Creating round orchestrator");
        Self {
            phase: RoundPhase::Idle,
            stats: SessionStats::new(),
            rounds_started: 0,
            rounds_resolved: 0,
            reveal_delay: Self::DEFAULT_REVEAL_DELAY,
            wallet,
            ledger,
            opponent,
            notifier,
        }
    }

    /// Sets the presentation delay carried by reveal tickets.
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Commits `choice` as the player's move.
    ///
    /// On success the credit is spent, the opponent's move is drawn but
    /// hidden, and the returned ticket must be passed to [`Self::reveal`].
    /// On rejection nothing changes and the user is notified.
    #[instrument(skip(self), fields(round = self.rounds_started + 1))]
    pub fn play(&mut self, choice: Move) -> Result<PendingReveal, PlayError> {
        if let Err(e) = CanPlay::check(&self.phase, self.wallet.as_ref(), self.ledger.as_ref()) {
            warn!(error = %e, "Play rejected");
            if let Some(notification) = e.notification() {
                self.notifier.notify(notification);
            }
            return Err(e);
        }

        // Charged before the outcome exists; the ledger has no refund path.
        self.ledger.deduct_one();
        let opponent = self.opponent.choose();
        self.rounds_started += 1;
        self.phase = RoundPhase::Committed(CommittedRound::new(self.rounds_started, choice, opponent));

        info!(
            round = self.rounds_started,
            ?choice,
            balance = self.ledger.balance(),
            "Round committed"
        );

        Ok(PendingReveal {
            round: self.rounds_started,
            delay: self.reveal_delay,
        })
    }

    /// Completes the round named by `ticket`.
    ///
    /// Returns `None` for a ticket that does not match the committed round.
    #[instrument(skip(self), fields(round = ticket.round))]
    pub fn reveal(&mut self, ticket: PendingReveal) -> Option<RoundReport> {
        let committed = match std::mem::take(&mut self.phase) {
            RoundPhase::Committed(round) if round.number() == ticket.round => round,
            other => {
                debug!(phase = ?other, "Ignoring stale reveal");
                self.phase = other;
                return None;
            }
        };

        let round = committed.reveal();
        let outcome = round.outcome();
        self.stats = self.stats.record(outcome);
        self.rounds_resolved += 1;
        debug_assert!(
            StatsMatchRounds::holds(&self.stats, self.rounds_resolved),
            "Stats out of step with rounds"
        );

        info!(
            player = ?round.player(),
            opponent = ?round.opponent(),
            %outcome,
            "Round resolved"
        );
        self.notifier.notify(result_notification(&round));
        self.phase = RoundPhase::Resolved(round);

        Some(RoundReport {
            round,
            stats: self.stats,
            balance: self.ledger.balance(),
        })
    }

    /// Clears the last result and returns to idle.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), PlayError> {
        RoundSlotFree::check(&self.phase)?;
        self.phase = RoundPhase::Idle;
        debug!("Round display cleared");
        Ok(())
    }

    /// Current phase of the round slot.
    pub fn phase(&self) -> &RoundPhase {
        &self.phase
    }

    /// Session statistics so far.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Spendable credits.
    pub fn balance(&self) -> u64 {
        self.ledger.balance()
    }

    /// Whether the wallet gate is open.
    pub fn is_connected(&self) -> bool {
        self.wallet.is_connected()
    }
}

impl std::fmt::Debug for RoundOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundOrchestrator")
            .field("phase", &self.phase)
            .field("stats", &self.stats)
            .field("rounds_started", &self.rounds_started)
            .field("balance", &self.ledger.balance())
            .finish()
    }
}

fn result_notification(round: &ResolvedRound) -> Notification {
    let title = match round.outcome() {
        Outcome::Win => "Congratulations! You won! 🎉",
        Outcome::Lose => "Sorry, you lost! 😔",
        Outcome::Draw => "It's a draw! Try again 🤝",
    };
    Notification::info(
        title,
        format!("You: {} - Computer: {}", round.player(), round.opponent()),
    )
}
