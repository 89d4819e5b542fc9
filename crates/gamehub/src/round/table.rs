//! Async driver that schedules round reveals on the tokio runtime.

use super::error::PlayError;
use super::orchestrator::{PendingReveal, RoundOrchestrator, RoundReport};
use super::phases::RoundPhase;
use gamehub_rps::{Move, SessionStats};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

/// Point-in-time view of the table for rendering.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct TableSnapshot {
    /// Current round phase.
    pub phase: RoundPhase,
    /// Session statistics.
    pub stats: SessionStats,
    /// Spendable credits.
    pub balance: u64,
    /// Whether a wallet is connected.
    pub connected: bool,
}

/// Handle to a scheduled reveal.
///
/// Dropping the handle does not cancel the reveal.
#[derive(Debug)]
pub struct RevealHandle {
    ticket: PendingReveal,
    task: JoinHandle<Option<RoundReport>>,
}

impl RevealHandle {
    /// Ticket of the scheduled round.
    pub fn ticket(&self) -> PendingReveal {
        self.ticket
    }

    /// Waits for the reveal.
    ///
    /// Yields `None` when the table was dropped before the delay elapsed.
    pub async fn finished(self) -> Option<RoundReport> {
        match self.task.await {
            Ok(report) => report,
            Err(e) => {
                warn!(error = %e, round = self.ticket.round(), "Reveal task failed");
                None
            }
        }
    }
}

/// Shared handle to a session's [`RoundOrchestrator`].
///
/// The scheduled reveal holds only a weak reference, so once every
/// `Table` clone is gone a pending reveal has no effect.
#[derive(Debug, Clone)]
pub struct Table {
    inner: Arc<Mutex<RoundOrchestrator>>,
}

impl Table {
    /// Wraps an orchestrator.
    #[instrument(skip(orchestrator))]
    pub fn new(orchestrator: RoundOrchestrator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(orchestrator)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RoundOrchestrator> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Commits a move and schedules its reveal after the ticket's delay.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self))]
    pub fn play(&self, choice: Move) -> Result<RevealHandle, PlayError> {
        let ticket = self.lock().play(choice)?;
        let orchestrator = Arc::downgrade(&self.inner);

        let task = tokio::spawn(async move {
            tokio::time::sleep(ticket.delay()).await;
            let Some(orchestrator) = orchestrator.upgrade() else {
                debug!(round = ticket.round(), "Table dropped before reveal");
                return None;
            };
            let report = orchestrator
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .reveal(ticket);
            report
        });

        Ok(RevealHandle { ticket, task })
    }

    /// Clears the last result.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Result<(), PlayError> {
        self.lock().reset()
    }

    /// Captures the current state.
    pub fn snapshot(&self) -> TableSnapshot {
        let orchestrator = self.lock();
        TableSnapshot::new(
            orchestrator.phase().clone(),
            orchestrator.stats(),
            orchestrator.balance(),
            orchestrator.is_connected(),
        )
    }
}
