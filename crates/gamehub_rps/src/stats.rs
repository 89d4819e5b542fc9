//! Session statistics for rock-paper-scissors.

use super::types::Outcome;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win/loss/draw counters for one session.
///
/// Owned by the caller and only advanced through [`SessionStats::record`],
/// which returns a new value rather than mutating shared state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionStats {
    wins: u32,
    losses: u32,
    draws: u32,
}

impl SessionStats {
    /// Creates empty statistics for a fresh session.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns stats with the counter matching `outcome` incremented by one.
    #[instrument]
    #[must_use]
    pub fn record(self, outcome: Outcome) -> Self {
        let next = match outcome {
            Outcome::Win => Self {
                wins: self.wins + 1,
                ..self
            },
            Outcome::Lose => Self {
                losses: self.losses + 1,
                ..self
            },
            Outcome::Draw => Self {
                draws: self.draws + 1,
                ..self
            },
        };
        debug!(wins = next.wins, losses = next.losses, draws = next.draws, "Recorded outcome");
        next
    }

    /// Total rounds recorded this session.
    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Win rate as a percentage (0.0–100.0).
    #[instrument(skip(self))]
    pub fn win_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            (self.wins as f64 / self.total() as f64) * 100.0
        }
    }
}

impl std::fmt::Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Wins: {}  Losses: {}  Draws: {}",
            self.wins, self.losses, self.draws
        )
    }
}
