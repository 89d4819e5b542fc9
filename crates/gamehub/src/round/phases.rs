//! Phase types for a single round.
//!
//! A committed round hides the opponent's move until it is consumed by
//! [`CommittedRound::reveal`], so a caller cannot read the move early.
//! A resolved round always has an outcome, derived from its two moves.

use gamehub_rps::{resolve, Move, Outcome};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A round whose player move is locked in and whose credit is spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedRound {
    number: u64,
    player: Move,
    opponent: Move,
}

impl CommittedRound {
    pub(super) fn new(number: u64, player: Move, opponent: Move) -> Self {
        Self {
            number,
            player,
            opponent,
        }
    }

    /// Sequence number of this round within the session.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// The player's move.
    pub fn player(&self) -> Move {
        self.player
    }

    /// Uncovers the opponent's move (consumes committed, returns resolved).
    #[instrument]
    pub fn reveal(self) -> ResolvedRound {
        ResolvedRound {
            number: self.number,
            player: self.player,
            opponent: self.opponent,
        }
    }
}

/// A round with both moves visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRound {
    number: u64,
    player: Move,
    opponent: Move,
}

impl ResolvedRound {
    /// Sequence number of this round within the session.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// The player's move.
    pub fn player(&self) -> Move {
        self.player
    }

    /// The opponent's move.
    pub fn opponent(&self) -> Move {
        self.opponent
    }

    /// Outcome from the player's perspective.
    pub fn outcome(&self) -> Outcome {
        resolve(self.player, self.opponent)
    }
}

/// Where the round slot currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// Nothing committed; plays are accepted.
    #[default]
    Idle,
    /// Waiting for the reveal.
    Committed(CommittedRound),
    /// Result on display until the next play or reset.
    Resolved(ResolvedRound),
}

impl RoundPhase {
    /// True while a reveal is outstanding.
    pub fn is_pending(&self) -> bool {
        matches!(self, RoundPhase::Committed(_))
    }

    /// The player's move in the current or last round.
    pub fn player_move(&self) -> Option<Move> {
        match self {
            RoundPhase::Idle => None,
            RoundPhase::Committed(round) => Some(round.player()),
            RoundPhase::Resolved(round) => Some(round.player()),
        }
    }

    /// The opponent's move, once revealed.
    pub fn opponent_move(&self) -> Option<Move> {
        match self {
            RoundPhase::Resolved(round) => Some(round.opponent()),
            RoundPhase::Idle | RoundPhase::Committed(_) => None,
        }
    }

    /// Outcome of the last round, once revealed.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            RoundPhase::Resolved(round) => Some(round.outcome()),
            RoundPhase::Idle | RoundPhase::Committed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_committed_hides_opponent() {
        let phase = RoundPhase::Committed(CommittedRound::new(1, Move::Rock, Move::Paper));
        assert!(phase.is_pending());
        assert_eq!(phase.player_move(), Some(Move::Rock));
        assert_eq!(phase.opponent_move(), None);
        assert_eq!(phase.outcome(), None);
    }

    #[test]
    fn test_reveal_derives_outcome() {
        let resolved = CommittedRound::new(3, Move::Paper, Move::Rock).reveal();
        assert_eq!(resolved.number(), 3);
        assert_eq!(resolved.outcome(), Outcome::Win);

        let phase = RoundPhase::Resolved(resolved);
        assert!(!phase.is_pending());
        assert_eq!(phase.opponent_move(), Some(Move::Rock));
        assert_eq!(phase.outcome(), Some(Outcome::Win));
    }

    #[test]
    fn test_idle_shows_nothing() {
        let phase = RoundPhase::default();
        assert_eq!(phase.player_move(), None);
        assert_eq!(phase.outcome(), None);
    }
}
