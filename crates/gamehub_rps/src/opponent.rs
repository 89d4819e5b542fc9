//! Opponent move sources.
//!
//! The computer's move is drawn through [`OpponentSource`] so sessions can
//! swap the uniform random source for a scripted one.

use super::types::Move;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Strategy that picks the opponent's move for each round.
pub trait OpponentSource: Send {
    /// Draws the next opponent move.
    fn choose(&mut self) -> Move;
}

/// Uniform, memoryless opponent backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    /// Creates an opponent seeded from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible opponent from a fixed seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentSource for RandomOpponent {
    fn choose(&mut self) -> Move {
        let choice = Move::ALL[self.rng.gen_range(0..Move::ALL.len())];
        debug!(?choice, "Random opponent chose");
        choice
    }
}

/// Opponent that replays a fixed script of moves, cycling at the end.
#[derive(Debug, Clone)]
pub struct ScriptedOpponent {
    script: Vec<Move>,
    cursor: usize,
}

impl ScriptedOpponent {
    /// Creates a scripted opponent.
    ///
    /// An empty script falls back to always playing [`Move::Rock`].
    #[instrument]
    pub fn new(script: Vec<Move>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Creates an opponent that always plays the same move.
    pub fn always(choice: Move) -> Self {
        Self::new(vec![choice])
    }
}

impl OpponentSource for ScriptedOpponent {
    fn choose(&mut self) -> Move {
        if self.script.is_empty() {
            return Move::Rock;
        }
        let choice = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        debug!(?choice, cursor = self.cursor, "Scripted opponent chose");
        choice
    }
}
