//! Outcome resolution for rock-paper-scissors.

use super::types::{Move, Outcome};
use tracing::instrument;

/// Resolves a round from the player's perspective.
///
/// Total over the 3×3 move space: equal moves draw, otherwise the
/// player wins exactly when their move beats the opponent's.
#[instrument]
pub fn resolve(player: Move, opponent: Move) -> Outcome {
    if player == opponent {
        Outcome::Draw
    } else if player.beats() == opponent {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
