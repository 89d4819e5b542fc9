//! Core domain types for rock-paper-scissors.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the three symbolic game choices.
///
/// Moves carry no ordering: dominance is cyclic and lives in [`Move::beats`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Move {
    /// Rock crushes scissors.
    Rock,
    /// Paper covers rock.
    Paper,
    /// Scissors cut paper.
    Scissors,
}

impl Move {
    /// All moves, in display order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Returns the single move this move defeats.
    ///
    /// Explicit table rather than modular arithmetic so the dominance
    /// cycle reads directly off the source.
    #[instrument]
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// Returns the single move that defeats this move.
    #[instrument]
    pub fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Returns the glyph shown for this move.
    pub fn glyph(self) -> &'static str {
        match self {
            Move::Rock => "🗿",
            Move::Paper => "📄",
            Move::Scissors => "✂️",
        }
    }
}

/// Result of a round from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Player's move beat the opponent's.
    Win,
    /// Opponent's move beat the player's.
    Lose,
    /// Both chose the same move.
    Draw,
}

impl Outcome {
    /// Returns the outcome seen from the opponent's side.
    pub fn reversed(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    /// Short label shown where the "VS" marker sits once a round resolves.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Win => "Winner! 🎉",
            Outcome::Lose => "Lost 😔",
            Outcome::Draw => "Draw 🤝",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Lose => write!(f, "lose"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_beats_and_beaten_by_are_inverse() {
        for m in Move::iter() {
            assert_eq!(m.beats().beaten_by(), m);
            assert_eq!(m.beaten_by().beats(), m);
        }
    }

    #[test]
    fn test_each_move_beats_exactly_one_other() {
        for m in Move::iter() {
            let beaten: Vec<_> = Move::iter().filter(|o| m.beats() == *o).collect();
            assert_eq!(beaten.len(), 1);
            assert_ne!(beaten[0], m);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Move::from_str("rock").unwrap(), Move::Rock);
        assert_eq!(Move::from_str("PAPER").unwrap(), Move::Paper);
        assert_eq!(Move::from_str("Scissors").unwrap(), Move::Scissors);
        assert!(Move::from_str("lizard").is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Move::Rock.to_string(), "Rock");
        assert_eq!(Move::Scissors.to_string(), "Scissors");
        assert_eq!(Outcome::Lose.to_string(), "lose");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Move::Paper).unwrap();
        assert_eq!(json, "\"paper\"");
        let outcome: Outcome = serde_json::from_str("\"draw\"").unwrap();
        assert_eq!(outcome, Outcome::Draw);
    }
}
