//! Pure rock-paper-scissors rules for GameHub.
//!
//! This crate knows nothing about wallets, credits or timers. It provides:
//!
//! - [`Move`] and [`Outcome`], the game vocabulary
//! - [`resolve`], the total outcome function over the 3×3 move space
//! - [`SessionStats`], the caller-owned win/loss/draw accumulator
//! - [`OpponentSource`], the injectable strategy for the computer's move
//!
//! # Example
//!
//! ```
//! use gamehub_rps::{resolve, Move, Outcome, SessionStats};
//!
//! let outcome = resolve(Move::Rock, Move::Scissors);
//! assert_eq!(outcome, Outcome::Win);
//!
//! let stats = SessionStats::new().record(outcome);
//! assert_eq!(*stats.wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod opponent;
mod rules;
mod stats;
mod types;

pub use opponent::{OpponentSource, RandomOpponent, ScriptedOpponent};
pub use rules::resolve;
pub use stats::SessionStats;
pub use types::{Move, Outcome};
