//! Round orchestration: gating, charging, delayed reveal and bookkeeping.
//!
//! A round moves `Idle → Committed → Resolved` and back to `Idle` on a
//! reset or the next play. [`RoundOrchestrator`] is the synchronous state
//! machine; [`Table`] schedules its reveal on the tokio runtime.

mod contracts;
mod error;
mod orchestrator;
mod phases;
mod table;

pub use contracts::{CanPlay, RoundSlotFree, StatsMatchRounds, SufficientBalance, WalletConnected};
pub use error::PlayError;
pub use orchestrator::{PendingReveal, RoundOrchestrator, RoundReport};
pub use phases::{CommittedRound, ResolvedRound, RoundPhase};
pub use table::{RevealHandle, Table, TableSnapshot};
