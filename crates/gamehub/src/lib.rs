//! GameHub library - credit-metered rock-paper-scissors with a wallet panel
//!
//! # Architecture
//!
//! - **Round**: play gating, charging, delayed reveal and session stats
//! - **Wallet**: provider capability, connect flow and chain suggestion
//! - **Balance**: the credit ledger capability
//! - **Notify**: fire-and-forget user notifications
//! - **Console**: a terminal front end over a [`Session`]
//!
//! Game rules live in the `gamehub_rps` crate and are re-exported here.
//!
//! # Example
//!
//! ```
//! use gamehub::{MemoryLedger, RoundOrchestrator, TracingNotifier};
//! use gamehub::{Move, Outcome, ScriptedOpponent};
//! use std::sync::Arc;
//! use std::sync::atomic::AtomicBool;
//!
//! let mut orchestrator = RoundOrchestrator::new(
//!     Arc::new(AtomicBool::new(true)),
//!     Box::new(MemoryLedger::new(100)),
//!     Box::new(ScriptedOpponent::always(Move::Scissors)),
//!     Arc::new(TracingNotifier),
//! );
//!
//! let ticket = orchestrator.play(Move::Rock)?;
//! let report = orchestrator.reveal(ticket).expect("ticket is current");
//! assert_eq!(report.outcome(), Outcome::Win);
//! assert_eq!(report.balance, 99);
//! # Ok::<(), gamehub::PlayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod balance;
mod config;
mod notify;
mod round;
mod session;
mod wallet;

pub mod console;

// Crate-level exports - Balance
pub use balance::{format_balance, BalanceLedger, MemoryLedger, PLAY_COST, TOKEN_SYMBOL};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameHubConfig, WalletSettings, DEMO_ADDRESS};

// Crate-level exports - Notifications
pub use notify::{Notification, NotificationKind, Notifier, TracingNotifier};

// Crate-level exports - Rounds
pub use round::{
    CanPlay, CommittedRound, PendingReveal, PlayError, ResolvedRound, RevealHandle,
    RoundOrchestrator, RoundPhase, RoundReport, RoundSlotFree, StatsMatchRounds,
    SufficientBalance, Table, TableSnapshot, WalletConnected,
};

// Crate-level exports - Session
pub use session::Session;

// Crate-level exports - Wallet
pub use wallet::{
    Address, ChainSpec, MockWalletProvider, NativeCurrency, WalletConnector, WalletError,
    WalletProvider, WalletStatus,
};

// Crate-level exports - Game rules
pub use gamehub_rps::{
    resolve, Move, OpponentSource, Outcome, RandomOpponent, ScriptedOpponent, SessionStats,
};
