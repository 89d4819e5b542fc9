//! Play rejection reasons.

use crate::balance::TOKEN_SYMBOL;
use crate::notify::Notification;

/// Why a play (or reset) request was refused.
///
/// All variants are recoverable and leave balance and stats untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// No wallet is connected.
    #[display("Wallet not connected")]
    NotConnected,

    /// The ledger cannot cover the cost of a round.
    #[display("Insufficient balance: {balance} zTTC")]
    InsufficientBalance {
        /// Balance at the time of the request.
        balance: u64,
    },

    /// A round is already waiting for its reveal.
    #[display("A round is already in progress")]
    RoundInProgress,
}

impl std::error::Error for PlayError {}

impl PlayError {
    /// User-facing notification for this rejection, if the UI shows one.
    ///
    /// Requests made while a round is pending are dropped silently, as the
    /// play controls are disabled during the reveal.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            PlayError::NotConnected => Some(Notification::error(
                "Error",
                "Please connect your wallet first",
            )),
            PlayError::InsufficientBalance { .. } => Some(Notification::error(
                "Insufficient Balance",
                format!("You need 1 {TOKEN_SYMBOL} token to play"),
            )),
            PlayError::RoundInProgress => None,
        }
    }
}
