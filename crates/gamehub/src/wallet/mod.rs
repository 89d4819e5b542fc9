//! Wallet capability: provider access, chain suggestion and connection state.

mod chain;
mod connector;
mod provider;

pub use chain::{ChainSpec, NativeCurrency};
pub use connector::WalletConnector;
pub use provider::{MockWalletProvider, WalletProvider};

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// An account address handed out by the wallet provider.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
pub struct Address(String);

impl Address {
    /// Wraps a raw address string.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Returns the full address.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviates the address to its first six and last four characters.
    pub fn short(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 10 {
            return self.0.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }
}

/// Error raised by the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum WalletError {
    /// No injected wallet is available.
    #[display("No wallet provider installed")]
    NoProvider,

    /// The user (or the wallet) refused the request.
    #[display("Wallet request rejected: {}", _0)]
    Rejected(String),

    /// The wallet granted access but returned no account.
    #[display("Wallet returned no accounts")]
    NoAccounts,

    /// The wallet could not add the suggested chain.
    #[display("Network addition failed: {}", _0)]
    NetworkAdd(String),
}

impl std::error::Error for WalletError {}

/// Read-only view of whether a wallet is connected.
///
/// This is the only wallet fact the round orchestrator consults.
pub trait WalletStatus: Send + Sync {
    /// True once an account has been granted and not disconnected.
    fn is_connected(&self) -> bool;
}

impl WalletStatus for AtomicBool {
    fn is_connected(&self) -> bool {
        self.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_address() {
        let address = Address::new("0x1234567890abcdef1234567890abcdef12345678");
        assert_eq!(address.short(), "0x1234...5678");
    }

    #[test]
    fn test_short_address_keeps_short_input() {
        assert_eq!(Address::new("0xabc").short(), "0xabc");
    }

    #[test]
    fn test_atomic_bool_status() {
        let flag = AtomicBool::new(false);
        assert!(!flag.is_connected());
        flag.store(true, Ordering::SeqCst);
        assert!(flag.is_connected());
    }
}
