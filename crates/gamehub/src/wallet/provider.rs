//! Wallet provider capability and its in-memory stand-in.

use super::{Address, ChainSpec, WalletError};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, instrument, warn};

/// An injected wallet, in the style of an EIP-1193 provider.
#[async_trait::async_trait]
pub trait WalletProvider: Send + Sync {
    /// Asks the user to grant account access.
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Suggests a custom chain to the wallet.
    async fn add_network(&self, chain: &ChainSpec) -> Result<(), WalletError>;
}

/// Scriptable wallet provider for the demo binary and tests.
#[derive(Debug, Default)]
pub struct MockWalletProvider {
    installed: bool,
    account: Option<Address>,
    reject: bool,
    fail_network_add: bool,
    added_chains: Mutex<Vec<String>>,
}

impl MockWalletProvider {
    /// A provider that grants `address`.
    #[instrument(skip(address))]
    pub fn with_account(address: impl Into<String>) -> Self {
        Self {
            installed: true,
            account: Some(Address::new(address)),
            ..Self::default()
        }
    }

    /// No provider installed at all.
    #[instrument]
    pub fn absent() -> Self {
        Self::default()
    }

    /// Makes every account request fail as a user rejection.
    pub fn rejecting(mut self) -> Self {
        self.reject = true;
        self
    }

    /// Makes every network addition fail.
    pub fn failing_network_add(mut self) -> Self {
        self.fail_network_add = true;
        self
    }

    /// Chain ids successfully added so far.
    pub fn added_chains(&self) -> Vec<String> {
        self.added_chains
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait::async_trait]
impl WalletProvider for MockWalletProvider {
    #[instrument(skip(self))]
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        if !self.installed {
            return Err(WalletError::NoProvider);
        }
        if self.reject {
            warn!("User rejected the account request");
            return Err(WalletError::Rejected("User rejected the request.".to_string()));
        }
        debug!(account = ?self.account, "Granting accounts");
        Ok(self.account.iter().cloned().collect())
    }

    #[instrument(skip(self, chain), fields(chain_id = %chain.chain_id()))]
    async fn add_network(&self, chain: &ChainSpec) -> Result<(), WalletError> {
        if !self.installed {
            return Err(WalletError::NoProvider);
        }
        let params = chain
            .rpc_params()
            .map_err(|e| WalletError::NetworkAdd(e.to_string()))?;
        debug!(%params, "wallet_addEthereumChain");
        if self.fail_network_add {
            return Err(WalletError::NetworkAdd("Unrecognized chain ID".to_string()));
        }
        self.added_chains
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(chain.chain_id().clone());
        info!("Network added");
        Ok(())
    }
}
