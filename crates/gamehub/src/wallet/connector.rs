//! Connect/disconnect flow of the wallet panel.

use super::{Address, ChainSpec, WalletError, WalletProvider, WalletStatus};
use crate::notify::{Notification, Notifier};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, instrument, warn};

/// Owns the connection state and drives the provider on the user's behalf.
pub struct WalletConnector {
    provider: Arc<dyn WalletProvider>,
    chain: ChainSpec,
    notifier: Arc<dyn Notifier>,
    address: Mutex<Option<Address>>,
}

impl WalletConnector {
    /// Creates a disconnected connector.
    #[instrument(skip_all, fields(chain = %chain.chain_name()))]
    pub fn new(
        provider: Arc<dyn WalletProvider>,
        chain: ChainSpec,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            provider,
            chain,
            notifier,
            address: Mutex::new(None),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<Address>> {
        self.address.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Requests accounts, adopts the first one and then suggests the chain.
    ///
    /// Chain suggestion is best effort: its failure is logged and the
    /// connection still succeeds.
    #[instrument(skip(self))]
    pub async fn connect(&self) -> Result<Address, WalletError> {
        let address = match self.provider.request_accounts().await {
            Ok(accounts) => accounts.into_iter().next().ok_or(WalletError::NoAccounts),
            Err(e) => Err(e),
        };

        let address = match address {
            Ok(address) => address,
            Err(e) => {
                warn!(error = %e, "Wallet connection failed");
                self.notifier.notify(match e {
                    WalletError::NoProvider => {
                        Notification::error("Error", "Please install MetaMask wallet")
                    }
                    _ => Notification::error("Connection Error", "Failed to connect wallet"),
                });
                return Err(e);
            }
        };

        *self.slot() = Some(address.clone());
        info!(address = %address, "Wallet connected");
        self.notifier.notify(Notification::success(
            "Connection Successful",
            "Your wallet has been connected successfully",
        ));

        if let Err(e) = self.provider.add_network(&self.chain).await {
            warn!(error = %e, chain = %self.chain.chain_name(), "Network addition failed");
        }

        Ok(address)
    }

    /// Forgets the connected account.
    #[instrument(skip(self))]
    pub fn disconnect(&self) {
        let previous = self.slot().take();
        info!(had_account = previous.is_some(), "Wallet disconnected");
        self.notifier.notify(Notification::success(
            "Disconnected",
            "Your wallet has been disconnected",
        ));
    }

    /// Connected account, if any.
    pub fn address(&self) -> Option<Address> {
        self.slot().clone()
    }

    /// Chain suggested on connect.
    pub fn chain(&self) -> &ChainSpec {
        &self.chain
    }
}

impl WalletStatus for WalletConnector {
    fn is_connected(&self) -> bool {
        self.slot().is_some()
    }
}

impl std::fmt::Debug for WalletConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletConnector")
            .field("chain", &self.chain.chain_name())
            .field("address", &self.address())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationKind;
    use crate::wallet::MockWalletProvider;
    use tokio::sync::mpsc;

    fn connector(
        provider: Arc<MockWalletProvider>,
    ) -> (WalletConnector, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let connector = WalletConnector::new(provider, ChainSpec::zenchain_testnet(), Arc::new(tx));
        (connector, rx)
    }

    #[tokio::test]
    async fn test_connect_adopts_first_account_and_adds_chain() {
        let provider = Arc::new(MockWalletProvider::with_account("0xabcdef0123456789"));
        let (connector, mut rx) = connector(provider.clone());

        let address = connector.connect().await.expect("connects");
        assert_eq!(address.as_str(), "0xabcdef0123456789");
        assert!(connector.is_connected());
        assert_eq!(provider.added_chains(), vec!["0x7A69".to_string()]);

        let n = rx.try_recv().expect("success notification");
        assert_eq!(*n.kind(), NotificationKind::Success);
        assert_eq!(n.title(), "Connection Successful");
    }

    #[tokio::test]
    async fn test_network_add_failure_is_swallowed() {
        let provider = Arc::new(MockWalletProvider::with_account("0x01").failing_network_add());
        let (connector, mut rx) = connector(provider.clone());

        assert!(connector.connect().await.is_ok());
        assert!(connector.is_connected());
        assert!(provider.added_chains().is_empty());
        assert_eq!(rx.try_recv().unwrap().title(), "Connection Successful");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_missing_provider() {
        let (connector, mut rx) = connector(Arc::new(MockWalletProvider::absent()));

        assert_eq!(connector.connect().await, Err(WalletError::NoProvider));
        assert!(!connector.is_connected());
        let n = rx.try_recv().unwrap();
        assert_eq!(*n.kind(), NotificationKind::Error);
        assert_eq!(n.message(), "Please install MetaMask wallet");
    }

    #[tokio::test]
    async fn test_rejected_request() {
        let provider = Arc::new(MockWalletProvider::with_account("0x01").rejecting());
        let (connector, mut rx) = connector(provider);

        assert!(matches!(connector.connect().await, Err(WalletError::Rejected(_))));
        assert_eq!(rx.try_recv().unwrap().title(), "Connection Error");
    }

    #[tokio::test]
    async fn test_disconnect_clears_address() {
        let (connector, mut rx) = connector(Arc::new(MockWalletProvider::with_account("0x01")));
        connector.connect().await.unwrap();
        connector.disconnect();

        assert!(!connector.is_connected());
        assert_eq!(connector.address(), None);
        let titles: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok())
            .map(|n| n.title().clone())
            .collect();
        assert_eq!(titles, vec!["Connection Successful", "Disconnected"]);
    }
}
