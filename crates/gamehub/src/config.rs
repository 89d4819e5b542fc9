//! Session configuration loaded from TOML.

use crate::balance::MemoryLedger;
use crate::wallet::{ChainSpec, MockWalletProvider};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Account granted by the stand-in wallet unless configured otherwise.
pub const DEMO_ADDRESS: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

/// Behavior of the stand-in wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletSettings {
    /// Whether a wallet provider is present at all.
    installed: bool,

    /// Account granted on connect.
    address: String,

    /// Reject every account request.
    reject: bool,

    /// Fail the chain suggestion after connecting.
    fail_network_add: bool,
}

impl Default for WalletSettings {
    fn default() -> Self {
        Self {
            installed: true,
            address: DEMO_ADDRESS.to_string(),
            reject: false,
            fail_network_add: false,
        }
    }
}

impl WalletSettings {
    /// Builds the stand-in provider these settings describe.
    #[instrument(skip(self), fields(installed = self.installed))]
    pub fn provider(&self) -> MockWalletProvider {
        if !self.installed {
            return MockWalletProvider::absent();
        }
        let mut provider = MockWalletProvider::with_account(self.address.clone());
        if self.reject {
            provider = provider.rejecting();
        }
        if self.fail_network_add {
            provider = provider.failing_network_add();
        }
        provider
    }
}

/// Configuration for a GameHub session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameHubConfig {
    /// Credits in the mock ledger at session start.
    #[serde(default = "default_starting_balance")]
    starting_balance: u64,

    /// Pause between committing a move and revealing the result.
    #[serde(default = "default_reveal_delay_ms")]
    reveal_delay_ms: u64,

    /// Seed for a reproducible opponent; entropy when absent.
    #[serde(default)]
    opponent_seed: Option<u64>,

    /// Stand-in wallet behavior.
    #[serde(default)]
    wallet: WalletSettings,

    /// Chain suggested to the wallet on connect.
    #[serde(default)]
    chain: ChainSpec,
}

#[instrument]
fn default_starting_balance() -> u64 {
    MemoryLedger::DEFAULT_BALANCE
}

#[instrument]
fn default_reveal_delay_ms() -> u64 {
    2000
}

impl Default for GameHubConfig {
    fn default() -> Self {
        Self {
            starting_balance: default_starting_balance(),
            reveal_delay_ms: default_reveal_delay_ms(),
            opponent_seed: None,
            wallet: WalletSettings::default(),
            chain: ChainSpec::default(),
        }
    }
}

impl GameHubConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(
            starting_balance = config.starting_balance,
            reveal_delay_ms = config.reveal_delay_ms,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Reveal delay as a [`Duration`].
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Overrides the opponent seed.
    pub fn with_opponent_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.opponent_seed = seed;
        }
        self
    }

    /// Overrides the reveal delay.
    pub fn with_reveal_delay_ms(mut self, delay_ms: Option<u64>) -> Self {
        if let Some(delay_ms) = delay_ms {
            self.reveal_delay_ms = delay_ms;
        }
        self
    }

    /// Overrides the wallet address.
    pub fn with_wallet_address(mut self, address: Option<String>) -> Self {
        if let Some(address) = address {
            self.wallet.address = address;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameHubConfig::from_toml("").unwrap();
        assert_eq!(*config.starting_balance(), 100);
        assert_eq!(config.reveal_delay(), Duration::from_millis(2000));
        assert_eq!(*config.opponent_seed(), None);
        assert!(*config.wallet().installed());
        assert_eq!(config.wallet().address(), DEMO_ADDRESS);
        assert_eq!(config, GameHubConfig::default());
        assert_eq!(config.chain().chain_id(), "0x7A69");
    }

    #[test]
    fn test_full_toml() {
        let toml = r#"
            starting_balance = 5
            reveal_delay_ms = 10
            opponent_seed = 42

            [wallet]
            address = "0xabc0000000000000000000000000000000000def"
            fail_network_add = true

            [chain]
            chainId = "0x1"
            chainName = "Devnet"
        "#;
        let config = GameHubConfig::from_toml(toml).unwrap();
        assert_eq!(*config.starting_balance(), 5);
        assert_eq!(*config.opponent_seed(), Some(42));
        assert!(*config.wallet().fail_network_add());
        assert!(!*config.wallet().reject());
        assert_eq!(config.chain().chain_name(), "Devnet");
        assert_eq!(config.chain().chain_id_decimal().unwrap(), 1);
        assert_eq!(config.chain().native_currency().symbol(), "ZEN");
    }

    #[tokio::test]
    async fn test_uninstalled_wallet_builds_absent_provider() {
        use crate::wallet::{WalletError, WalletProvider};

        let config = GameHubConfig::from_toml("[wallet]\ninstalled = false").unwrap();
        let provider = config.wallet().provider();
        assert_eq!(provider.request_accounts().await, Err(WalletError::NoProvider));
    }

    #[test]
    fn test_invalid_toml() {
        let err = GameHubConfig::from_toml("starting_balance = \"lots\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "starting_balance = 3").unwrap();
        let config = GameHubConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.starting_balance(), 3);
    }

    #[test]
    fn test_missing_file() {
        let err = GameHubConfig::from_file("/nonexistent/gamehub.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_overrides() {
        let config = GameHubConfig::default()
            .with_opponent_seed(Some(9))
            .with_reveal_delay_ms(Some(0))
            .with_wallet_address(None);
        assert_eq!(*config.opponent_seed(), Some(9));
        assert_eq!(config.reveal_delay(), Duration::ZERO);
        assert_eq!(config.wallet().address(), DEMO_ADDRESS);
    }
}
