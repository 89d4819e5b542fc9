//! Custom chain description suggested to the wallet.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use tracing::instrument;

/// Native currency of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct NativeCurrency {
    name: String,
    symbol: String,
    decimals: u8,
}

/// Parameters of a `wallet_addEthereumChain` request.
///
/// Field names serialize in the camelCase shape wallets expect, and
/// missing fields default to Zenchain Testnet.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChainSpec {
    /// Hex chain id, e.g. `0x7A69`.
    chain_id: String,
    chain_name: String,
    native_currency: NativeCurrency,
    rpc_urls: Vec<String>,
    block_explorer_urls: Vec<String>,
}

impl ChainSpec {
    /// The Zenchain test network.
    #[instrument]
    pub fn zenchain_testnet() -> Self {
        Self {
            chain_id: "0x7A69".to_string(),
            chain_name: "Zenchain Testnet".to_string(),
            native_currency: NativeCurrency {
                name: "ZEN".to_string(),
                symbol: "ZEN".to_string(),
                decimals: 18,
            },
            rpc_urls: vec!["https://zenchain-testnet.api.onfinality.io/public".to_string()],
            block_explorer_urls: vec!["https://explorer.zenchain.io".to_string()],
        }
    }

    /// Parses the hex chain id into its decimal value.
    #[instrument(skip(self), fields(chain_id = %self.chain_id))]
    pub fn chain_id_decimal(&self) -> Result<u64, ParseIntError> {
        let digits = self
            .chain_id
            .strip_prefix("0x")
            .or_else(|| self.chain_id.strip_prefix("0X"))
            .unwrap_or(&self.chain_id);
        u64::from_str_radix(digits, 16)
    }

    /// Builds the JSON `params` array of the add-chain request.
    pub fn rpc_params(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value([self])
    }

    /// First block explorer, if any.
    pub fn explorer_url(&self) -> Option<&str> {
        self.block_explorer_urls.first().map(String::as_str)
    }
}

impl Default for ChainSpec {
    fn default() -> Self {
        Self::zenchain_testnet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zenchain_chain_id_decimal() {
        assert_eq!(ChainSpec::zenchain_testnet().chain_id_decimal().unwrap(), 31337);
    }

    #[test]
    fn test_rpc_params_shape() {
        let params = ChainSpec::zenchain_testnet().rpc_params().unwrap();
        let entry = &params[0];
        assert_eq!(entry["chainId"], "0x7A69");
        assert_eq!(entry["chainName"], "Zenchain Testnet");
        assert_eq!(entry["nativeCurrency"]["decimals"], 18);
        assert_eq!(entry["blockExplorerUrls"][0], "https://explorer.zenchain.io");
    }

    #[test]
    fn test_missing_fields_default_to_zenchain() {
        let spec: ChainSpec = serde_json::from_str(r#"{"chainName": "Local"}"#).unwrap();
        assert_eq!(spec.chain_name(), "Local");
        assert_eq!(spec.chain_id(), "0x7A69");
        assert_eq!(spec.native_currency().symbol(), "ZEN");
    }
}
