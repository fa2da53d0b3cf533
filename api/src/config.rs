//! Server-side settings for the hosted services the explorer reads from.

use std::env;

use crate::bitcoin::DEFAULT_BLOCKSTREAM_URL;
use crate::price_providers::DEFAULT_COINGECKO_URL;
use crate::price_providers::DEFAULT_COINPAPRIKA_URL;
use crate::visits::default_counter_key;
use crate::visits::DEFAULT_COUNTER_URL;

/// Alchemy's shared, heavily rate limited key.
pub const DEMO_ALCHEMY_KEY: &str = "demo";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerConfig {
    pub alchemy_api_key: String,
    /// Replaces the Alchemy endpoint of every EVM network when set.
    pub evm_rpc_url: Option<String>,
    pub coingecko_api_key: Option<String>,
    pub coingecko_url: String,
    pub coinpaprika_url: String,
    pub blockstream_url: String,
    pub visit_counter_url: String,
    pub visit_counter_key: String,
}

impl ExplorerConfig {
    /// Reads the configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `ALCHEMY_API_KEY`: defaults to the public `demo` key.
    /// - `EVM_RPC_URL`: one JSON-RPC endpoint used for all EVM networks
    ///   instead of Alchemy.
    /// - `COINGECKO_API_KEY`: optional demo plan key.
    /// - `VISIT_COUNTER_KEY`: CountAPI namespace.
    /// - `COINGECKO_URL`, `COINPAPRIKA_URL`, `BLOCKSTREAM_URL`,
    ///   `VISIT_COUNTER_URL`: base URL overrides.
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());

        Self {
            alchemy_api_key: var("ALCHEMY_API_KEY").unwrap_or_else(|| DEMO_ALCHEMY_KEY.to_string()),
            evm_rpc_url: var("EVM_RPC_URL"),
            coingecko_api_key: var("COINGECKO_API_KEY"),
            coingecko_url: var("COINGECKO_URL").unwrap_or_else(|| DEFAULT_COINGECKO_URL.to_string()),
            coinpaprika_url: var("COINPAPRIKA_URL")
                .unwrap_or_else(|| DEFAULT_COINPAPRIKA_URL.to_string()),
            blockstream_url: var("BLOCKSTREAM_URL")
                .unwrap_or_else(|| DEFAULT_BLOCKSTREAM_URL.to_string()),
            visit_counter_url: var("VISIT_COUNTER_URL")
                .unwrap_or_else(|| DEFAULT_COUNTER_URL.to_string()),
            visit_counter_key: var("VISIT_COUNTER_KEY")
                .unwrap_or_else(|| default_counter_key().to_string()),
        }
    }

    pub fn uses_demo_key(&self) -> bool {
        self.alchemy_api_key == DEMO_ALCHEMY_KEY
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
