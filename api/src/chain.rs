//! Defines the networks the explorer can browse.

use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;

/// A network selectable in the explorer, with its provider identifiers and
/// display rules.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Chain {
    #[default]
    Ethereum,
    Polygon,
    Bsc,
    Avalanche,
    Optimism,
    Arbitrum,
    Base,
    Bitcoin,
    Soneium,
}

impl Chain {
    /// Parses a chain id such as `"polygon"`. Unknown ids fall back to Ethereum.
    pub fn from_id(id: &str) -> Self {
        Self::from_str(id.trim()).unwrap_or_default()
    }

    /// The lowercase identifier, e.g. `"bsc"`.
    pub fn id(&self) -> &'static str {
        self.into()
    }

    /// Returns the human readable network name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::Polygon => "Polygon",
            Self::Bsc => "BNB Chain",
            Self::Avalanche => "Avalanche",
            Self::Optimism => "Optimism",
            Self::Arbitrum => "Arbitrum",
            Self::Base => "Base",
            Self::Bitcoin => "Bitcoin",
            Self::Soneium => "Soneium",
        }
    }

    /// Returns the ticker of the currency balances and values are shown in.
    pub fn native_currency(&self) -> &'static str {
        match self {
            Self::Ethereum | Self::Optimism | Self::Arbitrum | Self::Base => "ETH",
            Self::Polygon => "MATIC",
            Self::Bsc => "BNB",
            Self::Avalanche => "AVAX",
            Self::Bitcoin => "BTC",
            Self::Soneium => "SONEIUM",
        }
    }

    /// The CoinGecko coin id whose price stands in for the native currency.
    ///
    /// Rollups that settle in ETH (and Soneium, which has no listing of its
    /// own) are priced as ether.
    pub fn coingecko_id(&self) -> &'static str {
        match self {
            Self::Polygon => "matic-network",
            Self::Bsc => "binancecoin",
            Self::Avalanche => "avalanche-2",
            Self::Bitcoin => "bitcoin",
            Self::Ethereum | Self::Optimism | Self::Arbitrum | Self::Base | Self::Soneium => {
                "ethereum"
            }
        }
    }

    /// The CoinPaprika ticker id for the same asset as [`Chain::coingecko_id`].
    pub fn coinpaprika_id(&self) -> &'static str {
        match self {
            Self::Polygon => "matic-polygon",
            Self::Bsc => "bnb-binance-coin",
            Self::Avalanche => "avax-avalanche",
            Self::Bitcoin => "btc-bitcoin",
            Self::Ethereum | Self::Optimism | Self::Arbitrum | Self::Base | Self::Soneium => {
                "eth-ethereum"
            }
        }
    }

    /// Alchemy's host prefix for this network. `None` for Bitcoin, which is
    /// not an EVM chain and is served by Blockstream instead.
    pub fn alchemy_subdomain(&self) -> Option<&'static str> {
        match self {
            Self::Ethereum => Some("eth-mainnet"),
            Self::Polygon => Some("polygon-mainnet"),
            Self::Bsc => Some("bnb-mainnet"),
            Self::Avalanche => Some("avax-mainnet"),
            Self::Optimism => Some("opt-mainnet"),
            Self::Arbitrum => Some("arb-mainnet"),
            Self::Base => Some("base-mainnet"),
            Self::Soneium => Some("soneium-mainnet"),
            Self::Bitcoin => None,
        }
    }

    pub fn is_evm(&self) -> bool {
        self.alchemy_subdomain().is_some()
    }

    /// JSON-RPC endpoint for this chain, or `None` when the chain has no EVM RPC.
    pub fn rpc_url(&self, alchemy_api_key: &str) -> Option<String> {
        self.alchemy_subdomain()
            .map(|sub| format!("https://{sub}.g.alchemy.com/v2/{alchemy_api_key}"))
    }

    /// Nominal throughput shown on the dashboard.
    pub fn tps_label(&self) -> &'static str {
        match self {
            Self::Bitcoin => "7",
            Self::Ethereum => "15",
            _ => "100+",
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn unknown_ids_fall_back_to_ethereum() {
        assert_eq!(Chain::from_id("polygon"), Chain::Polygon);
        assert_eq!(Chain::from_id("BSC"), Chain::Bsc);
        assert_eq!(Chain::from_id(" base "), Chain::Base);
        assert_eq!(Chain::from_id("dogecoin"), Chain::Ethereum);
        assert_eq!(Chain::from_id(""), Chain::Ethereum);
    }

    #[test]
    fn ids_round_trip_through_from_id() {
        for chain in Chain::iter() {
            assert_eq!(Chain::from_id(chain.id()), chain);
        }
    }

    #[test]
    fn rollups_are_priced_as_ether() {
        assert_eq!(Chain::Optimism.coingecko_id(), "ethereum");
        assert_eq!(Chain::Arbitrum.native_currency(), "ETH");
        assert_eq!(Chain::Bsc.native_currency(), "BNB");
        assert_eq!(Chain::Avalanche.coingecko_id(), "avalanche-2");
    }

    #[test]
    fn bitcoin_has_no_evm_rpc() {
        assert!(!Chain::Bitcoin.is_evm());
        assert_eq!(Chain::Bitcoin.rpc_url("key"), None);
        assert_eq!(
            Chain::Polygon.rpc_url("abc").as_deref(),
            Some("https://polygon-mainnet.g.alchemy.com/v2/abc")
        );
    }

    #[test]
    fn tps_labels() {
        assert_eq!(Chain::Bitcoin.tps_label(), "7");
        assert_eq!(Chain::Ethereum.tps_label(), "15");
        assert_eq!(Chain::Base.tps_label(), "100+");
    }
}
