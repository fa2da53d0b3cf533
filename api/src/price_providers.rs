//! Defines traits and implementations for external price data providers.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::chain::Chain;
use crate::fiat_currency::FiatCurrency;
use crate::market::MarketData;
use crate::price_history::PricePoint;
use crate::price_history::TimeFilter;

pub const DEFAULT_COINGECKO_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_COINPAPRIKA_URL: &str = "https://api.coinpaprika.com/v1";

/// Selects which service spot prices come from.
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
pub enum PriceProviderKind {
    #[default]
    CoinGecko,
    CoinPaprika,
}

#[derive(Error, Debug)]
pub enum PriceError {
    #[error("price request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("no {fiat} price for {coin}")]
    Missing { coin: String, fiat: &'static str },
    #[error("empty price history for {0}")]
    EmptyHistory(String),
}

/// A trait for any service that can quote a chain's native asset in fiat.
pub trait PriceProvider {
    /// Fetches the latest price of one unit of the chain's native currency.
    async fn spot_price(&self, chain: Chain, fiat: FiatCurrency) -> Result<f64, PriceError>;
}

/// Provides price data from the public CoinGecko API.
pub mod coin_gecko {
    use super::*;

    #[derive(Deserialize, Debug)]
    struct MarketChartResponse {
        prices: Vec<(f64, f64)>,
    }

    #[derive(Deserialize, Debug)]
    struct CoinResponse {
        #[serde(default)]
        market_data: Option<CoinMarketData>,
    }

    #[derive(Deserialize, Debug)]
    struct CoinMarketData {
        #[serde(default)]
        market_cap: HashMap<String, f64>,
        #[serde(default)]
        total_volume: HashMap<String, f64>,
        total_supply: Option<f64>,
        price_change_percentage_24h: Option<f64>,
    }

    /// CoinGecko v3 client. Sends the demo plan key with every request when
    /// one is configured.
    #[derive(Clone, Debug)]
    pub struct CoinGecko {
        base_url: String,
        api_key: Option<String>,
    }

    impl CoinGecko {
        pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
            Self {
                base_url: base_url.into(),
                api_key,
            }
        }

        async fn get<T: serde::de::DeserializeOwned>(
            &self,
            path: &str,
            query: &[(&str, String)],
        ) -> Result<T, PriceError> {
            let url = format!("{}{path}", self.base_url.trim_end_matches('/'));
            let mut request = reqwest::Client::new().get(url).query(query);
            if let Some(key) = &self.api_key {
                request = request.query(&[("x_cg_demo_api_key", key)]);
            }
            Ok(request.send().await?.error_for_status()?.json::<T>().await?)
        }

        /// Raw `market_chart` samples covering `filter.days()` days.
        pub async fn price_history(
            &self,
            chain: Chain,
            fiat: FiatCurrency,
            filter: TimeFilter,
        ) -> Result<Vec<PricePoint>, PriceError> {
            let coin = chain.coingecko_id();
            let resp: MarketChartResponse = self
                .get(
                    &format!("/coins/{coin}/market_chart"),
                    &[
                        ("vs_currency", fiat.api_code()),
                        ("days", filter.days().to_string()),
                    ],
                )
                .await?;

            if resp.prices.is_empty() {
                return Err(PriceError::EmptyHistory(coin.to_string()));
            }
            Ok(resp
                .prices
                .into_iter()
                .map(|(ts, price)| PricePoint {
                    timestamp_ms: ts as i64,
                    price,
                })
                .collect())
        }

        pub async fn market_data(
            &self,
            chain: Chain,
            fiat: FiatCurrency,
        ) -> Result<MarketData, PriceError> {
            let coin = chain.coingecko_id();
            let resp: CoinResponse = self
                .get(
                    &format!("/coins/{coin}"),
                    &[
                        ("localization", "false".to_string()),
                        ("tickers", "false".to_string()),
                        ("market_data", "true".to_string()),
                        ("community_data", "false".to_string()),
                        ("developer_data", "false".to_string()),
                    ],
                )
                .await?;

            let code = fiat.api_code();
            Ok(resp
                .market_data
                .map(|m| MarketData {
                    fiat,
                    market_cap: m.market_cap.get(&code).copied(),
                    volume_24h: m.total_volume.get(&code).copied(),
                    total_supply: m.total_supply,
                    price_change_24h: m.price_change_percentage_24h,
                })
                .unwrap_or(MarketData {
                    fiat,
                    ..Default::default()
                }))
        }
    }

    impl PriceProvider for CoinGecko {
        async fn spot_price(&self, chain: Chain, fiat: FiatCurrency) -> Result<f64, PriceError> {
            let coin = chain.coingecko_id();
            let code = fiat.api_code();
            let resp: HashMap<String, HashMap<String, f64>> = self
                .get(
                    "/simple/price",
                    &[("ids", coin.to_string()), ("vs_currencies", code.clone())],
                )
                .await?;

            resp.get(coin)
                .and_then(|quotes| quotes.get(&code))
                .copied()
                .ok_or_else(|| PriceError::Missing {
                    coin: coin.to_string(),
                    fiat: fiat.code(),
                })
        }
    }
}

/// Provides spot prices from the CoinPaprika API.
pub mod coin_paprika {
    use super::*;
    use serde_json::Value;

    #[derive(Clone, Debug)]
    pub struct CoinPaprika {
        base_url: String,
    }

    impl CoinPaprika {
        pub fn new(base_url: impl Into<String>) -> Self {
            Self {
                base_url: base_url.into(),
            }
        }
    }

    impl PriceProvider for CoinPaprika {
        async fn spot_price(&self, chain: Chain, fiat: FiatCurrency) -> Result<f64, PriceError> {
            let coin = chain.coinpaprika_id();
            let url = format!("{}/tickers/{coin}", self.base_url.trim_end_matches('/'));

            let resp: Value = reqwest::Client::new()
                .get(url)
                .query(&[("quotes", fiat.code())])
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            // resp["quotes"][code]["price"]
            resp.get("quotes")
                .and_then(|q| q.get(fiat.code()))
                .and_then(|q| q.get("price"))
                .and_then(Value::as_f64)
                .ok_or_else(|| PriceError::Missing {
                    coin: coin.to_string(),
                    fiat: fiat.code(),
                })
        }
    }
}
