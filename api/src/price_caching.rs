//! Handles the caching logic for external price provider data.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use tokio::sync::OnceCell;
use tokio::sync::RwLock;

use crate::chain::Chain;
use crate::config::ExplorerConfig;
use crate::fiat_currency::FiatCurrency;
use crate::price_providers::coin_gecko::CoinGecko;
use crate::price_providers::coin_paprika::CoinPaprika;
use crate::price_providers::PriceError;
use crate::price_providers::PriceProvider;
use crate::price_providers::PriceProviderKind;

const CACHE_DURATION: Duration = Duration::from_secs(60);

/// Chains priced as the same coin share an entry.
type CacheKey = (PriceProviderKind, &'static str, FiatCurrency);

#[derive(Clone, Copy, Debug)]
struct CachedPrice {
    price: f64,
    last_fetched: Instant,
}

impl CachedPrice {
    fn fresh(&self, ttl: Duration) -> Option<f64> {
        (self.last_fetched.elapsed() < ttl).then_some(self.price)
    }
}

fn cache_key(kind: PriceProviderKind, chain: Chain, fiat: FiatCurrency) -> CacheKey {
    let coin = match kind {
        PriceProviderKind::CoinGecko => chain.coingecko_id(),
        PriceProviderKind::CoinPaprika => chain.coinpaprika_id(),
    };
    (kind, coin, fiat)
}

/// Spot prices keyed by provider, coin and currency, each kept for `ttl`.
#[derive(Debug)]
pub(crate) struct PriceCache {
    ttl: Duration,
    entries: RwLock<HashMap<CacheKey, CachedPrice>>,
}

impl PriceCache {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The provider is only called when there is no entry for the coin and
    /// currency or the entry is older than the cache's ttl. Failed fetches
    /// are not stored.
    pub(crate) async fn spot_price(
        &self,
        config: &ExplorerConfig,
        kind: PriceProviderKind,
        chain: Chain,
        fiat: FiatCurrency,
    ) -> Result<f64, PriceError> {
        let key = cache_key(kind, chain, fiat);

        let read_lock = self.entries.read().await;
        if let Some(price) = read_lock.get(&key).and_then(|c| c.fresh(self.ttl)) {
            return Ok(price);
        }
        drop(read_lock);

        let mut write_lock = self.entries.write().await;

        // another task may have refreshed the entry while we waited.
        if let Some(price) = write_lock.get(&key).and_then(|c| c.fresh(self.ttl)) {
            return Ok(price);
        }

        let price = match kind {
            PriceProviderKind::CoinGecko => {
                CoinGecko::new(&config.coingecko_url, config.coingecko_api_key.clone())
                    .spot_price(chain, fiat)
                    .await?
            }
            PriceProviderKind::CoinPaprika => {
                CoinPaprika::new(&config.coinpaprika_url)
                    .spot_price(chain, fiat)
                    .await?
            }
        };

        write_lock.insert(
            key,
            CachedPrice {
                price,
                last_fetched: Instant::now(),
            },
        );

        Ok(price)
    }
}

/// Retrieves a spot price through the process wide cache, which keeps
/// entries for `CACHE_DURATION`.
pub async fn get_cached_spot_price(
    config: &ExplorerConfig,
    kind: PriceProviderKind,
    chain: Chain,
    fiat: FiatCurrency,
) -> Result<f64, PriceError> {
    static CACHE: OnceCell<Arc<PriceCache>> = OnceCell::const_new();

    let cache = CACHE
        .get_or_init(|| async { Arc::new(PriceCache::new(CACHE_DURATION)) })
        .await;
    cache.spot_price(config, kind, chain, fiat).await
}
