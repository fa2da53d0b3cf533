use alloy_primitives::B256;
use alloy_primitives::U256;
use serde::Deserialize;
use serde::Serialize;

use super::block::BlockSummary;
use super::network::NetworkInfo;
use crate::fiat_currency::FiatCurrency;
use crate::market::MarketData;
use crate::price_history::PricePoint;
use crate::price_history::TimeFilter;

/// How many blocks the dashboard lists.
pub const LATEST_BLOCK_COUNT: u64 = 6;

/// How many transactions the dashboard lists.
pub const LATEST_TRANSACTION_COUNT: usize = 6;

/// Everything the dashboard shows for one chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub network: NetworkInfo,
    /// Newest first.
    pub latest_blocks: Vec<BlockSummary>,
    /// Seconds.
    pub average_block_time: Option<f64>,
    /// In wei. `None` for Bitcoin.
    pub gas_price: Option<U256>,
    /// `None` when fiat display is off.
    pub fiat: Option<FiatCurrency>,
    pub spot_price: Option<f64>,
    pub time_filter: TimeFilter,
    pub price_history: Vec<PricePoint>,
    pub market: Option<MarketData>,
}

impl DashboardOverview {
    pub fn latest_transactions(&self) -> Vec<LatestTransaction> {
        latest_transactions(&self.latest_blocks)
    }
}

/// A row of the latest transactions list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestTransaction {
    pub hash: B256,
    pub block_number: u64,
    pub timestamp: u64,
}

/// The first transaction of each block, skipping empty blocks.
pub fn latest_transactions(blocks: &[BlockSummary]) -> Vec<LatestTransaction> {
    blocks
        .iter()
        .filter_map(|b| {
            b.first_transaction.map(|hash| LatestTransaction {
                hash,
                block_number: b.number,
                timestamp: b.timestamp,
            })
        })
        .take(LATEST_TRANSACTION_COUNT)
        .collect()
}

/// Mean gap in seconds between consecutive blocks, in whatever order they
/// are given. `None` for fewer than two blocks.
pub fn average_block_time(blocks: &[BlockSummary]) -> Option<f64> {
    if blocks.len() < 2 {
        return None;
    }
    let total: f64 = blocks
        .windows(2)
        .map(|pair| pair[0].timestamp.abs_diff(pair[1].timestamp) as f64)
        .sum();
    Some(total / (blocks.len() - 1) as f64)
}
