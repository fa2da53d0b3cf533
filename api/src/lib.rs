//! This crate contains all shared fullstack server functions.

pub mod chain;
pub mod fiat_amount;
pub mod fiat_currency;
pub mod market;
pub mod prefs;
pub mod price_history;
pub mod price_providers;
pub mod search;
pub mod types;
pub mod units;

#[cfg(not(target_arch = "wasm32"))]
pub mod bitcoin;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod evm_rpc;
#[cfg(not(target_arch = "wasm32"))]
pub mod explorer;
#[cfg(not(target_arch = "wasm32"))]
mod price_caching;
#[cfg(not(target_arch = "wasm32"))]
pub mod visits;

use alloy_primitives::Address;
use alloy_primitives::B256;
use chain::Chain;
use dioxus::prelude::*;
use prefs::user_prefs::UserPrefs;
use price_history::TimeFilter;
use types::address::AddressOverview;
use types::block::BlockDetails;
use types::dashboard::DashboardOverview;
use types::transaction::TransactionDetails;

pub type ApiError = anyhow::Error;

/// Retrieves the user's preferences.
///
/// In the future this may read from a settings file.  For now it just
/// returns the default settings, which read from env vars.
#[post("/api/get_user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    Ok(UserPrefs::default())
}

#[post("/api/dashboard_overview")]
pub async fn dashboard_overview(
    chain: Chain,
    filter: TimeFilter,
) -> Result<DashboardOverview, ApiError> {
    let prefs = UserPrefs::default();
    let overview = server::explorer()
        .dashboard_overview(chain, filter, *prefs.display_preference())
        .await?;
    dioxus_logger::tracing::info!(
        "dashboard for {chain}: head {}, {} blocks",
        overview.network.block_number,
        overview.latest_blocks.len()
    );
    Ok(overview)
}

#[post("/api/block_details")]
pub async fn block_details(chain: Chain, number: u64) -> Result<BlockDetails, ApiError> {
    Ok(server::explorer().block_details(chain, number).await?)
}

#[post("/api/transaction_details")]
pub async fn transaction_details(
    chain: Chain,
    hash: B256,
) -> Result<TransactionDetails, ApiError> {
    Ok(server::explorer().transaction_details(chain, hash).await?)
}

#[post("/api/address_overview")]
pub async fn address_overview(chain: Chain, address: Address) -> Result<AddressOverview, ApiError> {
    let prefs = UserPrefs::default();
    Ok(server::explorer()
        .address_overview(chain, address, *prefs.display_preference())
        .await?)
}

/// Counts this visit and returns the new total. Reports 0 when the counter
/// service is unreachable.
#[post("/api/record_visit")]
pub async fn record_visit() -> Result<u64, ApiError> {
    Ok(server::visit_counter()
        .hit()
        .await
        .inspect_err(|e| dioxus_logger::tracing::warn!("visit counter hit failed: {e}"))
        .unwrap_or(0))
}

/// Total visits without counting this one. Reports 0 when the counter service
/// is unreachable.
#[post("/api/visit_count")]
pub async fn visit_count() -> Result<u64, ApiError> {
    Ok(server::visit_counter()
        .count()
        .await
        .inspect_err(|e| dioxus_logger::tracing::warn!("visit counter read failed: {e}"))
        .unwrap_or(0))
}

#[cfg(not(target_arch = "wasm32"))]
mod server {
    use super::config::ExplorerConfig;
    use super::explorer::Explorer;
    use super::visits::VisitCounter;

    // no caching for now. building a client is cheap and env changes are
    // picked up without a restart.
    pub fn explorer() -> Explorer {
        let config = ExplorerConfig::from_env();
        if config.uses_demo_key() {
            dioxus_logger::tracing::debug!("ALCHEMY_API_KEY not set, using the shared demo key");
        }
        Explorer::new(config)
    }

    pub fn visit_counter() -> VisitCounter {
        let config = ExplorerConfig::from_env();
        VisitCounter::new(config.visit_counter_url, config.visit_counter_key)
    }
}
