//! Gathers provider data into the view-models each page renders.

use alloy_primitives::Address;
use alloy_primitives::B256;
use alloy_primitives::U64;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;
use futures::future::join_all;
use thiserror::Error;

use crate::bitcoin;
use crate::chain::Chain;
use crate::config::ExplorerConfig;
use crate::evm_rpc::BlockTransactions;
use crate::evm_rpc::EvmRpcClient;
use crate::evm_rpc::RpcAssetTransfer;
use crate::evm_rpc::RpcBlock;
use crate::evm_rpc::RpcError;
use crate::evm_rpc::RpcReceipt;
use crate::evm_rpc::RpcTransaction;
use crate::fiat_amount::FiatAmount;
use crate::prefs::display_preference::DisplayPreference;
use crate::price_caching::get_cached_spot_price;
use crate::price_history::chart_series;
use crate::price_history::TimeFilter;
use crate::price_providers::coin_gecko::CoinGecko;
use crate::types::address::AddressOverview;
use crate::types::address::AssetTransfer;
use crate::types::block::BlockDetails;
use crate::types::block::BlockSummary;
use crate::types::block::BlockTransaction;
use crate::types::dashboard::average_block_time;
use crate::types::dashboard::DashboardOverview;
use crate::types::dashboard::LATEST_BLOCK_COUNT;
use crate::types::network::NetworkInfo;
use crate::types::transaction::confirmations;
use crate::types::transaction::ReceiptInfo;
use crate::types::transaction::TransactionDetails;
use crate::units::native_as_f64;

/// How many transfers the address page lists.
pub const MAX_ADDRESS_TRANSFERS: u64 = 10;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("{0} is not supported for this lookup")]
    UnsupportedChain(Chain),
    #[error("block {0} not found")]
    BlockNotFound(u64),
    #[error("transaction {0} not found")]
    TransactionNotFound(B256),
    #[error(transparent)]
    Rpc(#[from] RpcError),
}

pub struct Explorer {
    config: ExplorerConfig,
}

impl Explorer {
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    fn rpc(&self, chain: Chain) -> Result<EvmRpcClient, ExplorerError> {
        let url = match &self.config.evm_rpc_url {
            Some(url) if chain.is_evm() => Some(url.clone()),
            _ => chain.rpc_url(&self.config.alchemy_api_key),
        };
        url.map(EvmRpcClient::new)
            .ok_or(ExplorerError::UnsupportedChain(chain))
    }

    fn coingecko(&self) -> CoinGecko {
        CoinGecko::new(&self.config.coingecko_url, self.config.coingecko_api_key.clone())
    }

    async fn spot_price(&self, chain: Chain, display: DisplayPreference) -> Option<f64> {
        let DisplayPreference::FiatEnabled { fiat, provider } = display else {
            return None;
        };
        get_cached_spot_price(&self.config, provider, chain, fiat)
            .await
            .inspect_err(|e| warn!("spot price for {chain} unavailable: {e}"))
            .ok()
    }

    /// Price, market and chain figures for the dashboard.
    ///
    /// Price data degrades to empty when a price service fails. A failing
    /// chain RPC fails the whole overview.
    pub async fn dashboard_overview(
        &self,
        chain: Chain,
        filter: TimeFilter,
        display: DisplayPreference,
    ) -> Result<DashboardOverview, ExplorerError> {
        let (spot_price, price_history, market) = match display {
            DisplayPreference::NativeOnly => (None, vec![], None),
            DisplayPreference::FiatEnabled { fiat, .. } => {
                let gecko = self.coingecko();
                let (spot, history, market) = tokio::join!(
                    self.spot_price(chain, display),
                    gecko.price_history(chain, fiat, filter),
                    gecko.market_data(chain, fiat),
                );
                let history = history
                    .inspect_err(|e| warn!("price history for {chain} unavailable: {e}"))
                    .unwrap_or_default();
                let market = market
                    .inspect_err(|e| warn!("market data for {chain} unavailable: {e}"))
                    .ok();
                (spot, chart_series(&history, filter, spot), market)
            }
        };

        let (network, latest_blocks, gas_price) = if chain.is_evm() {
            let rpc = self.rpc(chain)?;
            let (head, chain_id, gas_price) =
                tokio::join!(rpc.block_number(), rpc.chain_id(), rpc.gas_price());
            let head = head?;
            let network = NetworkInfo {
                chain,
                chain_id: Some(chain_id?),
                block_number: head,
            };
            let gas_price = gas_price
                .inspect_err(|e| warn!("gas price for {chain} unavailable: {e}"))
                .ok();
            (network, latest_blocks(&rpc, head).await?, gas_price)
        } else {
            let height = bitcoin::fetch_block_height(&self.config.blockstream_url).await;
            let network = NetworkInfo {
                chain,
                chain_id: None,
                block_number: height,
            };
            (network, vec![], None)
        };

        Ok(DashboardOverview {
            network,
            average_block_time: average_block_time(&latest_blocks),
            latest_blocks,
            gas_price,
            fiat: display.fiat(),
            spot_price,
            time_filter: filter,
            price_history,
            market,
        })
    }

    /// A block with its full transaction list.
    pub async fn block_details(
        &self,
        chain: Chain,
        number: u64,
    ) -> Result<BlockDetails, ExplorerError> {
        let block = self
            .rpc(chain)?
            .block_by_number(number, true)
            .await?
            .ok_or(ExplorerError::BlockNotFound(number))?;
        Ok(block_details(block))
    }

    /// A transaction with its receipt. Confirmations count the including
    /// block.
    pub async fn transaction_details(
        &self,
        chain: Chain,
        hash: B256,
    ) -> Result<TransactionDetails, ExplorerError> {
        let rpc = self.rpc(chain)?;
        let (tx, receipt) = tokio::join!(
            rpc.transaction_by_hash(hash),
            rpc.transaction_receipt(hash)
        );
        let tx = tx?.ok_or(ExplorerError::TransactionNotFound(hash))?;

        let head = match receipt? {
            Some(receipt) => Some((rpc.block_number().await?, receipt)),
            None => None,
        };
        Ok(transaction_details(tx, head))
    }

    /// Balance, nonce and recent transfers of an address, valued in fiat when
    /// enabled. A failed transfer lookup leaves the list empty.
    pub async fn address_overview(
        &self,
        chain: Chain,
        address: Address,
        display: DisplayPreference,
    ) -> Result<AddressOverview, ExplorerError> {
        let rpc = self.rpc(chain)?;
        let (balance, transaction_count, transfers, price) = tokio::join!(
            rpc.balance(address),
            rpc.transaction_count(address),
            rpc.asset_transfers(address, MAX_ADDRESS_TRANSFERS),
            self.spot_price(chain, display),
        );
        let balance = balance?;

        let transfers = transfers
            .inspect_err(|e| warn!("transfers of {address} unavailable: {e}"))
            .unwrap_or_default();

        let fiat_value = match (display.fiat(), price, native_as_f64(balance)) {
            (Some(fiat), Some(price), Some(amount)) => {
                Some(FiatAmount::new_from_float(amount * price, fiat))
            }
            _ => None,
        };

        Ok(AddressOverview {
            chain,
            address,
            balance,
            transaction_count: transaction_count?,
            fiat_value,
            transfers: transfers.into_iter().map(asset_transfer).collect(),
        })
    }
}

/// The newest blocks down from `head`, newest first.
///
/// Heights the node does not know yet, or answers with an error, are
/// skipped. Only a transport failure fails the list.
async fn latest_blocks(rpc: &EvmRpcClient, head: u64) -> Result<Vec<BlockSummary>, RpcError> {
    let heights: Vec<u64> = (0..LATEST_BLOCK_COUNT)
        .filter_map(|i| head.checked_sub(i))
        .collect();
    let blocks = join_all(heights.iter().map(|&n| rpc.block_by_number(n, false))).await;

    let mut summaries = Vec::with_capacity(blocks.len());
    for (number, block) in heights.into_iter().zip(blocks) {
        match block {
            Ok(Some(block)) => summaries.push(block_summary(block)),
            Ok(None) => debug!("block {number} missing below head {head}"),
            Err(e @ RpcError::Transport(_)) => return Err(e),
            Err(e) => warn!("skipping block {number}: {e}"),
        }
    }
    summaries.sort_by(|a, b| b.number.cmp(&a.number));
    Ok(summaries)
}

fn block_summary(block: RpcBlock) -> BlockSummary {
    BlockSummary {
        number: block.number.to(),
        hash: block.hash,
        timestamp: block.timestamp.to(),
        miner: block.miner,
        transaction_count: block.transactions.len(),
        first_transaction: block.transactions.first_hash(),
    }
}

fn block_details(block: RpcBlock) -> BlockDetails {
    let transactions = match block.transactions {
        BlockTransactions::Full(txs) => txs
            .into_iter()
            .enumerate()
            .map(|(index, tx)| BlockTransaction {
                index,
                hash: tx.hash,
                from: Some(tx.from),
                to: tx.to,
            })
            .collect(),
        BlockTransactions::Hashes(hashes) => hashes
            .into_iter()
            .enumerate()
            .map(|(index, hash)| BlockTransaction {
                index,
                hash,
                from: None,
                to: None,
            })
            .collect(),
    };

    BlockDetails {
        number: block.number.to(),
        hash: block.hash,
        parent_hash: block.parent_hash,
        timestamp: block.timestamp.to(),
        miner: block.miner,
        gas_used: block.gas_used.to(),
        gas_limit: block.gas_limit.to(),
        base_fee_per_gas: block.base_fee_per_gas.map(|fee| fee.to::<u64>()),
        transactions,
    }
}

fn transaction_details(tx: RpcTransaction, mined: Option<(u64, RpcReceipt)>) -> TransactionDetails {
    let block_number = tx.block_number.map(|n| n.to::<u64>());
    let receipt = mined.map(|(head, receipt)| ReceiptInfo {
        success: receipt.status.map(|s| s == U64::from(1)),
        gas_used: receipt.gas_used.to(),
        confirmations: receipt
            .block_number
            .map(|n| n.to::<u64>())
            .or(block_number)
            .map(|block| confirmations(head, block)),
    });

    TransactionDetails {
        hash: tx.hash,
        block_number,
        from: tx.from,
        to: tx.to,
        value: tx.value,
        gas_price: tx.gas_price,
        nonce: tx.nonce.to(),
        input: tx.input,
        receipt,
    }
}

fn asset_transfer(t: RpcAssetTransfer) -> AssetTransfer {
    AssetTransfer {
        hash: t.hash,
        block_number: t.block_num.to(),
        from: t.from,
        to: t.to,
        value: t.value,
        asset: t.asset,
        category: t.category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    fn rpc_tx(hash: u8, to: Option<Address>) -> RpcTransaction {
        RpcTransaction {
            hash: B256::repeat_byte(hash),
            block_number: Some(U64::from(100)),
            transaction_index: Some(U64::ZERO),
            from: Address::repeat_byte(0xaa),
            to,
            value: U256::from(1u64),
            gas_price: None,
            nonce: U64::from(3),
            input: "0x".to_string(),
        }
    }

    fn rpc_block(transactions: BlockTransactions) -> RpcBlock {
        RpcBlock {
            number: U64::from(100),
            hash: B256::repeat_byte(1),
            parent_hash: B256::repeat_byte(2),
            timestamp: U64::from(1_700_000_000),
            miner: Address::repeat_byte(3),
            gas_used: U64::from(10),
            gas_limit: U64::from(20),
            base_fee_per_gas: Some(U64::from(7)),
            transactions,
        }
    }

    #[test]
    fn full_block_keeps_senders_and_creations() {
        let block = rpc_block(BlockTransactions::Full(vec![
            rpc_tx(0x10, Some(Address::repeat_byte(0xbb))),
            rpc_tx(0x11, None),
        ]));
        let details = block_details(block);
        assert_eq!(details.transactions.len(), 2);
        assert_eq!(details.transactions[0].from, Some(Address::repeat_byte(0xaa)));
        assert_eq!(details.transactions[1].index, 1);
        assert_eq!(details.transactions[1].to, None);
    }

    #[test]
    fn summary_takes_first_transaction() {
        let block = rpc_block(BlockTransactions::Hashes(vec![
            B256::repeat_byte(0x20),
            B256::repeat_byte(0x21),
        ]));
        let summary = block_summary(block);
        assert_eq!(summary.transaction_count, 2);
        assert_eq!(summary.first_transaction, Some(B256::repeat_byte(0x20)));
    }

    #[test]
    fn pending_transaction_has_no_receipt() {
        let details = transaction_details(rpc_tx(1, None), None);
        assert!(details.receipt.is_none());
        assert!(details.status().is_pending());
    }

    #[test]
    fn mined_transaction_counts_confirmations() {
        let receipt = RpcReceipt {
            status: Some(U64::ZERO),
            gas_used: U64::from(21_000),
            block_number: Some(U64::from(100)),
        };
        let details = transaction_details(rpc_tx(1, None), Some((104, receipt)));
        let receipt = details.receipt.unwrap();
        assert_eq!(receipt.confirmations, Some(5));
        assert_eq!(receipt.success, Some(false));
        assert!(details.status().is_failed());
    }
}
