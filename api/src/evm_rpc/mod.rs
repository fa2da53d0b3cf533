//! A small JSON-RPC client for the read-only EVM calls the explorer makes.
//!
//! One client talks to one endpoint (normally an Alchemy network URL, see
//! [`crate::chain::Chain::rpc_url`]). Lookups that the node answers with
//! `null` come back as `Ok(None)`.

mod wire;

use std::collections::HashSet;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use alloy_primitives::Address;
use alloy_primitives::B256;
use alloy_primitives::U256;
use alloy_primitives::U64;
use serde::de::DeserializeOwned;
use serde_json::json;
use serde_json::Value;
use thiserror::Error;

pub use wire::AssetTransfersPage;
pub use wire::BlockTransactions;
pub use wire::RpcAssetTransfer;
pub use wire::RpcBlock;
pub use wire::RpcReceipt;
pub use wire::RpcTransaction;

use wire::RpcResponse;

/// Transfer categories requested from `alchemy_getAssetTransfers`.
const TRANSFER_CATEGORIES: [&str; 4] = ["external", "erc20", "erc721", "erc1155"];

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("rpc transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("rpc error {code}: {message}")]
    Server { code: i64, message: String },
    #[error("unexpected rpc result: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct EvmRpcClient {
    url: String,
    http: reqwest::Client,
    next_id: AtomicU64,
}

impl EvmRpcClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: reqwest::Client::new(),
            next_id: AtomicU64::new(1),
        }
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        dioxus_logger::tracing::debug!("rpc -> {method} #{id}");

        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<RpcResponse>()
            .await?;

        if let Some(err) = response.error {
            return Err(RpcError::Server {
                code: err.code,
                message: err.message,
            });
        }
        Ok(serde_json::from_value(response.result)?)
    }

    async fn call_quantity(&self, method: &str, params: Value) -> Result<u64, RpcError> {
        let quantity: U64 = self.call(method, params).await?;
        Ok(quantity.to())
    }

    /// Height of the chain head.
    pub async fn block_number(&self) -> Result<u64, RpcError> {
        self.call_quantity("eth_blockNumber", json!([])).await
    }

    pub async fn chain_id(&self) -> Result<u64, RpcError> {
        self.call_quantity("eth_chainId", json!([])).await
    }

    /// Fetches a block by height, with full transaction objects when
    /// `full_transactions` is set and hashes otherwise.
    pub async fn block_by_number(
        &self,
        number: u64,
        full_transactions: bool,
    ) -> Result<Option<RpcBlock>, RpcError> {
        self.call(
            "eth_getBlockByNumber",
            json!([format!("{number:#x}"), full_transactions]),
        )
        .await
    }

    pub async fn transaction_by_hash(&self, hash: B256) -> Result<Option<RpcTransaction>, RpcError> {
        self.call("eth_getTransactionByHash", json!([hash])).await
    }

    pub async fn transaction_receipt(&self, hash: B256) -> Result<Option<RpcReceipt>, RpcError> {
        self.call("eth_getTransactionReceipt", json!([hash])).await
    }

    /// Balance in wei at the latest block.
    pub async fn balance(&self, address: Address) -> Result<U256, RpcError> {
        self.call("eth_getBalance", json!([address, "latest"])).await
    }

    /// Nonce of the account at the latest block, i.e. the number of
    /// transactions it has sent.
    pub async fn transaction_count(&self, address: Address) -> Result<u64, RpcError> {
        self.call_quantity("eth_getTransactionCount", json!([address, "latest"]))
            .await
    }

    pub async fn gas_price(&self) -> Result<U256, RpcError> {
        self.call("eth_gasPrice", json!([])).await
    }

    /// Recent transfers touching `address`, newest first.
    ///
    /// Alchemy only filters on one side at a time, so the sent and received
    /// pages are requested together and merged.
    pub async fn asset_transfers(
        &self,
        address: Address,
        max_count: u64,
    ) -> Result<Vec<RpcAssetTransfer>, RpcError> {
        let query = |side: &str| {
            json!([{
                "fromBlock": "0x0",
                "toBlock": "latest",
                side: address,
                "category": TRANSFER_CATEGORIES,
                "withMetadata": false,
                "excludeZeroValue": true,
                "maxCount": format!("{max_count:#x}"),
                "order": "desc",
            }])
        };

        let (sent, received) = tokio::join!(
            self.call::<AssetTransfersPage>("alchemy_getAssetTransfers", query("fromAddress")),
            self.call::<AssetTransfersPage>("alchemy_getAssetTransfers", query("toAddress")),
        );

        Ok(merge_transfers(
            sent?.transfers,
            received?.transfers,
            max_count as usize,
        ))
    }
}

/// Identity of a transfer across the sent and received pages.
#[derive(Hash, PartialEq, Eq)]
enum TransferKey<'a> {
    Unique(&'a str),
    Fields {
        hash: B256,
        from: Address,
        to: Option<Address>,
        category: &'a str,
        asset: Option<&'a str>,
        value: Option<u64>,
    },
}

impl<'a> TransferKey<'a> {
    fn of(t: &'a RpcAssetTransfer) -> Self {
        match &t.unique_id {
            Some(id) => Self::Unique(id),
            None => Self::Fields {
                hash: t.hash,
                from: t.from,
                to: t.to,
                category: &t.category,
                asset: t.asset.as_deref(),
                value: t.value.map(f64::to_bits),
            },
        }
    }
}

/// Merges two transfer lists newest first.
///
/// A self-transfer is returned on both sides; its received copy is dropped.
/// Transfers within one list are never merged, so several movements in one
/// transaction all survive.
pub fn merge_transfers(
    sent: Vec<RpcAssetTransfer>,
    received: Vec<RpcAssetTransfer>,
    max_count: usize,
) -> Vec<RpcAssetTransfer> {
    let received: Vec<RpcAssetTransfer> = {
        let sent_keys: HashSet<TransferKey<'_>> = sent.iter().map(TransferKey::of).collect();
        received
            .into_iter()
            .filter(|t| !sent_keys.contains(&TransferKey::of(t)))
            .collect()
    };

    let mut all: Vec<RpcAssetTransfer> = sent.into_iter().chain(received).collect();
    all.sort_by(|a, b| b.block_num.cmp(&a.block_num));
    all.truncate(max_count);
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(block_num: u64, hash_byte: u8, from: u8, to: u8) -> RpcAssetTransfer {
        RpcAssetTransfer {
            block_num: U64::from(block_num),
            unique_id: None,
            hash: B256::repeat_byte(hash_byte),
            from: Address::repeat_byte(from),
            to: Some(Address::repeat_byte(to)),
            value: Some(1.0),
            asset: Some("ETH".to_string()),
            category: "external".to_string(),
        }
    }

    #[test]
    fn merge_orders_newest_first_and_truncates() {
        let sent = vec![transfer(30, 1, 0xaa, 0xbb), transfer(10, 2, 0xaa, 0xbb)];
        let received = vec![transfer(20, 3, 0xcc, 0xaa), transfer(5, 4, 0xcc, 0xaa)];

        let merged = merge_transfers(sent, received, 3);
        let blocks: Vec<u64> = merged.iter().map(|t| t.block_num.to()).collect();
        assert_eq!(blocks, vec![30, 20, 10]);
    }

    #[test]
    fn merge_drops_self_transfer_duplicate() {
        let sent = vec![transfer(7, 9, 0xaa, 0xaa)];
        let received = vec![transfer(7, 9, 0xaa, 0xaa)];

        assert_eq!(merge_transfers(sent, received, 10).len(), 1);
    }

    #[test]
    fn merge_keeps_token_transfers_of_one_transaction() {
        let token = |asset: &str, value: f64| RpcAssetTransfer {
            value: Some(value),
            asset: Some(asset.to_string()),
            category: "erc20".to_string(),
            ..transfer(12, 5, 0xaa, 0xbb)
        };
        let sent = vec![token("USDC", 100.0), token("DAI", 50.0)];

        let merged = merge_transfers(sent, vec![], 10);
        let assets: Vec<_> = merged.iter().map(|t| t.asset.as_deref()).collect();
        assert_eq!(assets, vec![Some("USDC"), Some("DAI")]);
    }

    #[test]
    fn merge_keeps_identical_looking_transfers_with_distinct_ids() {
        let with_id = |id: &str| RpcAssetTransfer {
            unique_id: Some(id.to_string()),
            ..transfer(12, 5, 0xcc, 0xaa)
        };
        let received = vec![with_id("0x05:log:1"), with_id("0x05:log:2")];

        assert_eq!(merge_transfers(vec![], received, 10).len(), 2);
    }

    #[test]
    fn merge_drops_self_transfer_by_unique_id() {
        let self_transfer = RpcAssetTransfer {
            unique_id: Some("0x09:external".to_string()),
            ..transfer(7, 9, 0xaa, 0xaa)
        };

        let merged = merge_transfers(vec![self_transfer.clone()], vec![self_transfer], 10);
        assert_eq!(merged.len(), 1);
    }
}
