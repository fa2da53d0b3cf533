//! Response shapes of the JSON-RPC methods the explorer calls.

use alloy_primitives::Address;
use alloy_primitives::B256;
use alloy_primitives::U256;
use alloy_primitives::U64;
use serde::Deserialize;

/// `eth_getBlockByNumber` result.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RpcBlock {
    pub number: U64,
    pub hash: B256,
    pub parent_hash: B256,
    pub timestamp: U64,
    pub miner: Address,
    pub gas_used: U64,
    pub gas_limit: U64,
    #[serde(default)]
    pub base_fee_per_gas: Option<U64>,
    pub transactions: BlockTransactions,
}

/// Hashes only, or full objects when the block was requested with `true`.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum BlockTransactions {
    Full(Vec<RpcTransaction>),
    Hashes(Vec<B256>),
}

impl BlockTransactions {
    pub fn len(&self) -> usize {
        match self {
            Self::Full(txs) => txs.len(),
            Self::Hashes(hashes) => hashes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn first_hash(&self) -> Option<B256> {
        match self {
            Self::Full(txs) => txs.first().map(|tx| tx.hash),
            Self::Hashes(hashes) => hashes.first().copied(),
        }
    }
}

/// `eth_getTransactionByHash` result, also the element of full blocks.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    pub hash: B256,
    #[serde(default)]
    pub block_number: Option<U64>,
    #[serde(default)]
    pub transaction_index: Option<U64>,
    pub from: Address,
    pub to: Option<Address>,
    pub value: U256,
    #[serde(default)]
    pub gas_price: Option<U256>,
    pub nonce: U64,
    #[serde(default)]
    pub input: String,
}

/// `eth_getTransactionReceipt` result.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RpcReceipt {
    /// `0x1` success, `0x0` reverted. Absent on pre-Byzantium receipts.
    #[serde(default)]
    pub status: Option<U64>,
    pub gas_used: U64,
    #[serde(default)]
    pub block_number: Option<U64>,
}

/// `alchemy_getAssetTransfers` result.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssetTransfersPage {
    pub transfers: Vec<RpcAssetTransfer>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RpcAssetTransfer {
    pub block_num: U64,
    /// Alchemy's identifier of one transfer, unique even among the
    /// transfers of a single transaction.
    #[serde(default)]
    pub unique_id: Option<String>,
    pub hash: B256,
    pub from: Address,
    pub to: Option<Address>,
    pub value: Option<f64>,
    pub asset: Option<String>,
    pub category: String,
}

#[derive(Deserialize, Debug)]
pub(super) struct RpcResponse {
    #[serde(default)]
    pub result: serde_json::Value,
    pub error: Option<RpcErrorObject>,
}

#[derive(Deserialize, Debug)]
pub(super) struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}
