use alloy_primitives::Address;
use alloy_primitives::B256;
use serde::Deserialize;
use serde::Serialize;

/// A row of the latest blocks list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSummary {
    pub number: u64,
    pub hash: B256,
    /// Unix seconds.
    pub timestamp: u64,
    pub miner: Address,
    pub transaction_count: usize,
    pub first_transaction: Option<B256>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDetails {
    pub number: u64,
    pub hash: B256,
    pub parent_hash: B256,
    pub timestamp: u64,
    pub miner: Address,
    pub gas_used: u64,
    pub gas_limit: u64,
    /// Absent before London.
    pub base_fee_per_gas: Option<u64>,
    pub transactions: Vec<BlockTransaction>,
}

impl BlockDetails {
    /// Share of the gas limit used, in percent.
    pub fn gas_used_percent(&self) -> f64 {
        if self.gas_limit == 0 {
            return 0.0;
        }
        self.gas_used as f64 * 100.0 / self.gas_limit as f64
    }

    /// Height of the parent block, `None` for genesis.
    pub fn parent_number(&self) -> Option<u64> {
        self.number.checked_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTransaction {
    pub index: usize,
    pub hash: B256,
    /// Known only when the block was fetched with full transactions.
    pub from: Option<Address>,
    /// `None` for contract creation.
    pub to: Option<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(number: u64, gas_used: u64, gas_limit: u64) -> BlockDetails {
        BlockDetails {
            number,
            hash: B256::ZERO,
            parent_hash: B256::ZERO,
            timestamp: 0,
            miner: Address::ZERO,
            gas_used,
            gas_limit,
            base_fee_per_gas: None,
            transactions: vec![],
        }
    }

    #[test]
    fn gas_used_percent() {
        assert_eq!(details(1, 15_000_000, 30_000_000).gas_used_percent(), 50.0);
        assert_eq!(details(1, 0, 0).gas_used_percent(), 0.0);
    }

    #[test]
    fn genesis_has_no_parent() {
        assert_eq!(details(0, 0, 0).parent_number(), None);
        assert_eq!(details(100, 0, 0).parent_number(), Some(99));
    }
}
