use alloy_primitives::Address;
use alloy_primitives::B256;
use alloy_primitives::U256;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDetails {
    pub hash: B256,
    /// `None` while pending.
    pub block_number: Option<u64>,
    pub from: Address,
    /// `None` for contract creation.
    pub to: Option<Address>,
    /// In wei.
    pub value: U256,
    pub gas_price: Option<U256>,
    pub nonce: u64,
    /// Hex encoded calldata.
    pub input: String,
    pub receipt: Option<ReceiptInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptInfo {
    /// `None` on receipts that predate the status field.
    pub success: Option<bool>,
    pub gas_used: u64,
    pub confirmations: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum TxStatus {
    Success,
    Failed,
    Pending,
}

impl TransactionDetails {
    pub fn status(&self) -> TxStatus {
        match self.receipt {
            None => TxStatus::Pending,
            Some(ReceiptInfo {
                success: Some(false),
                ..
            }) => TxStatus::Failed,
            Some(_) => TxStatus::Success,
        }
    }

    /// True when the transaction carries calldata.
    pub fn has_input(&self) -> bool {
        !self.input.is_empty() && self.input != "0x"
    }

    /// Deployments carry no recipient.
    pub fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }
}

/// Number of blocks, inclusive, from `block` to the chain head.
pub fn confirmations(head: u64, block: u64) -> u64 {
    head.saturating_sub(block) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(input: &str, receipt: Option<ReceiptInfo>) -> TransactionDetails {
        TransactionDetails {
            hash: B256::ZERO,
            block_number: receipt.map(|_| 10),
            from: Address::ZERO,
            to: None,
            value: U256::ZERO,
            gas_price: None,
            nonce: 0,
            input: input.to_string(),
            receipt,
        }
    }

    fn receipt(success: Option<bool>) -> Option<ReceiptInfo> {
        Some(ReceiptInfo {
            success,
            gas_used: 21_000,
            confirmations: Some(1),
        })
    }

    #[test]
    fn status_from_receipt() {
        assert_eq!(tx("0x", None).status(), TxStatus::Pending);
        assert_eq!(tx("0x", receipt(Some(true))).status(), TxStatus::Success);
        assert_eq!(tx("0x", receipt(Some(false))).status(), TxStatus::Failed);
        assert_eq!(tx("0x", receipt(None)).status(), TxStatus::Success);
    }

    #[test]
    fn empty_input_is_hidden() {
        assert!(!tx("0x", None).has_input());
        assert!(!tx("", None).has_input());
        assert!(tx("0xa9059cbb", None).has_input());
    }

    #[test]
    fn missing_recipient_is_contract_creation() {
        let creation = tx("0x6080", None);
        assert!(creation.is_contract_creation());

        let transfer = TransactionDetails {
            to: Some(Address::repeat_byte(0xbb)),
            ..creation
        };
        assert!(!transfer.is_contract_creation());
    }

    #[test]
    fn confirmations_count_the_including_block() {
        assert_eq!(confirmations(100, 100), 1);
        assert_eq!(confirmations(100, 90), 11);
        // node answered from a head older than the receipt
        assert_eq!(confirmations(99, 100), 1);
    }
}
