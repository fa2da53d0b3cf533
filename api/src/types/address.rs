use alloy_primitives::Address;
use alloy_primitives::B256;
use alloy_primitives::U256;
use serde::Deserialize;
use serde::Serialize;

use crate::chain::Chain;
use crate::fiat_amount::FiatAmount;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressOverview {
    pub chain: Chain,
    pub address: Address,
    /// In wei.
    pub balance: U256,
    /// Transactions sent by the address (its nonce).
    pub transaction_count: u64,
    /// Balance valued at the spot price. `None` when fiat display is off or
    /// no price was available.
    pub fiat_value: Option<FiatAmount>,
    pub transfers: Vec<AssetTransfer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetTransfer {
    pub hash: B256,
    pub block_number: u64,
    pub from: Address,
    pub to: Option<Address>,
    /// In units of `asset`. Absent for NFTs.
    pub value: Option<f64>,
    pub asset: Option<String>,
    /// `external`, `erc20`, `erc721` or `erc1155`.
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDirection {
    In,
    Out,
    ToSelf,
}

impl AssetTransfer {
    pub fn direction(&self, owner: Address) -> TransferDirection {
        match (self.from == owner, self.to == Some(owner)) {
            (true, true) => TransferDirection::ToSelf,
            (true, false) => TransferDirection::Out,
            _ => TransferDirection::In,
        }
    }

    /// e.g. `1.5 USDC`, or the category when there is no amount.
    pub fn amount_label(&self) -> String {
        let asset = self.asset.as_deref().unwrap_or("");
        match self.value {
            Some(v) => format!("{v} {asset}").trim_end().to_string(),
            None => self.category.to_uppercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(from: u8, to: u8, value: Option<f64>) -> AssetTransfer {
        AssetTransfer {
            hash: B256::ZERO,
            block_number: 1,
            from: Address::repeat_byte(from),
            to: Some(Address::repeat_byte(to)),
            value,
            asset: Some("USDC".to_string()),
            category: "erc721".to_string(),
        }
    }

    #[test]
    fn direction_relative_to_owner() {
        let owner = Address::repeat_byte(1);
        assert_eq!(transfer(1, 2, None).direction(owner), TransferDirection::Out);
        assert_eq!(transfer(2, 1, None).direction(owner), TransferDirection::In);
        assert_eq!(transfer(1, 1, None).direction(owner), TransferDirection::ToSelf);
    }

    #[test]
    fn amount_label() {
        assert_eq!(transfer(1, 2, Some(1.5)).amount_label(), "1.5 USDC");
        assert_eq!(transfer(1, 2, None).amount_label(), "ERC721");
    }
}
