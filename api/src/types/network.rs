use serde::Deserialize;
use serde::Serialize;

use crate::chain::Chain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub chain: Chain,
    /// EIP-155 chain id. `None` for Bitcoin.
    pub chain_id: Option<u64>,
    pub block_number: u64,
}

impl NetworkInfo {
    /// The numeric chain id, or the chain's name id when it has none.
    pub fn chain_id_label(&self) -> String {
        match self.chain_id {
            Some(id) => id.to_string(),
            None => self.chain.id().to_string(),
        }
    }
}
