use alloy_primitives::{B256, U256, U64};
use serde::Deserialize;

/// The fields of an `eth_getTransactionReceipt` result the SDK looks at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: B256,
    #[serde(default)]
    pub block_number: Option<U64>,
    #[serde(default)]
    pub gas_used: Option<U256>,
    /// `1` for success, `0` for a revert. Missing on pre-Byzantium chains.
    #[serde(default)]
    pub status: Option<U64>,
}

impl TransactionReceipt {
    pub fn is_success(&self) -> bool {
        self.status.map_or(true, |status| status == U64::from(1))
    }
}
