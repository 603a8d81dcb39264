use std::time::Duration;

use alloy_primitives::B256;

use crate::ProviderError;

/// Errors that can occur while calling contracts and sending transactions
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    #[error("{0}")]
    Provider(#[from] ProviderError),

    #[error("Transaction {0} reverted")]
    Reverted(B256),

    #[error("Transaction {hash} not confirmed after {timeout:?}")]
    Timeout { hash: B256, timeout: Duration },

    #[error("Unexpected response to {method}: {source}")]
    InvalidResponse {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid Configuration: {0}")]
    ConfigError(String),
}

impl TransactionError {
    /// Whether the wallet user declined the request.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Self::Provider(err) if err.is_user_rejection())
    }
}

/// Result type for transaction operations
pub type Result<T> = std::result::Result<T, TransactionError>;
