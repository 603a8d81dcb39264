use hogos_tx_sender::{ProviderError, TransactionError};
use hogos_unpair_client::ClientError;
use hogos_unpair_core::CoreError;

use crate::OperationKind;

/// Everything that can go wrong while connecting a wallet or running an operation.
///
/// Each variant's message is what the user gets to see in the operation's notification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiquidityError {
    #[error("Please install MetaMask or another Web3 wallet")]
    NoWalletDetected,

    #[error("{0}")]
    NetworkSwitchFailed(String),

    #[error("{0}")]
    UserRejected(String),

    #[error("{0}")]
    ContractCallFailed(String),

    #[error("{0}")]
    InvalidSlippageInput(String),

    #[error("Please connect your wallet first")]
    NotConnected,

    #[error("No LP tokens to use")]
    NoLiquidity,

    #[error("Remove liquidity quote is not available yet")]
    QuoteUnavailable,

    #[error("{0} is already in progress")]
    OperationInProgress(OperationKind),
}

impl From<ProviderError> for LiquidityError {
    fn from(err: ProviderError) -> Self {
        if err.is_user_rejection() {
            Self::UserRejected(err.message)
        } else {
            Self::ContractCallFailed(err.to_string())
        }
    }
}

impl From<TransactionError> for LiquidityError {
    fn from(err: TransactionError) -> Self {
        match err {
            TransactionError::Provider(err) => err.into(),
            err => Self::ContractCallFailed(err.to_string()),
        }
    }
}

impl From<ClientError> for LiquidityError {
    fn from(err: ClientError) -> Self {
        Self::ContractCallFailed(err.to_string())
    }
}

impl From<CoreError> for LiquidityError {
    fn from(err: CoreError) -> Self {
        Self::InvalidSlippageInput(err.to_string())
    }
}
