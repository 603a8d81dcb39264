use alloy_primitives::Address;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::broadcast;

/// The user rejected the request.
pub const USER_REJECTED_REQUEST: i64 = 4001;

/// The requested method and/or account has not been authorized by the user.
pub const UNAUTHORIZED: i64 = 4100;

/// The provider does not support the requested method.
pub const UNSUPPORTED_METHOD: i64 = 4200;

/// The provider is disconnected from all chains.
pub const DISCONNECTED: i64 = 4900;

/// The chain has not been added to the wallet.
pub const UNRECOGNIZED_CHAIN: i64 = 4902;

pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INTERNAL_ERROR: i64 = -32603;

const UNRECOGNIZED_CHAIN_MESSAGE: &str = "Unrecognized chain";

/// Error returned by a wallet provider, shaped like an EIP-1193 `ProviderRpcError`.
#[derive(Debug, Clone, PartialEq, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ProviderError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

impl ProviderError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn user_rejected() -> Self {
        Self::new(USER_REJECTED_REQUEST, "User rejected the request.")
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == USER_REJECTED_REQUEST || self.nested_code() == Some(USER_REJECTED_REQUEST)
    }

    /// Whether the wallet does not know the chain it was asked to switch to.
    ///
    /// Some wallets wrap the 4902 error into an internal error and only keep the original
    /// code in `data.originalError.code`, others only say so in the message.
    pub fn is_unrecognized_chain(&self) -> bool {
        self.code == UNRECOGNIZED_CHAIN
            || self.nested_code() == Some(UNRECOGNIZED_CHAIN)
            || self.message.contains(UNRECOGNIZED_CHAIN_MESSAGE)
    }

    fn nested_code(&self) -> Option<i64> {
        self.data
            .as_ref()?
            .get("originalError")?
            .get("code")?
            .as_i64()
    }
}

/// Notifications pushed by the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// The accounts exposed to the page changed. An empty list means the page lost access.
    AccountsChanged(Vec<Address>),
    /// The wallet switched chains. Carries the new chain id as reported by the wallet.
    ChainChanged(String),
}

/// A wallet injected into the application.
///
/// Requests follow EIP-1193: `method` is a JSON-RPC method name and `params` its
/// positional parameters. Wallet methods (`eth_requestAccounts`,
/// `wallet_switchEthereumChain`, ...) and node methods (`eth_call`,
/// `eth_sendTransaction`, ...) go through the same entry point.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;

    /// Subscribe to `accountsChanged` and `chainChanged` notifications.
    fn subscribe(&self) -> broadcast::Receiver<WalletEvent>;
}
