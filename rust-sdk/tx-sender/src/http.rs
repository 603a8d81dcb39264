use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::broadcast;
use tracing::debug;

use crate::{ProviderError, WalletEvent, WalletProvider, DISCONNECTED, METHOD_NOT_FOUND};

/// Default timeout for a single HTTP request in milliseconds
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 30_000;

const EVENT_CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<ProviderError>,
}

impl JsonRpcResponse {
    /// An `error` member wins over `result`. A missing result reads as `null`.
    fn into_result(self) -> Result<Value, ProviderError> {
        match (self.error, self.result) {
            (Some(error), _) => Err(error),
            (None, result) => Ok(result.unwrap_or(Value::Null)),
        }
    }
}

/// Plain nodes do not implement the wallet permission request.
fn falls_back_to_accounts(method: &str, err: &ProviderError) -> bool {
    method == "eth_requestAccounts" && err.code == METHOD_NOT_FOUND
}

/// A wallet reached over HTTP JSON-RPC.
///
/// Works with wallets that expose EIP-1193 over HTTP (Frame listens on
/// `http://127.0.0.1:1248`) and with development nodes that hold unlocked accounts.
/// HTTP has no push channel, so the event stream never yields anything.
pub struct HttpProvider {
    client: reqwest::Client,
    url: String,
    next_id: AtomicU64,
    events: broadcast::Sender<WalletEvent>,
}

impl HttpProvider {
    pub fn new(url: impl Into<String>) -> Result<Self, ProviderError> {
        Self::new_with_timeout(url, Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS))
    }

    pub fn new_with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::new(DISCONNECTED, format!("HTTP client error: {e}")))?;
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            client,
            url: url.into(),
            next_id: AtomicU64::new(1),
            events,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn send(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        debug!(id, method, url = %self.url, "json-rpc request");

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::new(DISCONNECTED, format!("RPC Error: {e}")))?;
        let response: JsonRpcResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::new(DISCONNECTED, format!("RPC Error: {e}")))?;

        response.into_result()
    }
}

#[async_trait]
impl WalletProvider for HttpProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        match self.send(method, params.clone()).await {
            Err(err) if falls_back_to_accounts(method, &err) => {
                self.send("eth_accounts", json!([])).await
            }
            result => result,
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<WalletEvent> {
        self.events.subscribe()
    }
}
