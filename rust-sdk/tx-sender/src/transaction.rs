use alloy_primitives::{Address, Bytes, B256};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Instant;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::{
    config, Result, SendOptions, TransactionError, TransactionReceipt, WalletProvider,
};

fn decode<T: DeserializeOwned>(method: &'static str, value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|source| TransactionError::InvalidResponse { method, source })
}

/// Execute a read-only contract call against the latest block
pub async fn call(provider: &dyn WalletProvider, to: Address, data: Bytes) -> Result<Bytes> {
    let result = provider
        .request("eth_call", json!([{ "to": to, "data": data }, "latest"]))
        .await?;
    decode("eth_call", result)
}

/// Ask the wallet to sign and submit a contract call
///
/// Returns as soon as the wallet hands back the transaction hash. The user may reject the
/// request in the wallet, which surfaces as a provider error with code 4001.
pub async fn send_transaction(
    provider: &dyn WalletProvider,
    from: Address,
    to: Address,
    data: Bytes,
) -> Result<B256> {
    let result = provider
        .request(
            "eth_sendTransaction",
            json!([{ "from": from, "to": to, "data": data }]),
        )
        .await?;
    let hash: B256 = decode("eth_sendTransaction", result)?;
    info!(%hash, %to, "transaction submitted");
    Ok(hash)
}

/// Wait until a submitted transaction is included
///
/// Polls `eth_getTransactionReceipt` every `poll_interval_ms`. A receipt with a failed status
/// is reported as `TransactionError::Reverted`. Without a timeout the wait only ends when
/// the receipt shows up.
pub async fn wait_for_receipt(
    provider: &dyn WalletProvider,
    hash: B256,
    options: Option<SendOptions>,
) -> Result<TransactionReceipt> {
    let options = match options {
        Some(options) => options,
        None => config::get_send_options().map_err(TransactionError::ConfigError)?,
    };
    let started = Instant::now();

    loop {
        let result = provider
            .request("eth_getTransactionReceipt", json!([hash]))
            .await?;

        if !result.is_null() {
            let receipt: TransactionReceipt = decode("eth_getTransactionReceipt", result)?;
            if !receipt.is_success() {
                warn!(%hash, "transaction reverted");
                return Err(TransactionError::Reverted(hash));
            }
            info!(%hash, block = ?receipt.block_number, "transaction confirmed");
            return Ok(receipt);
        }

        if let Some(timeout) = options.timeout() {
            if started.elapsed() >= timeout {
                return Err(TransactionError::Timeout { hash, timeout });
            }
        }

        debug!(%hash, "receipt not available yet");
        sleep(options.poll_interval()).await;
    }
}

/// Send a contract call and wait for its receipt using the global send options
pub async fn send_and_confirm(
    provider: &dyn WalletProvider,
    from: Address,
    to: Address,
    data: Bytes,
) -> Result<TransactionReceipt> {
    let hash = send_transaction(provider, from, to, data).await?;
    wait_for_receipt(provider, hash, None).await
}
