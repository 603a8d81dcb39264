use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

use alloy_primitives::{Address, Bytes, B256};
use hogos_tx_sender::{call, send_transaction, ProviderError, WalletEvent, WalletProvider};
use hogos_unpair_client::{
    parse_chain_id, sonic_network_params, sonic_switch_params, ContractCall, SONIC_CHAIN_ID,
};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::{LiquidityError, Notifier, NETWORK_SWITCH_NOTIFICATION, WALLET_NOTIFICATION};

/// Handle to the connected wallet that signs and sends transactions for one account.
#[derive(Clone)]
pub struct WalletSigner {
    provider: Arc<dyn WalletProvider>,
    address: Address,
}

impl WalletSigner {
    pub fn new(provider: Arc<dyn WalletProvider>, address: Address) -> Self {
        Self { provider, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn provider(&self) -> &Arc<dyn WalletProvider> {
        &self.provider
    }

    /// Read-only call, answered by the node behind the wallet.
    pub async fn call(&self, contract_call: &ContractCall) -> Result<Bytes, LiquidityError> {
        Ok(call(
            self.provider.as_ref(),
            contract_call.to,
            contract_call.data.clone(),
        )
        .await?)
    }

    /// Ask the wallet to sign and submit `contract_call` from this account.
    pub async fn send(&self, contract_call: &ContractCall) -> Result<B256, LiquidityError> {
        Ok(send_transaction(
            self.provider.as_ref(),
            self.address,
            contract_call.to,
            contract_call.data.clone(),
        )
        .await?)
    }
}

impl fmt::Debug for WalletSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// The connection between the application and the injected wallet.
///
/// `connected` implies `on_expected_network`: a session is only marked connected once the
/// wallet reports the Sonic chain.
#[derive(Clone, Default)]
pub struct WalletSession {
    pub provider: Option<Arc<dyn WalletProvider>>,
    pub signer: Option<WalletSigner>,
    pub account: Option<Address>,
    pub chain_id: Option<u64>,
    pub connected: bool,
    pub connecting: bool,
    pub on_expected_network: bool,
    pub last_error: Option<String>,
}

impl WalletSession {
    fn connected(signer: WalletSigner, chain_id: u64) -> Self {
        Self {
            provider: Some(signer.provider().clone()),
            account: Some(signer.address()),
            signer: Some(signer),
            chain_id: Some(chain_id),
            connected: true,
            connecting: false,
            on_expected_network: chain_id == SONIC_CHAIN_ID,
            last_error: None,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            last_error: Some(message),
            ..Self::default()
        }
    }
}

impl fmt::Debug for WalletSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletSession")
            .field("provider", &self.provider.is_some())
            .field("signer", &self.signer)
            .field("account", &self.account)
            .field("chain_id", &self.chain_id)
            .field("connected", &self.connected)
            .field("connecting", &self.connecting)
            .field("on_expected_network", &self.on_expected_network)
            .field("last_error", &self.last_error)
            .finish()
    }
}

/// What a wallet notification did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChange {
    /// The session was cleared.
    Reset,
    /// A different account became active and the connect flow ran again.
    Reconnected,
    /// Nothing the session cares about changed.
    Unchanged,
    /// The wallet changed chains. The session was cleared and every cached view must be
    /// rebuilt.
    Reloaded,
}

/// Owns the single `WalletSession` of the application and drives the connect flow.
pub struct WalletSessionManager {
    wallet: Option<Arc<dyn WalletProvider>>,
    session: Mutex<WalletSession>,
    notifier: Arc<dyn Notifier>,
}

impl WalletSessionManager {
    /// `wallet` is `None` when no wallet is injected.
    pub fn new(wallet: Option<Arc<dyn WalletProvider>>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            wallet,
            session: Mutex::new(WalletSession::default()),
            notifier,
        }
    }

    pub fn wallet(&self) -> Option<&Arc<dyn WalletProvider>> {
        self.wallet.as_ref()
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> WalletSession {
        self.lock().clone()
    }

    /// The signer of a connected session.
    pub fn signer(&self) -> Option<WalletSigner> {
        let session = self.lock();
        if session.connected {
            session.signer.clone()
        } else {
            None
        }
    }

    pub fn is_connected(&self) -> bool {
        self.lock().connected
    }

    /// Connect the wallet and make sure it is on the Sonic network.
    ///
    /// On failure the session is left disconnected, not connecting, with `last_error` set.
    pub async fn connect(&self) -> Result<WalletSigner, LiquidityError> {
        let Some(wallet) = self.wallet.clone() else {
            return Err(self.fail(LiquidityError::NoWalletDetected));
        };

        self.update(|session| {
            session.connecting = true;
            session.last_error = None;
        });

        match self.establish(wallet).await {
            Ok((signer, chain_id)) => {
                info!(account = %signer.address(), chain_id, "wallet connected");
                *self.lock() = WalletSession::connected(signer.clone(), chain_id);
                self.notifier
                    .success(WALLET_NOTIFICATION, "Wallet connected successfully!");
                Ok(signer)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Forget the session. The wallet itself is not contacted.
    pub fn disconnect(&self) {
        debug!("wallet session reset");
        *self.lock() = WalletSession::default();
    }

    pub async fn handle_event(&self, event: WalletEvent) -> Result<SessionChange, LiquidityError> {
        match event {
            WalletEvent::AccountsChanged(accounts) => {
                let current = self.lock().account;
                match accounts.first() {
                    None => {
                        info!("wallet disconnected all accounts");
                        self.disconnect();
                        Ok(SessionChange::Reset)
                    }
                    Some(account) if current == Some(*account) => Ok(SessionChange::Unchanged),
                    Some(account) => {
                        info!(%account, "wallet account changed");
                        self.connect().await?;
                        Ok(SessionChange::Reconnected)
                    }
                }
            }
            WalletEvent::ChainChanged(chain_id) => {
                info!(%chain_id, "wallet chain changed");
                self.disconnect();
                Ok(SessionChange::Reloaded)
            }
        }
    }

    async fn establish(
        &self,
        wallet: Arc<dyn WalletProvider>,
    ) -> Result<(WalletSigner, u64), LiquidityError> {
        let accounts = wallet.request("eth_requestAccounts", json!([])).await?;
        let account = first_account(accounts)?;

        let mut chain_id = read_chain_id(wallet.as_ref()).await?;
        if chain_id != SONIC_CHAIN_ID {
            chain_id = self.switch_to_sonic(wallet.as_ref(), chain_id).await?;
        }

        Ok((WalletSigner::new(wallet, account), chain_id))
    }

    async fn switch_to_sonic(
        &self,
        wallet: &dyn WalletProvider,
        current_chain_id: u64,
    ) -> Result<u64, LiquidityError> {
        info!(current_chain_id, "switching wallet to Sonic");
        self.notifier
            .loading(NETWORK_SWITCH_NOTIFICATION, "Switching to Sonic network...");

        match request_sonic(wallet).await {
            Ok(chain_id) => {
                self.notifier.success(
                    NETWORK_SWITCH_NOTIFICATION,
                    "Successfully switched to Sonic network",
                );
                Ok(chain_id)
            }
            Err(err) => {
                self.notifier.error(
                    NETWORK_SWITCH_NOTIFICATION,
                    "Please switch to Sonic network manually in your wallet",
                );
                Err(err)
            }
        }
    }

    fn fail(&self, err: LiquidityError) -> LiquidityError {
        warn!(error = %err, "wallet connection failed");
        *self.lock() = WalletSession::failed(err.to_string());
        self.notifier.error(WALLET_NOTIFICATION, &err.to_string());
        err
    }

    fn update(&self, f: impl FnOnce(&mut WalletSession)) {
        f(&mut self.lock());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, WalletSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Switch to Sonic, adding the network first when the wallet does not know it, and return
/// the chain the wallet ends up on.
async fn request_sonic(wallet: &dyn WalletProvider) -> Result<u64, LiquidityError> {
    if let Err(err) = switch_chain(wallet).await {
        if !err.is_unrecognized_chain() {
            return Err(LiquidityError::NetworkSwitchFailed(format!(
                "Failed to switch to Sonic network: {err}"
            )));
        }

        debug!("Sonic network unknown to the wallet, adding it");
        wallet
            .request("wallet_addEthereumChain", json!([sonic_network_params()]))
            .await
            .map_err(|err| {
                LiquidityError::NetworkSwitchFailed(format!(
                    "Failed to add Sonic network: {err}"
                ))
            })?;
        switch_chain(wallet).await.map_err(|err| {
            LiquidityError::NetworkSwitchFailed(format!(
                "Failed to switch to Sonic network: {err}"
            ))
        })?;
    }

    let chain_id = read_chain_id(wallet).await?;
    if chain_id != SONIC_CHAIN_ID {
        return Err(LiquidityError::NetworkSwitchFailed(format!(
            "Failed to switch to Sonic network, wallet is on chain {chain_id}"
        )));
    }
    Ok(chain_id)
}

async fn switch_chain(wallet: &dyn WalletProvider) -> Result<Value, ProviderError> {
    wallet
        .request("wallet_switchEthereumChain", json!([sonic_switch_params()]))
        .await
}

async fn read_chain_id(wallet: &dyn WalletProvider) -> Result<u64, LiquidityError> {
    let value = wallet.request("eth_chainId", json!([])).await?;
    let chain_id = value.as_str().ok_or_else(|| {
        LiquidityError::ContractCallFailed(format!("Unexpected eth_chainId response: {value}"))
    })?;
    Ok(parse_chain_id(chain_id)?)
}

fn first_account(accounts: Value) -> Result<Address, LiquidityError> {
    let accounts: Vec<Address> = serde_json::from_value(accounts).map_err(|err| {
        LiquidityError::ContractCallFailed(format!("Unexpected eth_requestAccounts response: {err}"))
    })?;
    accounts
        .first()
        .copied()
        .ok_or_else(|| LiquidityError::UserRejected("No accounts found".to_string()))
}
