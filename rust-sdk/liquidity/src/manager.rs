use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use alloy_primitives::{Address, U256};
use hogos_tx_sender::{
    wait_for_receipt, SendOptions, TransactionReceipt, WalletEvent, WalletProvider,
};
use hogos_unpair_client::{ContractCall, LpPool};
use hogos_unpair_core::SlippageConfig;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::{
    config, fetch_position, LiquidityError, LiquidityPosition, Notifier, OperationKind,
    OperationState, OperationStates, SessionChange, WalletSession, WalletSessionManager,
    WalletSigner,
};

#[derive(Debug, Clone, Default)]
struct ManagerState {
    slippage: SlippageConfig,
    active_pool: LpPool,
    positions: [LiquidityPosition; 2],
    operations: OperationStates,
    /// Bumped whenever the session changes under the cached positions.
    generation: u64,
}

impl ManagerState {
    fn new(slippage: SlippageConfig) -> Self {
        Self {
            slippage,
            ..Self::default()
        }
    }

    /// Back to defaults for a new chain. Attempts still waiting for a receipt keep their
    /// in-flight marker until they finish.
    fn reload(&mut self, slippage: SlippageConfig) {
        *self = Self {
            operations: std::mem::take(&mut self.operations),
            generation: self.generation + 1,
            ..Self::new(slippage)
        };
    }

    fn clear_positions(&mut self) {
        self.positions = Default::default();
        self.generation += 1;
    }

    fn position(&self, pool: LpPool) -> &LiquidityPosition {
        &self.positions[pool_index(pool)]
    }

    fn position_mut(&mut self, pool: LpPool) -> &mut LiquidityPosition {
        &mut self.positions[pool_index(pool)]
    }
}

fn pool_index(pool: LpPool) -> usize {
    match pool {
        LpPool::HogOs => 0,
        LpPool::GhogOs => 1,
    }
}

/// Drives claim fees, approve and remove liquidity for the connected wallet.
///
/// All methods take `&self`, so a manager can be shared behind an `Arc` between the task
/// watching wallet events and the one running user actions.
pub struct LiquidityManager {
    session: WalletSessionManager,
    notifier: Arc<dyn Notifier>,
    state: Mutex<ManagerState>,
    send_options: Option<SendOptions>,
}

impl LiquidityManager {
    /// `wallet` is `None` when no wallet is injected; every action then fails with
    /// `NoWalletDetected` or `NotConnected`.
    pub fn new(wallet: Option<Arc<dyn WalletProvider>>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            session: WalletSessionManager::new(wallet, notifier.clone()),
            notifier,
            state: Mutex::new(ManagerState::new(initial_slippage())),
            send_options: None,
        }
    }

    /// Use `options` to wait for receipts instead of the global send options.
    pub fn with_send_options(mut self, options: SendOptions) -> Self {
        self.send_options = Some(options);
        self
    }

    pub fn session_manager(&self) -> &WalletSessionManager {
        &self.session
    }

    pub fn session(&self) -> WalletSession {
        self.session.session()
    }

    pub fn slippage(&self) -> SlippageConfig {
        self.lock().slippage.clone()
    }

    pub fn active_pool(&self) -> LpPool {
        self.lock().active_pool
    }

    pub fn position(&self, pool: LpPool) -> LiquidityPosition {
        *self.lock().position(pool)
    }

    pub fn active_position(&self) -> LiquidityPosition {
        let state = self.lock();
        *state.position(state.active_pool)
    }

    pub fn operation_state(&self, kind: OperationKind) -> OperationState {
        self.lock().operations.get(kind).clone()
    }

    /// Connect the wallet, then load the active pool's position.
    pub async fn connect(&self) -> Result<Address, LiquidityError> {
        let signer = self.session.connect().await?;
        self.lock().generation += 1;
        self.refresh_quietly(self.active_pool()).await;
        Ok(signer.address())
    }

    pub fn disconnect(&self) {
        self.session.disconnect();
        self.clear_positions();
    }

    pub fn select_pool(&self, pool: LpPool) {
        debug!(%pool, "pool selected");
        self.lock().active_pool = pool;
    }

    /// Select one of the preset slippage options.
    pub fn set_slippage_preset(&self, percent: f64) -> Result<(), LiquidityError> {
        let mut state = self.lock();
        state.slippage.set_preset(percent)?;
        Self::apply_slippage(&mut state);
        Ok(())
    }

    /// Apply text typed into the custom slippage field.
    ///
    /// Returns the active slippage percent. Input that is not a number in `(0, 100]` is
    /// refused and the active slippage stays as it was.
    pub fn set_custom_slippage(&self, raw: &str) -> Result<f64, LiquidityError> {
        let mut state = self.lock();
        let percent = state.slippage.set_custom_input(raw)?;
        Self::apply_slippage(&mut state);
        Ok(percent)
    }

    /// The operations offered for the active pool.
    pub fn exposed_operations(&self) -> Vec<OperationKind> {
        let has_liquidity = self.active_position().has_liquidity();
        OperationKind::ALL
            .into_iter()
            .filter(|kind| *kind == OperationKind::ClaimFees || has_liquidity)
            .collect()
    }

    /// Whether `kind` is offered, the wallet is connected and no attempt of it is in flight.
    pub fn is_enabled(&self, kind: OperationKind) -> bool {
        self.exposed_operations().contains(&kind)
            && self.session.is_connected()
            && !self.lock().operations.is_in_flight(kind)
    }

    /// Re-read the active pool's balance and removal quote.
    pub async fn refresh_position(&self) -> Result<LiquidityPosition, LiquidityError> {
        self.refresh_pool(self.active_pool()).await
    }

    /// Re-read the balance and removal quote of `pool`, active or not.
    ///
    /// Reads that complete after a disconnect, account change or chain change are
    /// discarded.
    pub async fn refresh_pool(&self, pool: LpPool) -> Result<LiquidityPosition, LiquidityError> {
        let signer = self.require_signer()?;
        let (slippage_percent, generation) = {
            let state = self.lock();
            (state.slippage.selected_percent(), state.generation)
        };

        let position = fetch_position(&signer, pool, slippage_percent).await?;
        let connected = self.session.is_connected();
        let mut state = self.lock();
        if state.generation != generation {
            debug!(%pool, "discarding position read before the session changed");
            return if connected {
                Ok(*state.position(pool))
            } else {
                Err(LiquidityError::NotConnected)
            };
        }
        // the slippage may have changed while the reads were in flight
        let position = position.with_slippage(state.slippage.selected_percent());
        *state.position_mut(pool) = position;
        Ok(position)
    }

    /// Apply a wallet notification to the session and the cached positions.
    pub async fn handle_wallet_event(
        &self,
        event: WalletEvent,
    ) -> Result<SessionChange, LiquidityError> {
        let change = match self.session.handle_event(event).await {
            Ok(change) => change,
            Err(err) => {
                // a failed reconnect leaves no session to show positions for
                self.clear_positions();
                return Err(err);
            }
        };
        match change {
            SessionChange::Reset => self.clear_positions(),
            SessionChange::Reloaded => {
                let slippage = initial_slippage();
                self.lock().reload(slippage);
            }
            SessionChange::Reconnected => {
                self.clear_positions();
                self.refresh_quietly(self.active_pool()).await;
            }
            SessionChange::Unchanged => {}
        }
        Ok(change)
    }

    /// Feed the wallet's notifications into `handle_wallet_event` until the wallet closes
    /// its event stream.
    pub async fn watch_wallet_events(&self) {
        let Some(wallet) = self.session.wallet() else {
            return;
        };
        let mut events = wallet.subscribe();
        loop {
            match events.recv().await {
                Ok(event) => {
                    if let Err(err) = self.handle_wallet_event(event).await {
                        warn!(error = %err, "failed to apply wallet event");
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "missed wallet events");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }

    pub(crate) fn require_signer(&self) -> Result<WalletSigner, LiquidityError> {
        self.session.signer().ok_or(LiquidityError::NotConnected)
    }

    /// The pool's balance, provided it is known and nonzero.
    pub(crate) fn require_balance(&self, pool: LpPool) -> Result<U256, LiquidityError> {
        let position = self.position(pool);
        match position.balance {
            Some(balance) if !balance.is_zero() => Ok(balance),
            _ => Err(LiquidityError::NoLiquidity),
        }
    }

    /// Mark `kind` in flight, refusing a second concurrent attempt.
    pub(crate) fn begin(&self, kind: OperationKind) -> Result<(), LiquidityError> {
        self.lock().operations.begin(kind)
    }

    /// Report a failed precondition on the operation's notification slot.
    pub(crate) fn report_precondition(
        &self,
        kind: OperationKind,
        err: LiquidityError,
    ) -> LiquidityError {
        self.notifier.error(kind.notification_key(), &err.to_string());
        err
    }

    /// Send `contract_call` and wait until it is included.
    pub(crate) async fn submit(
        &self,
        kind: OperationKind,
        signer: &WalletSigner,
        contract_call: &ContractCall,
        pending_message: &str,
    ) -> Result<TransactionReceipt, LiquidityError> {
        let hash = signer.send(contract_call).await?;
        info!(operation = %kind, %hash, "waiting for confirmation");
        self.notifier
            .loading(kind.notification_key(), pending_message);
        let receipt =
            wait_for_receipt(signer.provider().as_ref(), hash, self.send_options.clone()).await?;
        Ok(receipt)
    }

    /// Record the outcome of an attempt and notify the user about it.
    pub(crate) fn finish<T>(
        &self,
        kind: OperationKind,
        result: Result<T, LiquidityError>,
        success_message: &str,
    ) -> Result<T, LiquidityError> {
        self.lock().operations.finish(kind, &result);
        match &result {
            Ok(_) => self
                .notifier
                .success(kind.notification_key(), success_message),
            Err(err) => {
                warn!(operation = %kind, error = %err, "operation failed");
                self.notifier.error(kind.notification_key(), &err.to_string());
            }
        }
        result
    }

    /// Refresh a position, logging instead of returning a failure.
    pub(crate) async fn refresh_quietly(&self, pool: LpPool) {
        if let Err(err) = self.refresh_pool(pool).await {
            warn!(%pool, error = %err, "failed to refresh position");
        }
    }

    pub(crate) fn clear_position(&self, pool: LpPool) {
        *self.lock().position_mut(pool) = LiquidityPosition::default();
    }

    fn clear_positions(&self) {
        self.lock().clear_positions();
    }

    fn apply_slippage(state: &mut ManagerState) {
        let percent = state.slippage.selected_percent();
        for position in state.positions.iter_mut() {
            *position = position.with_slippage(percent);
        }
    }

    fn lock(&self) -> MutexGuard<'_, ManagerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn initial_slippage() -> SlippageConfig {
    SlippageConfig::new(config::default_slippage_percent()).unwrap_or_default()
}
