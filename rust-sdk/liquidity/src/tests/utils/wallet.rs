use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy_primitives::{address, Address, Bytes, B256, U256};
use alloy_sol_types::{SolCall, SolValue};
use async_trait::async_trait;
use hogos_tx_sender::{
    ProviderError, SendOptions, WalletEvent, WalletProvider, INTERNAL_ERROR,
    UNRECOGNIZED_CHAIN, UNSUPPORTED_METHOD,
};
use hogos_unpair_client::{
    format_chain_id, parse_chain_id, ILpToken, IRouterV2, LpPool, SONIC_CHAIN_ID,
};
use serde_json::{json, Value};
use tokio::sync::broadcast;

use crate::{LiquidityManager, NotificationBoard};

pub const ACCOUNT: Address = address!("1111111111111111111111111111111111111111");
pub const OTHER_ACCOUNT: Address = address!("2222222222222222222222222222222222222222");

pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;

/// Receipt polling fast enough for tests.
pub fn fast_send_options() -> SendOptions {
    SendOptions {
        poll_interval_ms: 1,
        timeout_ms: None,
    }
}

/// A transaction the wallet was asked to send.
#[derive(Debug, Clone)]
pub struct SentTransaction {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
}

#[derive(Debug)]
struct ChainState {
    accounts: Vec<Address>,
    chain_id: u64,
    known_chains: HashSet<u64>,
    rejected: HashSet<String>,
    balances: HashMap<Address, U256>,
    quotes: HashMap<Address, (U256, U256)>,
    reverting: bool,
    holding_receipts: bool,
    holding_calls: bool,
    pending: HashMap<B256, bool>,
    sent: Vec<SentTransaction>,
    requests: Vec<String>,
}

/// In-memory wallet with a tiny model of the LP token and the router.
///
/// Sent transactions are applied immediately: `removeLiquidity` burns the LP balance.
/// Receipts are answered on the first lookup unless receipts are being held.
pub struct MockWallet {
    state: Mutex<ChainState>,
    events: broadcast::Sender<WalletEvent>,
}

impl MockWallet {
    /// A wallet on Sonic holding no LP tokens.
    pub fn new(account: Address) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            state: Mutex::new(ChainState {
                accounts: vec![account],
                chain_id: SONIC_CHAIN_ID,
                known_chains: HashSet::from([1, SONIC_CHAIN_ID]),
                rejected: HashSet::new(),
                balances: HashMap::new(),
                quotes: HashMap::new(),
                reverting: false,
                holding_receipts: false,
                holding_calls: false,
                pending: HashMap::new(),
                sent: Vec::new(),
                requests: Vec::new(),
            }),
            events,
        }
    }

    pub fn on_chain(self, chain_id: u64) -> Self {
        self.state.lock().unwrap().chain_id = chain_id;
        self
    }

    /// The wallet does not know the Sonic network until it is added.
    pub fn without_sonic(self) -> Self {
        self.state.lock().unwrap().known_chains.remove(&SONIC_CHAIN_ID);
        self
    }

    /// The user declines every `method` request.
    pub fn rejecting(self, method: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .rejected
            .insert(method.to_string());
        self
    }

    pub fn with_position(self, pool: LpPool, balance: U256, amount_a: U256, amount_b: U256) -> Self {
        self.set_position(pool, balance, amount_a, amount_b);
        self
    }

    pub fn reverting(self) -> Self {
        self.state.lock().unwrap().reverting = true;
        self
    }

    pub fn holding_receipts(self) -> Self {
        self.state.lock().unwrap().holding_receipts = true;
        self
    }

    pub fn set_position(&self, pool: LpPool, balance: U256, amount_a: U256, amount_b: U256) {
        let mut state = self.state.lock().unwrap();
        state.balances.insert(pool.lp_token(), balance);
        state.quotes.insert(pool.token_a(), (amount_a, amount_b));
    }

    pub fn set_accounts(&self, accounts: Vec<Address>) {
        self.state.lock().unwrap().accounts = accounts;
    }

    pub fn release_receipts(&self) {
        self.state.lock().unwrap().holding_receipts = false;
    }

    /// Park every `eth_call` until `release_calls`.
    pub fn hold_calls(&self) {
        self.state.lock().unwrap().holding_calls = true;
    }

    pub fn release_calls(&self) {
        self.state.lock().unwrap().holding_calls = false;
    }

    pub fn emit(&self, event: WalletEvent) {
        let _ = self.events.send(event);
    }

    pub fn chain_id(&self) -> u64 {
        self.state.lock().unwrap().chain_id
    }

    pub fn sent(&self) -> Vec<SentTransaction> {
        self.state.lock().unwrap().sent.clone()
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Wait until the wallet has seen `count` requests for `method`.
    pub async fn wait_for_requests(&self, method: &str, count: usize) {
        while self.requests().iter().filter(|m| *m == method).count() < count {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }

    /// Wait until the wallet has been asked to send `count` transactions.
    pub async fn wait_for_sent(&self, count: usize) {
        while self.sent().len() < count {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }

    fn eth_call(state: &ChainState, params: &Value) -> Result<Value, ProviderError> {
        let data = transaction_data(params)?;
        let selector: [u8; 4] = data
            .get(..4)
            .and_then(|selector| selector.try_into().ok())
            .ok_or_else(|| ProviderError::new(INTERNAL_ERROR, "missing selector"))?;
        let to = transaction_address(params, "to")?;

        let encoded = if selector == ILpToken::balanceOfCall::SELECTOR {
            let balance = state.balances.get(&to).copied().unwrap_or_default();
            balance.abi_encode()
        } else if selector == IRouterV2::quoteRemoveLiquidityCall::SELECTOR {
            let call = IRouterV2::quoteRemoveLiquidityCall::abi_decode(&data, true)
                .map_err(|err| ProviderError::new(INTERNAL_ERROR, err.to_string()))?;
            let amounts = state.quotes.get(&call.tokenA).copied().unwrap_or_default();
            amounts.abi_encode_params()
        } else {
            return Err(ProviderError::new(INTERNAL_ERROR, "execution reverted"));
        };
        Ok(json!(Bytes::from(encoded)))
    }

    fn send_transaction(state: &mut ChainState, params: &Value) -> Result<Value, ProviderError> {
        let transaction = SentTransaction {
            from: transaction_address(params, "from")?,
            to: transaction_address(params, "to")?,
            data: transaction_data(params)?,
        };
        if !state.reverting {
            if let Ok(call) = IRouterV2::removeLiquidityCall::abi_decode(&transaction.data, true) {
                let lp_token = LpPool::ALL
                    .into_iter()
                    .find(|pool| pool.token_a() == call.tokenA)
                    .map(|pool| pool.lp_token());
                if let Some(lp_token) = lp_token {
                    state.balances.insert(lp_token, U256::ZERO);
                }
            }
        }

        state.sent.push(transaction);
        let hash = B256::with_last_byte(state.sent.len() as u8);
        state.pending.insert(hash, !state.reverting);
        Ok(json!(hash))
    }

    fn receipt(state: &ChainState, params: &Value) -> Result<Value, ProviderError> {
        let hash: B256 = serde_json::from_value(params[0].clone())
            .map_err(|err| ProviderError::new(INTERNAL_ERROR, err.to_string()))?;
        if state.holding_receipts {
            return Ok(Value::Null);
        }
        Ok(match state.pending.get(&hash) {
            Some(success) => {
                let status = if *success { "0x1" } else { "0x0" };
                json!({
                    "transactionHash": hash,
                    "blockNumber": "0x10",
                    "gasUsed": "0x5208",
                    "status": status,
                })
            }
            None => Value::Null,
        })
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        self.state.lock().unwrap().requests.push(method.to_string());
        loop {
            let held = method == "eth_call" && self.state.lock().unwrap().holding_calls;
            if !held {
                break;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        let mut state = self.state.lock().unwrap();
        if state.rejected.contains(method) {
            return Err(ProviderError::user_rejected());
        }

        match method {
            "eth_requestAccounts" | "eth_accounts" => Ok(json!(state.accounts)),
            "eth_chainId" => Ok(json!(format_chain_id(state.chain_id))),
            "wallet_switchEthereumChain" => {
                let chain_id = params[0]["chainId"]
                    .as_str()
                    .and_then(|chain_id| parse_chain_id(chain_id).ok())
                    .ok_or_else(|| ProviderError::new(INTERNAL_ERROR, "invalid chainId"))?;
                if !state.known_chains.contains(&chain_id) {
                    return Err(ProviderError::new(
                        UNRECOGNIZED_CHAIN,
                        format!("Unrecognized chain ID \"{}\".", format_chain_id(chain_id)),
                    ));
                }
                state.chain_id = chain_id;
                Ok(Value::Null)
            }
            "wallet_addEthereumChain" => {
                let chain_id = params[0]["chainId"]
                    .as_str()
                    .and_then(|chain_id| parse_chain_id(chain_id).ok())
                    .ok_or_else(|| ProviderError::new(INTERNAL_ERROR, "invalid chainId"))?;
                state.known_chains.insert(chain_id);
                Ok(Value::Null)
            }
            "eth_call" => Self::eth_call(&state, &params),
            "eth_sendTransaction" => Self::send_transaction(&mut state, &params),
            "eth_getTransactionReceipt" => Self::receipt(&state, &params),
            _ => Err(ProviderError::new(
                UNSUPPORTED_METHOD,
                format!("unsupported method {method}"),
            )),
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<WalletEvent> {
        self.events.subscribe()
    }
}

fn transaction_address(params: &Value, field: &str) -> Result<Address, ProviderError> {
    serde_json::from_value(params[0][field].clone())
        .map_err(|err| ProviderError::new(INTERNAL_ERROR, format!("{field}: {err}")))
}

fn transaction_data(params: &Value) -> Result<Bytes, ProviderError> {
    serde_json::from_value(params[0]["data"].clone())
        .map_err(|err| ProviderError::new(INTERNAL_ERROR, format!("data: {err}")))
}

/// A manager connected to nothing yet, reporting into a fresh notification board.
pub fn setup(wallet: MockWallet) -> (Arc<MockWallet>, LiquidityManager, Arc<NotificationBoard>) {
    let wallet = Arc::new(wallet);
    let board = Arc::new(NotificationBoard::new());
    let manager = LiquidityManager::new(
        Some(wallet.clone() as Arc<dyn WalletProvider>),
        board.clone(),
    )
    .with_send_options(fast_send_options());
    (wallet, manager, board)
}

pub fn tokens(amount: u128) -> U256 {
    U256::from(amount * ONE_TOKEN)
}
