use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;

use crate::{ClientError, ILpToken, IRouterV2, LpPool, ROUTER_V2};

/// A contract call ready to be passed to `eth_call` or `eth_sendTransaction`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractCall {
    pub to: Address,
    pub data: Bytes,
}

impl ContractCall {
    fn new(to: Address, call: impl SolCall) -> Self {
        Self {
            to,
            data: call.abi_encode().into(),
        }
    }
}

/// Arguments of `removeLiquidity` that change per call. Token addresses and the stable flag
/// come from the pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoveLiquidityArgs {
    pub liquidity: U256,
    pub amount_a_min: U256,
    pub amount_b_min: U256,
    pub to: Address,
    pub deadline: u64,
}

pub fn balance_of_call(pool: LpPool, account: Address) -> ContractCall {
    ContractCall::new(pool.lp_token(), ILpToken::balanceOfCall { account })
}

/// Approve the router to spend `amount` of the pool's LP token.
pub fn approve_router_call(pool: LpPool, amount: U256) -> ContractCall {
    ContractCall::new(
        pool.lp_token(),
        ILpToken::approveCall {
            spender: ROUTER_V2,
            amount,
        },
    )
}

pub fn claim_fees_call(pool: LpPool) -> ContractCall {
    ContractCall::new(pool.lp_token(), ILpToken::claimFeesCall {})
}

pub fn quote_remove_liquidity_call(pool: LpPool, liquidity: U256) -> ContractCall {
    ContractCall::new(
        ROUTER_V2,
        IRouterV2::quoteRemoveLiquidityCall {
            tokenA: pool.token_a(),
            tokenB: pool.token_b(),
            stable: pool.stable(),
            liquidity,
        },
    )
}

pub fn remove_liquidity_call(pool: LpPool, args: &RemoveLiquidityArgs) -> ContractCall {
    ContractCall::new(
        ROUTER_V2,
        IRouterV2::removeLiquidityCall {
            tokenA: pool.token_a(),
            tokenB: pool.token_b(),
            stable: pool.stable(),
            liquidity: args.liquidity,
            amountAMin: args.amount_a_min,
            amountBMin: args.amount_b_min,
            to: args.to,
            deadline: U256::from(args.deadline),
        },
    )
}

pub fn decode_balance_of(data: &[u8]) -> Result<U256, ClientError> {
    ILpToken::balanceOfCall::abi_decode_returns(data, true)
        .map(|decoded| decoded._0)
        .map_err(|source| ClientError::Decode {
            function: "balanceOf",
            source,
        })
}

/// Decode the `(amountA, amountB)` returned by `quoteRemoveLiquidity`.
pub fn decode_quote_remove_liquidity(data: &[u8]) -> Result<(U256, U256), ClientError> {
    IRouterV2::quoteRemoveLiquidityCall::abi_decode_returns(data, true)
        .map(|decoded| (decoded.amountA, decoded.amountB))
        .map_err(|source| ClientError::Decode {
            function: "quoteRemoveLiquidity",
            source,
        })
}
