use alloy_primitives::U256;
use hogos_unpair_client::{
    balance_of_call, decode_balance_of, decode_quote_remove_liquidity,
    quote_remove_liquidity_call, LpPool,
};
use hogos_unpair_core::{remove_liquidity_quote, RemoveLiquidityQuote};
use tracing::debug;

use crate::{LiquidityError, WalletSigner};

/// What the connected account holds in one pool and what removing it would return.
///
/// `balance` is `None` until it has been read. `quote` is only present for a nonzero balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiquidityPosition {
    pub balance: Option<U256>,
    pub quote: Option<RemoveLiquidityQuote>,
}

impl LiquidityPosition {
    /// Whether the balance is known and nonzero.
    pub fn has_liquidity(&self) -> bool {
        self.balance.is_some_and(|balance| !balance.is_zero())
    }

    /// The same position with minimum amounts derived from a new slippage tolerance.
    pub fn with_slippage(&self, slippage_percent: f64) -> Self {
        Self {
            balance: self.balance,
            quote: self.quote.map(|quote| quote.with_slippage(slippage_percent)),
        }
    }
}

/// Read the LP token balance of the signer's account.
pub async fn fetch_lp_balance(signer: &WalletSigner, pool: LpPool) -> Result<U256, LiquidityError> {
    let data = signer
        .call(&balance_of_call(pool, signer.address()))
        .await?;
    Ok(decode_balance_of(&data)?)
}

/// Ask the router what removing `liquidity` from the pool returns, and derive the minimum
/// amounts at `slippage_percent`.
pub async fn fetch_remove_liquidity_quote(
    signer: &WalletSigner,
    pool: LpPool,
    liquidity: U256,
    slippage_percent: f64,
) -> Result<RemoveLiquidityQuote, LiquidityError> {
    let data = signer
        .call(&quote_remove_liquidity_call(pool, liquidity))
        .await?;
    let (amount_a, amount_b) = decode_quote_remove_liquidity(&data)?;
    Ok(remove_liquidity_quote(amount_a, amount_b, slippage_percent))
}

/// Read the balance and, when there is liquidity, the removal quote of a pool.
pub async fn fetch_position(
    signer: &WalletSigner,
    pool: LpPool,
    slippage_percent: f64,
) -> Result<LiquidityPosition, LiquidityError> {
    let balance = fetch_lp_balance(signer, pool).await?;
    debug!(%pool, %balance, "fetched LP balance");
    if balance.is_zero() {
        return Ok(LiquidityPosition {
            balance: Some(balance),
            quote: None,
        });
    }

    let quote = fetch_remove_liquidity_quote(signer, pool, balance, slippage_percent).await?;
    Ok(LiquidityPosition {
        balance: Some(balance),
        quote: Some(quote),
    })
}
