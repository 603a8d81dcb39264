use alloy_primitives::U256;

use crate::{compute_min_amount, RemoveLiquidityQuote};

/// Calculate the quote for removing liquidity
///
/// # Parameters
/// - `amount_a` - The router's quoted output of token A
/// - `amount_b` - The router's quoted output of token B
/// - `slippage_percent` - The slippage tolerance in percent
///
/// # Returns
/// - A RemoveLiquidityQuote struct containing the quoted and minimum token amounts
pub fn remove_liquidity_quote(
    amount_a: U256,
    amount_b: U256,
    slippage_percent: f64,
) -> RemoveLiquidityQuote {
    RemoveLiquidityQuote {
        amount_a,
        amount_b,
        min_amount_a: compute_min_amount(amount_a, slippage_percent),
        min_amount_b: compute_min_amount(amount_b, slippage_percent),
    }
}

impl RemoveLiquidityQuote {
    /// Recompute the minimum amounts for a new slippage tolerance.
    pub fn with_slippage(&self, slippage_percent: f64) -> Self {
        remove_liquidity_quote(self.amount_a, self.amount_b, slippage_percent)
    }
}
