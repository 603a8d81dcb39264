use alloy_primitives::U256;

/// Expected and minimum amounts of both underlying tokens for removing liquidity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct RemoveLiquidityQuote {
    pub amount_a: U256,
    pub amount_b: U256,
    pub min_amount_a: U256,
    pub min_amount_b: U256,
}
