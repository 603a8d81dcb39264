use alloy_primitives::U256;

use crate::BPS_DENOMINATOR;

/// Convert a slippage percentage into basis points.
///
/// The percentage is scaled by 100 and floored. Values outside of `[0, 100]` are clamped,
/// `NaN` is treated as zero.
///
/// # Parameters
/// - `slippage_percent`: The slippage tolerance in percent
///
/// # Returns
/// - `u16`: The slippage tolerance in basis points
pub fn percent_to_bps(slippage_percent: f64) -> u16 {
    let bps = (slippage_percent * 100.0).floor();
    if bps.is_nan() || bps <= 0.0 {
        return 0;
    }
    (bps as u16).min(BPS_DENOMINATOR)
}

/// Calculate the minimum acceptable output for a quoted amount.
///
/// `quoted - floor(quoted * bps / 10_000)` where `bps = floor(slippage_percent * 100)`.
/// Only the percent to bps conversion touches floating point, the token amount is
/// handled in 256-bit integer arithmetic and the product never overflows.
///
/// # Parameters
/// - `quoted`: The quoted output amount in the token's smallest unit
/// - `slippage_percent`: The slippage tolerance in percent, in `(0, 100]`
///
/// # Returns
/// - `U256`: The minimum output amount, never greater than `quoted`
pub fn compute_min_amount(quoted: U256, slippage_percent: f64) -> U256 {
    let bps = U256::from(percent_to_bps(slippage_percent));
    quoted - slippage_deduction(quoted, bps)
}

// quoted = 10_000 * a + r, so floor(quoted * bps / 10_000) = a * bps + floor(r * bps / 10_000)
fn slippage_deduction(quoted: U256, bps: U256) -> U256 {
    let denominator = U256::from(BPS_DENOMINATOR);
    let whole = quoted / denominator;
    let remainder = quoted % denominator;
    whole * bps + remainder * bps / denominator
}
