use alloy_primitives::U256;

/// Amounts above this many base units are rendered as decimals instead of raw integers.
pub const DECIMAL_DISPLAY_THRESHOLD: u64 = 1_000_000_000_000_000;

const DISPLAY_FRACTION_DIGITS: u32 = 6;

/// Format a token amount for display.
///
/// Small amounts are shown as raw base units. Anything above `DECIMAL_DISPLAY_THRESHOLD`
/// is scaled by `decimals` and rounded to six fractional digits.
pub fn format_token_amount(amount: U256, decimals: u8) -> String {
    if amount <= U256::from(DECIMAL_DISPLAY_THRESHOLD) {
        return amount.to_string();
    }

    let ten = U256::from(10u64);
    let display_unit = ten.pow(U256::from(DISPLAY_FRACTION_DIGITS));

    let (mut whole, remainder) = match ten.checked_pow(U256::from(decimals)) {
        Some(unit) => (amount / unit, amount % unit),
        // no U256 amount reaches one whole token
        None => (U256::ZERO, amount),
    };
    let mut fraction = match u32::from(decimals).checked_sub(DISPLAY_FRACTION_DIGITS) {
        Some(shift) => match ten.checked_pow(U256::from(shift)) {
            Some(step) => {
                let quotient = remainder / step;
                if remainder % step >= step - step / U256::from(2) {
                    quotient + U256::from(1)
                } else {
                    quotient
                }
            }
            None => U256::ZERO,
        },
        None => remainder * ten.pow(U256::from(DISPLAY_FRACTION_DIGITS - u32::from(decimals))),
    };
    if fraction >= display_unit {
        whole += U256::from(1);
        fraction -= display_unit;
    }

    format!(
        "{}.{:0>width$}",
        whole,
        fraction.to_string(),
        width = DISPLAY_FRACTION_DIGITS as usize
    )
}
