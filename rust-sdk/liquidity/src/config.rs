use std::{error::Error, sync::Mutex};

use hogos_unpair_core::{is_valid_slippage, DEFAULT_DEADLINE_MINUTES, DEFAULT_SLIPPAGE_PERCENT};

/// The default number of minutes a `removeLiquidity` transaction stays valid.
pub const DEFAULT_REMOVE_LIQUIDITY_DEADLINE_MINUTES: u64 = DEFAULT_DEADLINE_MINUTES;

/// The currently selected deadline for `removeLiquidity`, in minutes from submission.
pub static REMOVE_LIQUIDITY_DEADLINE_MINUTES: Mutex<u64> =
    Mutex::new(DEFAULT_REMOVE_LIQUIDITY_DEADLINE_MINUTES);

/// Sets the deadline for `removeLiquidity`, in minutes from submission.
pub fn set_remove_liquidity_deadline_minutes(minutes: u64) -> Result<(), Box<dyn Error>> {
    if minutes == 0 {
        return Err("Deadline must be at least one minute".into());
    }
    *REMOVE_LIQUIDITY_DEADLINE_MINUTES.try_lock()? = minutes;
    Ok(())
}

/// The default delay between a confirmed removal and the position refresh, in milliseconds.
/// Gives the node serving reads time to catch up with the block that included the removal.
pub const DEFAULT_REFRESH_DELAY_MS: u64 = 2_000;

/// The currently selected delay before refreshing a position after a removal.
pub static REFRESH_DELAY_MS: Mutex<u64> = Mutex::new(DEFAULT_REFRESH_DELAY_MS);

/// Sets the delay before refreshing a position after a removal, in milliseconds.
pub fn set_refresh_delay_ms(delay_ms: u64) -> Result<(), Box<dyn Error>> {
    *REFRESH_DELAY_MS.try_lock()? = delay_ms;
    Ok(())
}

/// The slippage tolerance, in percent, a new `LiquidityManager` starts with.
pub static SLIPPAGE_PERCENT: Mutex<f64> = Mutex::new(DEFAULT_SLIPPAGE_PERCENT);

/// Sets the slippage tolerance new managers start with. Must be in `(0, 100]`.
pub fn set_default_slippage_percent(percent: f64) -> Result<(), Box<dyn Error>> {
    if !is_valid_slippage(percent) {
        return Err(format!("Slippage must be between 0 and 100, got {percent}").into());
    }
    *SLIPPAGE_PERCENT.try_lock()? = percent;
    Ok(())
}

/// Resets the configuration to its default values.
pub fn reset_configuration() -> Result<(), Box<dyn Error>> {
    *REMOVE_LIQUIDITY_DEADLINE_MINUTES.try_lock()? = DEFAULT_REMOVE_LIQUIDITY_DEADLINE_MINUTES;
    *REFRESH_DELAY_MS.try_lock()? = DEFAULT_REFRESH_DELAY_MS;
    *SLIPPAGE_PERCENT.try_lock()? = DEFAULT_SLIPPAGE_PERCENT;
    Ok(())
}

pub(crate) fn deadline_minutes() -> u64 {
    *REMOVE_LIQUIDITY_DEADLINE_MINUTES
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) fn refresh_delay_ms() -> u64 {
    *REFRESH_DELAY_MS
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) fn default_slippage_percent() -> f64 {
    *SLIPPAGE_PERCENT
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
