/// Denominator for values expressed in basis points. 10_000 bps is 100%.
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Largest accepted slippage tolerance, in percent.
pub const MAX_SLIPPAGE_PERCENT: f64 = 100.0;

/// Slippage tolerance applied when nothing else was selected, in percent.
pub const DEFAULT_SLIPPAGE_PERCENT: f64 = 10.0;

/// Slippage tolerances offered as presets, in percent.
pub const SLIPPAGE_OPTIONS: [f64; 5] = [0.5, 1.0, 2.0, 5.0, 10.0];
