pub const SECONDS_PER_MINUTE: u64 = 60;

/// Minutes between building a remove-liquidity transaction and its on-chain deadline.
pub const DEFAULT_DEADLINE_MINUTES: u64 = 10;
