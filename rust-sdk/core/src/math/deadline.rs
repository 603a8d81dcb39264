use std::time::{SystemTime, UNIX_EPOCH};

use crate::SECONDS_PER_MINUTE;

/// Current unix time in seconds.
pub fn current_unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

/// Calculate a transaction deadline relative to a given time.
///
/// # Parameters
/// - `now`: The reference unix timestamp in seconds
/// - `minutes_from_now`: Minutes until the deadline
///
/// # Returns
/// - `u64`: The deadline as a unix timestamp in seconds
pub fn deadline_from(now: u64, minutes_from_now: u64) -> u64 {
    now.saturating_add(minutes_from_now.saturating_mul(SECONDS_PER_MINUTE))
}

/// Calculate a transaction deadline relative to the current time.
///
/// The value has to be computed right before the transaction that consumes it is built,
/// a stale deadline makes the contract revert.
pub fn deadline(minutes_from_now: u64) -> u64 {
    deadline_from(current_unix_timestamp(), minutes_from_now)
}
