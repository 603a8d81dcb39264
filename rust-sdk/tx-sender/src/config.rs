use std::sync::{OnceLock, RwLock};
use std::time::Duration;

/// Default interval between two receipt lookups in milliseconds
pub const DEFAULT_RECEIPT_POLL_INTERVAL_MS: u64 = 1_000;

/// Global configuration state
/// The `GlobalConfig` contains the `SendOptions` used when a caller does not pass its own.
static GLOBAL_CONFIG: OnceLock<RwLock<GlobalConfig>> = OnceLock::new();

// Initialize the global config
pub(crate) fn get_global_config() -> &'static RwLock<GlobalConfig> {
    GLOBAL_CONFIG.get_or_init(|| {
        RwLock::new(GlobalConfig {
            send_options: SendOptions::default(),
        })
    })
}

/// Global configuration for transaction sending
///
/// Access and modify it through the global functions like `set_receipt_poll_interval()`.
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    pub send_options: SendOptions,
}

/// How a submitted transaction is followed until it lands.
///
/// There is no timeout by default: confirmation is left to the wallet and the chain, the
/// on-chain deadline of the call bounds how long a transaction can stay pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOptions {
    pub poll_interval_ms: u64,
    pub timeout_ms: Option<u64>,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_RECEIPT_POLL_INTERVAL_MS,
            timeout_ms: None,
        }
    }
}

impl SendOptions {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Set the interval between receipt lookups globally
pub fn set_receipt_poll_interval(interval_ms: u64) -> Result<(), String> {
    if interval_ms == 0 {
        return Err("Receipt poll interval must be greater than zero".to_string());
    }
    let mut config = get_global_config()
        .write()
        .map_err(|e| format!("Lock error: {}", e))?;
    config.send_options.poll_interval_ms = interval_ms;
    Ok(())
}

/// Set (or clear) the confirmation timeout globally
pub fn set_confirmation_timeout(timeout_ms: Option<u64>) -> Result<(), String> {
    let mut config = get_global_config()
        .write()
        .map_err(|e| format!("Lock error: {}", e))?;
    config.send_options.timeout_ms = timeout_ms;
    Ok(())
}

/// Get a copy of the globally configured send options
pub fn get_send_options() -> Result<SendOptions, String> {
    let config = get_global_config()
        .read()
        .map_err(|e| format!("Lock error: {}", e))?;
    Ok(config.send_options.clone())
}

/// Restore the default send options
pub fn reset_send_options() -> Result<(), String> {
    let mut config = get_global_config()
        .write()
        .map_err(|e| format!("Lock error: {}", e))?;
    config.send_options = SendOptions::default();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_global_config() {
        set_receipt_poll_interval(250).unwrap();
        set_confirmation_timeout(Some(5_000)).unwrap();

        let options = get_send_options().unwrap();
        assert_eq!(options.poll_interval_ms, 250);
        assert_eq!(options.timeout(), Some(Duration::from_secs(5)));

        reset_send_options().unwrap();
        assert_eq!(get_send_options().unwrap(), SendOptions::default());
    }

    #[test]
    #[serial]
    fn test_zero_poll_interval_rejected() {
        assert!(set_receipt_poll_interval(0).is_err());
        assert_eq!(
            get_send_options().unwrap().poll_interval_ms,
            DEFAULT_RECEIPT_POLL_INTERVAL_MS
        );
    }

    #[test]
    fn test_send_options_default() {
        let options = SendOptions::default();

        assert_eq!(options.poll_interval_ms, DEFAULT_RECEIPT_POLL_INTERVAL_MS);
        assert_eq!(options.timeout_ms, None);
        assert_eq!(options.timeout(), None);
    }
}
