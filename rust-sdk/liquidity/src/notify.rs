use std::{
    collections::BTreeMap,
    sync::{Mutex, PoisonError},
};

use tracing::{info, warn};

/// Notification slot for the result of connecting a wallet.
pub const WALLET_NOTIFICATION: &str = "wallet";

/// Notification slot for switching or adding the Sonic network.
pub const NETWORK_SWITCH_NOTIFICATION: &str = "network-switch";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Loading,
    Success,
    Error,
}

/// A user-facing status message. A newer notification with the same key replaces the
/// previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub key: String,
    pub level: NotificationLevel,
    pub message: String,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn loading(&self, key: &str, message: &str) {
        self.notify(Notification {
            key: key.to_string(),
            level: NotificationLevel::Loading,
            message: message.to_string(),
        });
    }

    fn success(&self, key: &str, message: &str) {
        self.notify(Notification {
            key: key.to_string(),
            level: NotificationLevel::Success,
            message: message.to_string(),
        });
    }

    fn error(&self, key: &str, message: &str) {
        self.notify(Notification {
            key: key.to_string(),
            level: NotificationLevel::Error,
            message: message.to_string(),
        });
    }
}

/// Keeps the latest notification of every key and logs each one as it arrives.
#[derive(Debug, Default)]
pub struct NotificationBoard {
    latest: Mutex<BTreeMap<String, Notification>>,
}

impl NotificationBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Notification> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Every visible notification, ordered by key.
    pub fn all(&self) -> Vec<Notification> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    pub fn dismiss(&self, key: &str) -> Option<Notification> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }

    pub fn clear(&self) {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Notifier for NotificationBoard {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => {
                warn!(key = %notification.key, "{}", notification.message)
            }
            _ => info!(key = %notification.key, "{}", notification.message),
        }
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(notification.key.clone(), notification);
    }
}
