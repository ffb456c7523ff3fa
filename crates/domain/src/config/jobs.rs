use crate::inactivity::DEFAULT_INACTIVITY_WINDOW_DAYS;
use serde::{Deserialize, Serialize};

/// Inactive customer cleanup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CleanupConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_cleanup_log_path")]
    pub log_path: String,

    /// Customers whose newest order is older than this many days are deleted.
    #[serde(default = "default_inactivity_window_days")]
    pub inactivity_window_days: u32,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_path: default_cleanup_log_path(),
            inactivity_window_days: default_inactivity_window_days(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReminderConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_reminder_log_path")]
    pub log_path: String,

    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_path: default_reminder_log_path(),
            lookback_days: default_lookback_days(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RestockConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_restock_log_path")]
    pub log_path: String,

    /// Products with stock strictly below this value are restocked.
    #[serde(default = "default_restock_threshold")]
    pub threshold: u32,

    #[serde(default = "default_restock_increment")]
    pub increment: u32,
}

impl Default for RestockConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_path: default_restock_log_path(),
            threshold: default_restock_threshold(),
            increment: default_restock_increment(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeartbeatConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_heartbeat_log_path")]
    pub log_path: String,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_path: default_heartbeat_log_path(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cleanup_log_path() -> String {
    "/tmp/customer_cleanup_log.txt".to_string()
}

fn default_inactivity_window_days() -> u32 {
    DEFAULT_INACTIVITY_WINDOW_DAYS
}

fn default_reminder_log_path() -> String {
    "/tmp/order_reminders_log.txt".to_string()
}

fn default_lookback_days() -> u32 {
    7
}

fn default_restock_log_path() -> String {
    "/tmp/low_stock_updates_log.txt".to_string()
}

fn default_restock_threshold() -> u32 {
    10
}

fn default_restock_increment() -> u32 {
    10
}

fn default_heartbeat_log_path() -> String {
    "/tmp/crm_heartbeat_log.txt".to_string()
}
