use serde::{Deserialize, Serialize};
use std::path::Path;

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::jobs::{CleanupConfig, HeartbeatConfig, ReminderConfig, RestockConfig};
use super::logging::LoggingConfig;
use crate::inactivity::MAX_WINDOW_DAYS;

const LOCAL_CONFIG_PATH: &str = "crm-jobs.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/crm-jobs/config.toml";

/// Main configuration structure for the CRM maintenance jobs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// CRM database connection
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Diagnostic logging (stderr)
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub cleanup: CleanupConfig,

    #[serde(default)]
    pub reminders: ReminderConfig,

    #[serde(default)]
    pub restock: RestockConfig,

    #[serde(default)]
    pub heartbeat: HeartbeatConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. crm-jobs.toml in current directory
    /// 3. /etc/crm-jobs/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied on top of whichever source won.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(path) = overrides.cleanup_log_path {
            self.cleanup.log_path = path;
        }
        if let Some(days) = overrides.inactivity_window_days {
            self.cleanup.inactivity_window_days = days;
        }
        if let Some(path) = overrides.reminder_log_path {
            self.reminders.log_path = path;
        }
        if let Some(days) = overrides.lookback_days {
            self.reminders.lookback_days = days;
        }
        if let Some(path) = overrides.restock_log_path {
            self.restock.log_path = path;
        }
        if let Some(threshold) = overrides.restock_threshold {
            self.restock.threshold = threshold;
        }
        if let Some(increment) = overrides.restock_increment {
            self.restock.increment = increment;
        }
        if let Some(path) = overrides.heartbeat_log_path {
            self.heartbeat.log_path = path;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::invalid("database.path", "must not be empty"));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::invalid(
                "database.max_connections",
                "must be at least 1",
            ));
        }

        if self.cleanup.inactivity_window_days == 0 {
            return Err(ConfigError::invalid(
                "cleanup.inactivity_window_days",
                "must be at least 1 day",
            ));
        }
        if self.cleanup.inactivity_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::invalid(
                "cleanup.inactivity_window_days",
                format!("must be at most {MAX_WINDOW_DAYS} days"),
            ));
        }
        if self.reminders.lookback_days == 0 {
            return Err(ConfigError::invalid(
                "reminders.lookback_days",
                "must be at least 1 day",
            ));
        }
        if self.reminders.lookback_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::invalid(
                "reminders.lookback_days",
                format!("must be at most {MAX_WINDOW_DAYS} days"),
            ));
        }
        if self.restock.threshold == 0 {
            return Err(ConfigError::invalid("restock.threshold", "must be positive"));
        }
        if self.restock.increment == 0 {
            return Err(ConfigError::invalid("restock.increment", "must be positive"));
        }

        for (field, path) in [
            ("cleanup.log_path", &self.cleanup.log_path),
            ("reminders.log_path", &self.reminders.log_path),
            ("restock.log_path", &self.restock.log_path),
            ("heartbeat.log_path", &self.heartbeat.log_path),
        ] {
            if path.trim().is_empty() {
                return Err(ConfigError::invalid(field, "must not be empty"));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file that `load(None, ..)` would use
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|candidate| Path::new(candidate).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub database_path: Option<String>,
    pub log_level: Option<String>,
    pub cleanup_log_path: Option<String>,
    pub inactivity_window_days: Option<u32>,
    pub reminder_log_path: Option<String>,
    pub lookback_days: Option<u32>,
    pub restock_log_path: Option<String>,
    pub restock_threshold: Option<u32>,
    pub restock_increment: Option<u32>,
    pub heartbeat_log_path: Option<String>,
}
