pub mod database;
pub mod errors;
pub mod jobs;
pub mod logging;
pub mod root;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use jobs::{CleanupConfig, HeartbeatConfig, ReminderConfig, RestockConfig};
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
