//! CRM maintenance jobs: domain layer
pub mod config;
pub mod customer;
pub mod errors;
pub mod inactivity;
pub mod order;
pub mod product;
pub mod report;
pub mod timestamp;

pub use config::{CliOverrides, Config, ConfigError};
pub use customer::{Customer, CustomerActivity, CustomerId};
pub use errors::DomainError;
pub use inactivity::{
    days_before, is_inactive, InactivityWindow, DEFAULT_INACTIVITY_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
pub use order::{OrderId, PendingOrder};
pub use product::{Product, ProductId};
pub use report::{CleanupReport, HeartbeatReport, ReminderReport, RestockReport};
