pub mod customer_cleanup;
pub mod heartbeat;
pub mod low_stock_restock;
pub mod order_reminders;
pub mod runner;

pub use customer_cleanup::InactiveCustomerCleanupJob;
pub use heartbeat::HeartbeatJob;
pub use low_stock_restock::LowStockRestockJob;
pub use order_reminders::OrderReminderJob;
pub use runner::{Job, JobOutcome, JobRunner, RunSummary};
