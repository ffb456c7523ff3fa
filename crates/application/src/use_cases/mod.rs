pub mod customers;
pub mod health;
pub mod orders;
pub mod products;

// Re-export use cases
pub use customers::{CleanInactiveCustomersUseCase, PreviewInactiveCustomersUseCase};
pub use health::RecordHeartbeatUseCase;
pub use orders::SendOrderRemindersUseCase;
pub use products::RestockLowStockUseCase;
