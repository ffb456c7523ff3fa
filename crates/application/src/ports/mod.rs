mod audit_log;
mod customer_repository;
mod order_repository;
mod product_repository;
mod store_health;

pub use audit_log::AuditLog;
pub use customer_repository::CustomerRepository;
pub use order_repository::OrderRepository;
pub use product_repository::ProductRepository;
pub use store_health::StoreHealth;
