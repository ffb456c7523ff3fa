pub mod clean_inactive_customers;
pub mod preview_inactive_customers;

pub use clean_inactive_customers::CleanInactiveCustomersUseCase;
pub use preview_inactive_customers::PreviewInactiveCustomersUseCase;
