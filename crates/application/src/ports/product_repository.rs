use async_trait::async_trait;
use crm_jobs_domain::{DomainError, Product};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Add `increment` to the stock of every product below `threshold` in a
    /// single transaction. Returns the updated products ordered by name.
    async fn restock_below(
        &self,
        threshold: u32,
        increment: u32,
    ) -> Result<Vec<Product>, DomainError>;
}
