use async_trait::async_trait;
use crm_jobs_domain::DomainError;

#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Round-trip a trivial statement to the store.
    async fn ping(&self) -> Result<(), DomainError>;
}
