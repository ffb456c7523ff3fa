use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_jobs_domain::{Customer, CustomerId, DomainError};

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Customers with no order created at or after `cutoff`, oldest id first.
    async fn find_inactive(&self, cutoff: DateTime<Utc>) -> Result<Vec<Customer>, DomainError>;

    /// Delete every customer `find_inactive(cutoff)` would return, in one
    /// atomic statement, and report how many rows were removed.
    ///
    /// Orders of deleted customers go with them (cascade).
    async fn delete_inactive(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError>;

    /// Delete the given customers in one transaction. Ids that no longer
    /// exist are skipped and not counted.
    async fn delete_and_count(&self, ids: &[CustomerId]) -> Result<u64, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
