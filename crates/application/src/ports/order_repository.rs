use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_jobs_domain::{DomainError, PendingOrder};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Orders whose `order_date` is at or after `since`, newest first.
    async fn find_placed_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<PendingOrder>, DomainError>;
}
