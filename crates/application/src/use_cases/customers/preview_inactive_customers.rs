use crate::ports::CustomerRepository;
use chrono::{DateTime, Utc};
use crm_jobs_domain::{Customer, DomainError, InactivityWindow};
use std::sync::Arc;
use tracing::debug;

/// Use case: list the customers a cleanup run would delete right now.
/// Read-only; nothing is written to the cleanup log.
pub struct PreviewInactiveCustomersUseCase {
    customer_repo: Arc<dyn CustomerRepository>,
}

impl PreviewInactiveCustomersUseCase {
    pub fn new(customer_repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repo }
    }

    pub async fn execute(
        &self,
        now: DateTime<Utc>,
        window: InactivityWindow,
    ) -> Result<Vec<Customer>, DomainError> {
        let cutoff = window.cutoff(now)?;
        let customers = self.customer_repo.find_inactive(cutoff).await?;
        debug!(count = customers.len(), cutoff = %cutoff, "Inactive customers found");
        Ok(customers)
    }
}
