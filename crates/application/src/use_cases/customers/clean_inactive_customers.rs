use crate::ports::{AuditLog, CustomerRepository};
use chrono::{DateTime, Utc};
use crm_jobs_domain::{CleanupReport, DomainError, InactivityWindow};
use std::sync::Arc;
use tracing::{error, info};

/// Use case: delete customers with no order inside the inactivity window and
/// append the deleted count to the cleanup log.
pub struct CleanInactiveCustomersUseCase {
    customer_repo: Arc<dyn CustomerRepository>,
    audit_log: Arc<dyn AuditLog>,
}

impl CleanInactiveCustomersUseCase {
    pub fn new(customer_repo: Arc<dyn CustomerRepository>, audit_log: Arc<dyn AuditLog>) -> Self {
        Self {
            customer_repo,
            audit_log,
        }
    }

    /// Any store error aborts before the log is touched. A log error after a
    /// successful delete is returned as `AuditLogWriteFailed` carrying the
    /// real count; the deletion is not undone.
    pub async fn execute(
        &self,
        now: DateTime<Utc>,
        window: InactivityWindow,
    ) -> Result<CleanupReport, DomainError> {
        let cutoff = window.cutoff(now)?;

        let deleted = self.customer_repo.delete_inactive(cutoff).await?;
        info!(
            deleted,
            window_days = window.days(),
            cutoff = %cutoff,
            "Inactive customers deleted"
        );

        let report = CleanupReport::new(deleted, now, cutoff);
        if let Err(e) = self.audit_log.append(&report.render()).await {
            error!(
                error = %e,
                deleted,
                log = %self.audit_log.location(),
                "Customers were deleted but the cleanup log could not be written"
            );
            return Err(DomainError::AuditLogWriteFailed {
                path: self.audit_log.location(),
                affected: deleted,
                reason: e.to_string(),
            });
        }

        Ok(report)
    }
}
