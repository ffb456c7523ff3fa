use crate::ports::{AuditLog, ProductRepository};
use chrono::{DateTime, Utc};
use crm_jobs_domain::{DomainError, RestockReport};
use std::sync::Arc;
use tracing::{error, info};

/// Use case: top up every product below the stock threshold.
pub struct RestockLowStockUseCase {
    product_repo: Arc<dyn ProductRepository>,
    audit_log: Arc<dyn AuditLog>,
}

impl RestockLowStockUseCase {
    pub fn new(product_repo: Arc<dyn ProductRepository>, audit_log: Arc<dyn AuditLog>) -> Self {
        Self {
            product_repo,
            audit_log,
        }
    }

    /// A store failure is written to the log as an `Error:` block and then
    /// returned.
    pub async fn execute(
        &self,
        now: DateTime<Utc>,
        threshold: u32,
        increment: u32,
    ) -> Result<RestockReport, DomainError> {
        if threshold == 0 || increment == 0 {
            return Err(DomainError::InvalidConfig(
                "restock threshold and increment must be positive".to_string(),
            ));
        }

        match self.product_repo.restock_below(threshold, increment).await {
            Ok(products) => {
                let report = RestockReport::succeeded(now, products);
                let updated = report.updated_count();
                if let Err(e) = self.audit_log.append(&report.render()).await {
                    error!(
                        error = %e,
                        updated,
                        "Products restocked but the update log could not be written"
                    );
                    return Err(DomainError::AuditLogWriteFailed {
                        path: self.audit_log.location(),
                        affected: updated,
                        reason: e.to_string(),
                    });
                }
                info!(updated, threshold, increment, "Low-stock products restocked");
                Ok(report)
            }
            Err(store_error) => {
                let report = RestockReport::failed(now, store_error.to_string());
                if let Err(e) = self.audit_log.append(&report.render()).await {
                    error!(error = %e, "Failed to record restock failure in the update log");
                }
                Err(store_error)
            }
        }
    }
}
