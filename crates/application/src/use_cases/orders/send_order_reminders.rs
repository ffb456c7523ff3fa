use crate::ports::{AuditLog, OrderRepository};
use chrono::{DateTime, Utc};
use crm_jobs_domain::{days_before, DomainError, ReminderReport};
use std::sync::Arc;
use tracing::info;

pub struct SendOrderRemindersUseCase {
    order_repo: Arc<dyn OrderRepository>,
    audit_log: Arc<dyn AuditLog>,
}

impl SendOrderRemindersUseCase {
    pub fn new(order_repo: Arc<dyn OrderRepository>, audit_log: Arc<dyn AuditLog>) -> Self {
        Self {
            order_repo,
            audit_log,
        }
    }

    pub async fn execute(
        &self,
        now: DateTime<Utc>,
        lookback_days: u32,
    ) -> Result<ReminderReport, DomainError> {
        if lookback_days == 0 {
            return Err(DomainError::InvalidConfig(
                "reminder lookback must be at least 1 day".to_string(),
            ));
        }

        let since = days_before(now, lookback_days)?;
        let orders = self.order_repo.find_placed_since(since).await?;
        let report = ReminderReport::new(now, orders);

        self.audit_log
            .append(&report.render())
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", self.audit_log.location(), e)))?;

        info!(
            orders = report.orders.len(),
            lookback_days, "Order reminders processed"
        );
        Ok(report)
    }
}
