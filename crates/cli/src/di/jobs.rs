use super::Repositories;
use crm_jobs_application::use_cases::{
    CleanInactiveCustomersUseCase, PreviewInactiveCustomersUseCase, RecordHeartbeatUseCase,
    RestockLowStockUseCase, SendOrderRemindersUseCase,
};
use crm_jobs_domain::{Config, DomainError, InactivityWindow};
use crm_jobs_infrastructure::audit::FileAuditLog;
use crm_jobs_jobs::{
    HeartbeatJob, InactiveCustomerCleanupJob, JobRunner, LowStockRestockJob, OrderReminderJob,
};
use std::sync::Arc;

/// Wires use cases, audit logs and settings into runnable jobs.
pub struct Jobs<'a> {
    repos: &'a Repositories,
    config: &'a Config,
}

impl<'a> Jobs<'a> {
    pub fn new(repos: &'a Repositories, config: &'a Config) -> Self {
        Self { repos, config }
    }

    pub fn cleanup(&self, dry_run: bool) -> Result<InactiveCustomerCleanupJob, DomainError> {
        let window = InactivityWindow::new(self.config.cleanup.inactivity_window_days)?;

        if dry_run {
            let preview = Arc::new(PreviewInactiveCustomersUseCase::new(
                self.repos.customer.clone(),
            ));
            return Ok(InactiveCustomerCleanupJob::dry_run(preview, window));
        }

        let cleanup = Arc::new(CleanInactiveCustomersUseCase::new(
            self.repos.customer.clone(),
            Arc::new(FileAuditLog::new(&self.config.cleanup.log_path)),
        ));
        Ok(InactiveCustomerCleanupJob::new(cleanup, window))
    }

    pub fn reminders(&self) -> OrderReminderJob {
        let reminders = Arc::new(SendOrderRemindersUseCase::new(
            self.repos.order.clone(),
            Arc::new(FileAuditLog::new(&self.config.reminders.log_path)),
        ));
        OrderReminderJob::new(reminders).with_lookback_days(self.config.reminders.lookback_days)
    }

    pub fn restock(&self) -> LowStockRestockJob {
        let restock = Arc::new(RestockLowStockUseCase::new(
            self.repos.product.clone(),
            Arc::new(FileAuditLog::new(&self.config.restock.log_path)),
        ));
        LowStockRestockJob::new(restock)
            .with_levels(self.config.restock.threshold, self.config.restock.increment)
    }

    pub fn heartbeat(&self) -> HeartbeatJob {
        HeartbeatJob::new(Arc::new(RecordHeartbeatUseCase::new(
            self.repos.store_health.clone(),
            Arc::new(FileAuditLog::new(&self.config.heartbeat.log_path)),
        )))
    }

    /// Every job enabled in the configuration, in run order.
    pub fn runner(&self) -> Result<JobRunner, DomainError> {
        let mut runner = JobRunner::new();
        if self.config.cleanup.enabled {
            runner = runner.with_cleanup(self.cleanup(false)?);
        }
        if self.config.reminders.enabled {
            runner = runner.with_reminders(self.reminders());
        }
        if self.config.restock.enabled {
            runner = runner.with_restock(self.restock());
        }
        if self.config.heartbeat.enabled {
            runner = runner.with_heartbeat(self.heartbeat());
        }
        Ok(runner)
    }
}
