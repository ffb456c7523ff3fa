use crate::runner::Job;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_jobs_application::use_cases::{
    CleanInactiveCustomersUseCase, PreviewInactiveCustomersUseCase,
};
use crm_jobs_domain::timestamp::LOG_TIMESTAMP_FORMAT;
use crm_jobs_domain::{DomainError, InactivityWindow};
use std::fmt::Write;
use std::sync::Arc;
use tracing::{error, info};

enum Mode {
    Delete(Arc<CleanInactiveCustomersUseCase>),
    Preview(Arc<PreviewInactiveCustomersUseCase>),
}

pub struct InactiveCustomerCleanupJob {
    mode: Mode,
    window: InactivityWindow,
}

impl InactiveCustomerCleanupJob {
    pub fn new(cleanup: Arc<CleanInactiveCustomersUseCase>, window: InactivityWindow) -> Self {
        Self {
            mode: Mode::Delete(cleanup),
            window,
        }
    }

    /// Lists the customers a real run would delete. Nothing is removed and
    /// the cleanup log is left alone.
    pub fn dry_run(
        preview: Arc<PreviewInactiveCustomersUseCase>,
        window: InactivityWindow,
    ) -> Self {
        Self {
            mode: Mode::Preview(preview),
            window,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        matches!(self.mode, Mode::Preview(_))
    }
}

#[async_trait]
impl Job for InactiveCustomerCleanupJob {
    fn name(&self) -> &'static str {
        "clean-inactive-customers"
    }

    async fn run(&self, now: DateTime<Utc>) -> Result<String, DomainError> {
        info!(
            window_days = self.window.days(),
            dry_run = self.is_dry_run(),
            "Starting inactive customer cleanup"
        );

        match &self.mode {
            Mode::Delete(cleanup) => match cleanup.execute(now, self.window).await {
                Ok(report) => {
                    info!(deleted = report.deleted, "Inactive customer cleanup completed");
                    Ok(report.log_line())
                }
                Err(e) => {
                    error!(error = %e, "Inactive customer cleanup failed");
                    Err(e)
                }
            },
            Mode::Preview(preview) => {
                let cutoff = self.window.cutoff(now)?;
                let customers = preview.execute(now, self.window).await.map_err(|e| {
                    error!(error = %e, "Inactive customer preview failed");
                    e
                })?;

                let mut summary = format!(
                    "{} inactive customers would be deleted (no order since {})",
                    customers.len(),
                    cutoff.format(LOG_TIMESTAMP_FORMAT)
                );
                for customer in &customers {
                    let _ = write!(
                        summary,
                        "\n  - Customer ID: {}, Name: {}, Email: {}",
                        customer.id, customer.name, customer.email
                    );
                }
                Ok(summary)
            }
        }
    }
}
