use crate::runner::Job;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_jobs_application::use_cases::RestockLowStockUseCase;
use crm_jobs_domain::DomainError;
use std::sync::Arc;
use tracing::{error, info};

pub struct LowStockRestockJob {
    restock: Arc<RestockLowStockUseCase>,
    threshold: u32,
    increment: u32,
}

impl LowStockRestockJob {
    pub fn new(restock: Arc<RestockLowStockUseCase>) -> Self {
        Self {
            restock,
            threshold: 10,
            increment: 10,
        }
    }

    pub fn with_levels(mut self, threshold: u32, increment: u32) -> Self {
        self.threshold = threshold;
        self.increment = increment;
        self
    }
}

#[async_trait]
impl Job for LowStockRestockJob {
    fn name(&self) -> &'static str {
        "restock-low-stock"
    }

    async fn run(&self, now: DateTime<Utc>) -> Result<String, DomainError> {
        info!(
            threshold = self.threshold,
            increment = self.increment,
            "Starting low-stock restock job"
        );

        match self.restock.execute(now, self.threshold, self.increment).await {
            Ok(report) => Ok(format!(
                "Restocked {} products below {} units",
                report.updated_count(),
                self.threshold
            )),
            Err(e) => {
                error!(error = %e, "Low-stock restock job failed");
                Err(e)
            }
        }
    }
}
