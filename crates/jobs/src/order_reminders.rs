use crate::runner::Job;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_jobs_application::use_cases::SendOrderRemindersUseCase;
use crm_jobs_domain::DomainError;
use std::sync::Arc;
use tracing::{error, info};

pub struct OrderReminderJob {
    reminders: Arc<SendOrderRemindersUseCase>,
    lookback_days: u32,
}

impl OrderReminderJob {
    pub fn new(reminders: Arc<SendOrderRemindersUseCase>) -> Self {
        Self {
            reminders,
            lookback_days: 7,
        }
    }

    pub fn with_lookback_days(mut self, lookback_days: u32) -> Self {
        self.lookback_days = lookback_days;
        self
    }
}

#[async_trait]
impl Job for OrderReminderJob {
    fn name(&self) -> &'static str {
        "order-reminders"
    }

    async fn run(&self, now: DateTime<Utc>) -> Result<String, DomainError> {
        info!(lookback_days = self.lookback_days, "Starting order reminder job");

        match self.reminders.execute(now, self.lookback_days).await {
            Ok(report) => Ok(format!(
                "Processed {} pending orders from the last {} days",
                report.orders.len(),
                self.lookback_days
            )),
            Err(e) => {
                error!(error = %e, "Order reminder job failed");
                Err(e)
            }
        }
    }
}
