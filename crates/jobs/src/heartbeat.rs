use crate::runner::Job;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_jobs_application::use_cases::RecordHeartbeatUseCase;
use crm_jobs_domain::DomainError;
use std::sync::Arc;
use tracing::error;

pub struct HeartbeatJob {
    heartbeat: Arc<RecordHeartbeatUseCase>,
}

impl HeartbeatJob {
    pub fn new(heartbeat: Arc<RecordHeartbeatUseCase>) -> Self {
        Self { heartbeat }
    }
}

#[async_trait]
impl Job for HeartbeatJob {
    fn name(&self) -> &'static str {
        "heartbeat"
    }

    async fn run(&self, now: DateTime<Utc>) -> Result<String, DomainError> {
        self.heartbeat
            .execute(now)
            .await
            .map(|report| report.log_line())
            .map_err(|e| {
                error!(error = %e, "Heartbeat could not be recorded");
                e
            })
    }
}
