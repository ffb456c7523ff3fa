use crate::{HeartbeatJob, InactiveCustomerCleanupJob, LowStockRestockJob, OrderReminderJob};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_jobs_domain::DomainError;
use tracing::{info, warn};

/// A maintenance task that runs once against an injected clock and reports
/// a one-line summary.
#[async_trait]
pub trait Job: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self, now: DateTime<Utc>) -> Result<String, DomainError>;
}

#[derive(Debug)]
pub struct JobOutcome {
    pub job: &'static str,
    pub result: Result<String, DomainError>,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<JobOutcome>,
}

impl RunSummary {
    pub fn succeeded(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &DomainError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.job, e)))
    }

    /// True when some job changed data but could not record it.
    pub fn has_audit_gap(&self) -> bool {
        self.failures().any(|(_, e)| e.is_audit_gap())
    }
}

async fn run_job<J: Job>(job: Option<J>, now: DateTime<Utc>, summary: &mut RunSummary) {
    if let Some(job) = job {
        let result = job.run(now).await;
        if let Err(e) = &result {
            warn!(job = job.name(), error = %e, "Job failed, continuing with the next one");
        }
        summary.outcomes.push(JobOutcome {
            job: job.name(),
            result,
        });
    }
}

/// Runs each configured job once, in a fixed order, one after another. A
/// failed job does not stop the ones after it.
pub struct JobRunner {
    cleanup: Option<InactiveCustomerCleanupJob>,
    reminders: Option<OrderReminderJob>,
    restock: Option<LowStockRestockJob>,
    heartbeat: Option<HeartbeatJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            cleanup: None,
            reminders: None,
            restock: None,
            heartbeat: None,
        }
    }

    pub fn with_cleanup(mut self, job: InactiveCustomerCleanupJob) -> Self {
        self.cleanup = Some(job);
        self
    }

    pub fn with_reminders(mut self, job: OrderReminderJob) -> Self {
        self.reminders = Some(job);
        self
    }

    pub fn with_restock(mut self, job: LowStockRestockJob) -> Self {
        self.restock = Some(job);
        self
    }

    pub fn with_heartbeat(mut self, job: HeartbeatJob) -> Self {
        self.heartbeat = Some(job);
        self
    }

    pub async fn run_once(self, now: DateTime<Utc>) -> RunSummary {
        info!(started_at = %now, "Running maintenance jobs");
        let mut summary = RunSummary::default();

        run_job(self.cleanup, now, &mut summary).await;
        run_job(self.reminders, now, &mut summary).await;
        run_job(self.restock, now, &mut summary).await;
        run_job(self.heartbeat, now, &mut summary).await;

        info!(
            jobs = summary.outcomes.len(),
            failed = summary.failures().count(),
            "Maintenance jobs finished"
        );
        summary
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
