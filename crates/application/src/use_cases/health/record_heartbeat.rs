use crate::ports::{AuditLog, StoreHealth};
use chrono::{DateTime, Utc};
use crm_jobs_domain::{DomainError, HeartbeatReport};
use std::sync::Arc;
use tracing::{info, warn};

pub struct RecordHeartbeatUseCase {
    store_health: Arc<dyn StoreHealth>,
    audit_log: Arc<dyn AuditLog>,
}

impl RecordHeartbeatUseCase {
    pub fn new(store_health: Arc<dyn StoreHealth>, audit_log: Arc<dyn AuditLog>) -> Self {
        Self {
            store_health,
            audit_log,
        }
    }

    /// An unreachable store is recorded in the heartbeat line, not returned.
    pub async fn execute(&self, now: DateTime<Utc>) -> Result<HeartbeatReport, DomainError> {
        let probe = self.store_health.ping().await.map_err(|e| e.to_string());
        if let Err(reason) = &probe {
            warn!(reason = %reason, "Store liveness probe failed");
        }

        let report = HeartbeatReport::new(now, probe);
        self.audit_log
            .append(&report.render())
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", self.audit_log.location(), e)))?;

        info!(store_responsive = report.store_responsive(), "Heartbeat recorded");
        Ok(report)
    }
}
