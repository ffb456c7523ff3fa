use async_trait::async_trait;
use crm_jobs_domain::DomainError;

/// Append-only record sink for job results.
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Append `record` verbatim in a single write. Existing content is never
    /// truncated or rewritten.
    async fn append(&self, record: &str) -> Result<(), DomainError>;

    /// Human-readable location, used in error messages.
    fn location(&self) -> String;
}
