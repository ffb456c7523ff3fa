use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Customer store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Delete failed, no rows were removed: {0}")]
    DeleteFailed(String),

    #[error("Update failed, no rows were changed: {0}")]
    UpdateFailed(String),

    #[error("Failed to append to log file {path} after {affected} rows were changed: {reason}")]
    AuditLogWriteFailed {
        path: String,
        affected: u64,
        reason: String,
    },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DomainError {
    /// True when the store was changed before the error happened.
    pub fn is_audit_gap(&self) -> bool {
        matches!(self, DomainError::AuditLogWriteFailed { .. })
    }
}
