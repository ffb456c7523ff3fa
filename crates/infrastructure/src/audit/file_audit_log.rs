use async_trait::async_trait;
use crm_jobs_application::ports::AuditLog;
use crm_jobs_domain::DomainError;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{error, instrument};

/// Audit log backed by a plain text file opened in append mode.
///
/// Every record is written with one `write_all`, so records from concurrent
/// job runs land whole rather than interleaved. The parent directory must
/// already exist.
#[derive(Debug, Clone)]
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AuditLog for FileAuditLog {
    #[instrument(skip(self, record), fields(path = %self.path.display(), bytes = record.len()))]
    async fn append(&self, record: &str) -> Result<(), DomainError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to open log file");
                DomainError::IoError(e.to_string())
            })?;

        file.write_all(record.as_bytes()).await.map_err(|e| {
            error!(error = %e, "Failed to write log record");
            DomainError::IoError(e.to_string())
        })?;

        file.flush().await.map_err(|e| {
            error!(error = %e, "Failed to flush log file");
            DomainError::IoError(e.to_string())
        })?;

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
