use crm_jobs_domain::config::DatabaseConfig;
use crm_jobs_domain::DomainError;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::error;

/// CRM schema, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens an existing CRM database. A missing file is reported as
/// `StoreUnavailable` rather than created. The journal mode is left as the
/// owning application configured it.
pub async fn open_pool(cfg: &DatabaseConfig) -> Result<SqlitePool, DomainError> {
    connect(cfg, false).await
}

/// Opens the CRM database, creating the file when it does not exist yet.
/// Only schema migration uses this.
pub async fn create_pool(cfg: &DatabaseConfig) -> Result<SqlitePool, DomainError> {
    connect(cfg, true).await
}

async fn connect(cfg: &DatabaseConfig, create_if_missing: bool) -> Result<SqlitePool, DomainError> {
    let unavailable = |e: sqlx::Error| {
        error!(error = %e, path = %cfg.path, "Failed to open CRM database");
        DomainError::StoreUnavailable(e.to_string())
    };

    let options = SqliteConnectOptions::from_str(&cfg.url())
        .map_err(unavailable)?
        .create_if_missing(create_if_missing)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs));

    SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .connect_with(options)
        .await
        .map_err(unavailable)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Maps a driver error to the domain taxonomy. Connection-level failures
/// become `StoreUnavailable`; everything else is handed to `on_statement`.
pub(crate) fn store_error(e: &sqlx::Error, on_statement: fn(String) -> DomainError) -> DomainError {
    match e {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => DomainError::StoreUnavailable(e.to_string()),
        _ => on_statement(e.to_string()),
    }
}
