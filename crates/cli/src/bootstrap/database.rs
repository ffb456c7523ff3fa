use crm_jobs_domain::config::DatabaseConfig;
use crm_jobs_domain::DomainError;
use crm_jobs_infrastructure::database::{create_pool, open_pool, run_migrations};
use sqlx::SqlitePool;
use tracing::{error, info};

/// Opens the existing CRM database for the jobs.
pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!(path = %cfg.path, "Opening CRM database");

    let pool = open_pool(cfg).await?;

    info!(
        max_connections = cfg.max_connections,
        "Database opened successfully"
    );
    Ok(pool)
}

/// Creates the database file if needed and applies the schema.
pub async fn migrate_database(cfg: &DatabaseConfig) -> anyhow::Result<()> {
    info!(path = %cfg.path, "Migrating CRM database");

    let pool = create_pool(cfg).await?;
    run_migrations(&pool).await.map_err(|e| {
        error!(error = %e, "Failed to apply schema migrations");
        DomainError::QueryFailed(e.to_string())
    })?;

    info!("Schema migrations applied");
    Ok(())
}
