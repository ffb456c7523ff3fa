use crate::database::store_error;
use async_trait::async_trait;
use crm_jobs_application::ports::StoreHealth;
use crm_jobs_domain::DomainError;
use sqlx::SqlitePool;
use tracing::instrument;

pub struct SqliteStoreHealth {
    pool: SqlitePool,
}

impl SqliteStoreHealth {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealth for SqliteStoreHealth {
    #[instrument(skip(self))]
    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| store_error(&e, DomainError::StoreUnavailable))?;
        Ok(())
    }
}
