use crate::database::store_error;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_jobs_application::ports::OrderRepository;
use crm_jobs_domain::timestamp::to_store_timestamp;
use crm_jobs_domain::{DomainError, PendingOrder};
use sqlx::SqlitePool;
use tracing::{error, instrument};

pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    #[instrument(skip(self))]
    async fn find_placed_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<PendingOrder>, DomainError> {
        let rows = sqlx::query_as::<_, (i64, String, Option<String>)>(
            "SELECT o.id, o.order_date, c.email
             FROM orders o
             LEFT JOIN customers c ON c.id = o.customer_id
             WHERE o.order_date >= ?
             ORDER BY o.order_date DESC, o.id DESC",
        )
        .bind(to_store_timestamp(since))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch recent orders");
            store_error(&e, DomainError::QueryFailed)
        })?;

        Ok(rows
            .into_iter()
            .map(|(id, order_date, email)| PendingOrder::new(id, order_date, email))
            .collect())
    }
}
