use crate::database::store_error;
use async_trait::async_trait;
use crm_jobs_application::ports::ProductRepository;
use crm_jobs_domain::{DomainError, Product};
use sqlx::SqlitePool;
use tracing::{error, instrument};

pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    #[instrument(skip(self))]
    async fn restock_below(
        &self,
        threshold: u32,
        increment: u32,
    ) -> Result<Vec<Product>, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin transaction for restock");
            store_error(&e, DomainError::StoreUnavailable)
        })?;

        let rows = sqlx::query_as::<_, (i64, String, i64)>(
            "UPDATE products
             SET stock = stock + ?, updated_at = CURRENT_TIMESTAMP
             WHERE stock < ?
             RETURNING id, name, stock",
        )
        .bind(i64::from(increment))
        .bind(i64::from(threshold))
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to restock low-stock products");
            store_error(&e, DomainError::UpdateFailed)
        })?;

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit restock");
            store_error(&e, DomainError::UpdateFailed)
        })?;

        let mut products: Vec<Product> = rows
            .into_iter()
            .map(|(id, name, stock)| Product::new(id, name, stock))
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(products)
    }
}
