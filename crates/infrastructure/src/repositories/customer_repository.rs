use crate::database::store_error;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_jobs_application::ports::CustomerRepository;
use crm_jobs_domain::timestamp::to_store_timestamp;
use crm_jobs_domain::{Customer, CustomerId, DomainError};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

/// Customers that have no order created at or after the bound cutoff. A
/// single recent order excludes the customer regardless of older ones.
const INACTIVE_PREDICATE: &str = "NOT EXISTS (
        SELECT 1 FROM orders o
        WHERE o.customer_id = customers.id AND o.created_at >= ?
    )";

type CustomerRow = (i64, String, String, Option<String>, Option<String>, Option<String>);

pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_customer(row: CustomerRow) -> Customer {
        let (id, name, email, phone, created_at, updated_at) = row;
        Customer {
            id,
            name,
            email,
            phone,
            created_at,
            updated_at,
        }
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    #[instrument(skip(self))]
    async fn find_inactive(&self, cutoff: DateTime<Utc>) -> Result<Vec<Customer>, DomainError> {
        let sql = format!(
            "SELECT id, name, email, phone, created_at, updated_at
             FROM customers
             WHERE {INACTIVE_PREDICATE}
             ORDER BY id"
        );

        let rows = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(to_store_timestamp(cutoff))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to select inactive customers");
                store_error(&e, DomainError::QueryFailed)
            })?;

        Ok(rows.into_iter().map(Self::row_to_customer).collect())
    }

    #[instrument(skip(self))]
    async fn delete_inactive(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let sql = format!("DELETE FROM customers WHERE {INACTIVE_PREDICATE}");

        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin transaction for inactive customer delete");
            store_error(&e, DomainError::StoreUnavailable)
        })?;

        let result = sqlx::query(&sql)
            .bind(to_store_timestamp(cutoff))
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete inactive customers");
                store_error(&e, DomainError::DeleteFailed)
            })?;

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit inactive customer delete");
            store_error(&e, DomainError::DeleteFailed)
        })?;

        debug!(rows = result.rows_affected(), "Inactive customer delete committed");
        Ok(result.rows_affected())
    }

    #[instrument(skip(self, ids), fields(requested = ids.len()))]
    async fn delete_and_count(&self, ids: &[CustomerId]) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin transaction for customer delete");
            store_error(&e, DomainError::StoreUnavailable)
        })?;

        let mut deleted = 0u64;
        for id in ids {
            let result = sqlx::query("DELETE FROM customers WHERE id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    error!(error = %e, customer_id = id, "Failed to delete customer");
                    store_error(&e, DomainError::DeleteFailed)
                })?;
            deleted += result.rows_affected();
        }

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit customer delete");
            store_error(&e, DomainError::DeleteFailed)
        })?;

        Ok(deleted)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count customers");
                store_error(&e, DomainError::QueryFailed)
            })?;

        Ok(count as u64)
    }
}
