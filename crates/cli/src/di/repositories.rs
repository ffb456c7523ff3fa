use crm_jobs_infrastructure::repositories::{
    SqliteCustomerRepository, SqliteOrderRepository, SqliteProductRepository, SqliteStoreHealth,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub customer: Arc<SqliteCustomerRepository>,
    pub order: Arc<SqliteOrderRepository>,
    pub product: Arc<SqliteProductRepository>,
    pub store_health: Arc<SqliteStoreHealth>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            customer: Arc::new(SqliteCustomerRepository::new(pool.clone())),
            order: Arc::new(SqliteOrderRepository::new(pool.clone())),
            product: Arc::new(SqliteProductRepository::new(pool.clone())),
            store_health: Arc::new(SqliteStoreHealth::new(pool)),
        }
    }
}
