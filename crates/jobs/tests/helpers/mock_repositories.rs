#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_jobs_application::ports::{
    AuditLog, CustomerRepository, OrderRepository, ProductRepository, StoreHealth,
};
use crm_jobs_domain::{
    is_inactive, Customer, CustomerActivity, CustomerId, DomainError, PendingOrder, Product,
};
use crm_jobs_domain::timestamp::to_store_timestamp;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFailure {
    None,
    Unavailable,
    Query,
    Delete,
}

struct StoredCustomer {
    customer: Customer,
    order_dates: Vec<DateTime<Utc>>,
}

impl StoredCustomer {
    fn activity(&self) -> CustomerActivity {
        CustomerActivity::new(self.customer.id, self.order_dates.iter().max().copied())
    }
}

/// In-memory customer store. Deletes are all-or-nothing like the SQLite one.
pub struct MockCustomerRepository {
    customers: Arc<RwLock<BTreeMap<CustomerId, StoredCustomer>>>,
    next_id: Arc<AtomicU64>,
    failure: Arc<RwLock<StoreFailure>>,
    delete_calls: Arc<AtomicU64>,
}

impl MockCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
            failure: Arc::new(RwLock::new(StoreFailure::None)),
            delete_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Adds a customer with one order per entry in `order_dates`.
    pub async fn add_customer(&self, name: &str, order_dates: Vec<DateTime<Utc>>) -> CustomerId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) as CustomerId;
        let customer = Customer {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
            created_at: None,
            updated_at: None,
        };
        self.customers.write().await.insert(
            id,
            StoredCustomer {
                customer,
                order_dates,
            },
        );
        id
    }

    pub async fn set_failure(&self, failure: StoreFailure) {
        *self.failure.write().await = failure;
    }

    pub async fn names(&self) -> Vec<String> {
        self.customers
            .read()
            .await
            .values()
            .map(|c| c.customer.name.clone())
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    pub fn delete_calls(&self) -> u64 {
        self.delete_calls.load(Ordering::Relaxed)
    }

    async fn check(&self, during: StoreFailure) -> Result<(), DomainError> {
        match *self.failure.read().await {
            StoreFailure::Unavailable => Err(DomainError::StoreUnavailable(
                "connection refused".to_string(),
            )),
            StoreFailure::Query if during == StoreFailure::Query => {
                Err(DomainError::QueryFailed("no such table: orders".to_string()))
            }
            StoreFailure::Delete if during == StoreFailure::Delete => Err(
                DomainError::DeleteFailed("constraint failed".to_string()),
            ),
            _ => Ok(()),
        }
    }
}

impl Default for MockCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for MockCustomerRepository {
    async fn find_inactive(&self, cutoff: DateTime<Utc>) -> Result<Vec<Customer>, DomainError> {
        self.check(StoreFailure::Query).await?;
        Ok(self
            .customers
            .read()
            .await
            .values()
            .filter(|c| is_inactive(&c.activity(), cutoff))
            .map(|c| c.customer.clone())
            .collect())
    }

    async fn delete_inactive(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        self.delete_calls.fetch_add(1, Ordering::Relaxed);
        self.check(StoreFailure::Delete).await?;
        let mut customers = self.customers.write().await;
        let before = customers.len();
        customers.retain(|_, c| !is_inactive(&c.activity(), cutoff));
        Ok((before - customers.len()) as u64)
    }

    async fn delete_and_count(&self, ids: &[CustomerId]) -> Result<u64, DomainError> {
        self.delete_calls.fetch_add(1, Ordering::Relaxed);
        self.check(StoreFailure::Delete).await?;
        let mut customers = self.customers.write().await;
        Ok(ids.iter().filter(|id| customers.remove(*id).is_some()).count() as u64)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check(StoreFailure::Query).await?;
        Ok(self.customers.read().await.len() as u64)
    }
}

struct StoredOrder {
    id: i64,
    order_date: DateTime<Utc>,
    customer_email: Option<String>,
}

pub struct MockOrderRepository {
    orders: Arc<RwLock<Vec<StoredOrder>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn add_order(&self, id: i64, order_date: DateTime<Utc>, email: Option<&str>) {
        self.orders.write().await.push(StoredOrder {
            id,
            order_date,
            customer_email: email.map(str::to_string),
        });
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

impl Default for MockOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepository {
    async fn find_placed_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<PendingOrder>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::QueryFailed("orders unavailable".to_string()));
        }
        let orders = self.orders.read().await;
        let mut pending: Vec<(&StoredOrder, PendingOrder)> = orders
            .iter()
            .filter(|o| o.order_date >= since)
            .map(|o| {
                (
                    o,
                    PendingOrder::new(
                        o.id,
                        to_store_timestamp(o.order_date),
                        o.customer_email.clone(),
                    ),
                )
            })
            .collect();
        pending.sort_by(|a, b| b.0.order_date.cmp(&a.0.order_date));
        Ok(pending.into_iter().map(|(_, p)| p).collect())
    }
}

pub struct MockProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn add_product(&self, name: &str, stock: i64) {
        let mut products = self.products.write().await;
        let id = products.len() as i64 + 1;
        products.push(Product::new(id, name, stock));
    }

    pub async fn stock_of(&self, name: &str) -> Option<i64> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.stock)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

impl Default for MockProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn restock_below(
        &self,
        threshold: u32,
        increment: u32,
    ) -> Result<Vec<Product>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::UpdateFailed("database is locked".to_string()));
        }
        let mut products = self.products.write().await;
        let mut updated = Vec::new();
        for product in products.iter_mut() {
            if product.is_low_stock(threshold) {
                product.stock += i64::from(increment);
                updated.push(product.clone());
            }
        }
        updated.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(updated)
    }
}

pub struct MockStoreHealth {
    should_fail: Arc<RwLock<bool>>,
    call_count: Arc<AtomicU64>,
}

impl MockStoreHealth {
    pub fn new() -> Self {
        Self {
            should_fail: Arc::new(RwLock::new(false)),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl Default for MockStoreHealth {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreHealth for MockStoreHealth {
    async fn ping(&self) -> Result<(), DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DomainError::StoreUnavailable("pool timed out".to_string()));
        }
        Ok(())
    }
}

/// Collects appended records in memory.
pub struct MockAuditLog {
    records: Arc<RwLock<Vec<String>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockAuditLog {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub async fn records(&self) -> Vec<String> {
        self.records.read().await.clone()
    }

    pub async fn contents(&self) -> String {
        self.records.read().await.concat()
    }
}

impl Default for MockAuditLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLog for MockAuditLog {
    async fn append(&self, record: &str) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::IoError("Permission denied (os error 13)".to_string()));
        }
        self.records.write().await.push(record.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory://audit".to_string()
    }
}
