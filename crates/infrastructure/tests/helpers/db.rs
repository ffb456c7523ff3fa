use chrono::{DateTime, Utc};
use crm_jobs_domain::timestamp::to_store_timestamp;
use crm_jobs_infrastructure::database::run_migrations;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// In-memory database with the CRM schema. One connection, so every query
/// sees the same database.
pub async fn create_test_db() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();
    pool
}

pub async fn insert_customer(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query("INSERT INTO customers (name, email) VALUES (?, ?)")
        .bind(name)
        .bind(format!("{}@example.com", name.to_lowercase()))
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn insert_order(pool: &SqlitePool, customer_id: i64, at: DateTime<Utc>) -> i64 {
    let ts = to_store_timestamp(at);
    sqlx::query(
        "INSERT INTO orders (customer_id, total_amount, order_date, created_at, updated_at)
         VALUES (?, 0, ?, ?, ?)",
    )
    .bind(customer_id)
    .bind(&ts)
    .bind(&ts)
    .bind(&ts)
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

/// Inserts an order whose timestamps are the literal column text, as other
/// writers of the database may format them.
pub async fn insert_order_text(pool: &SqlitePool, customer_id: i64, stored: &str) -> i64 {
    sqlx::query("INSERT INTO orders (customer_id, order_date, created_at) VALUES (?, ?, ?)")
        .bind(customer_id)
        .bind(stored)
        .bind(stored)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn insert_product(pool: &SqlitePool, name: &str, stock: i64) -> i64 {
    sqlx::query("INSERT INTO products (name, price, stock) VALUES (?, 9.99, ?)")
        .bind(name)
        .bind(stock)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn link_product(pool: &SqlitePool, order_id: i64, product_id: i64) {
    sqlx::query("INSERT INTO order_products (order_id, product_id) VALUES (?, ?)")
        .bind(order_id)
        .bind(product_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn customer_names(pool: &SqlitePool) -> Vec<String> {
    sqlx::query_scalar("SELECT name FROM customers ORDER BY id")
        .fetch_all(pool)
        .await
        .unwrap()
}
