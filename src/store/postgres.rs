//! PostgreSQL backend
//!
//! One pool per process; every operation acquires a connection for the
//! duration of a single statement and returns it on drop.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::errors::{StoreError, StoreResult};
use super::stock::{NewStock, Stock, StockId};
use super::StockStore;

// Casts keep the row shape stable whether the table uses serial/bigserial
// keys and numeric/real/double prices.
const SELECT_ONE: &str =
    "SELECT stockid::int8 AS stockid, name, price::float8 AS price, company FROM stocks WHERE stockid = $1";
const SELECT_ALL: &str =
    "SELECT stockid::int8 AS stockid, name, price::float8 AS price, company FROM stocks";
const INSERT: &str =
    "INSERT INTO stocks (name, price, company) VALUES ($1, $2, $3) RETURNING stockid::int8";
const UPDATE: &str = "UPDATE stocks SET name = $2, price = $3, company = $4 WHERE stockid = $1";
const DELETE: &str = "DELETE FROM stocks WHERE stockid = $1";

/// Connection pool settings
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl StoreConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Stock store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgStockStore {
    pool: PgPool,
}

impl PgStockStore {
    /// Open the pool and verify one connection can be established
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        tracing::info!(
            max_connections = config.max_connections,
            "connected to postgres"
        );

        Ok(Self { pool })
    }
}

#[async_trait]
impl StockStore for PgStockStore {
    async fn fetch(&self, id: StockId) -> StoreResult<Stock> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query_as::<_, Stock>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn fetch_all(&self) -> StoreResult<Vec<Stock>> {
        let mut conn = self.pool.acquire().await?;

        let stocks = sqlx::query_as::<_, Stock>(SELECT_ALL)
            .fetch_all(&mut *conn)
            .await?;
        Ok(stocks)
    }

    async fn insert(&self, stock: &NewStock) -> StoreResult<StockId> {
        let mut conn = self.pool.acquire().await?;

        let id = sqlx::query_scalar::<_, i64>(INSERT)
            .bind(&stock.name)
            .bind(stock.price)
            .bind(&stock.company)
            .fetch_one(&mut *conn)
            .await?;

        tracing::debug!(stockid = id, "inserted stock row");
        Ok(id)
    }

    async fn update(&self, id: StockId, stock: &NewStock) -> StoreResult<u64> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query(UPDATE)
            .bind(id)
            .bind(&stock.name)
            .bind(stock.price)
            .bind(&stock.company)
            .execute(&mut *conn)
            .await?;

        tracing::debug!(stockid = id, rows = result.rows_affected(), "updated stock rows");
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: StockId) -> StoreResult<u64> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query(DELETE).bind(id).execute(&mut *conn).await?;

        tracing::debug!(stockid = id, rows = result.rows_affected(), "deleted stock rows");
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("postgres pool closed");
    }

    fn kind(&self) -> &'static str {
        "postgres"
    }
}
