//! # Stock Store
//!
//! Data access for the `stocks` table. Each operation runs exactly one
//! statement; consistency beyond single-statement atomicity is left to
//! the database.
//!
//! Two backends implement [`StockStore`]:
//!
//! - [`PgStockStore`] - PostgreSQL through a shared sqlx pool
//! - [`MemoryStockStore`] - in-process, for tests and local development

mod errors;
mod memory;
mod postgres;
mod stock;

use async_trait::async_trait;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStockStore;
pub use postgres::{PgStockStore, StoreConfig};
pub use stock::{NewStock, Stock, StockId};

/// Data access operations over stock records
#[async_trait]
pub trait StockStore: Send + Sync {
    /// Fetch one stock by id.
    ///
    /// Returns [`StoreError::NotFound`] when no row matches.
    async fn fetch(&self, id: StockId) -> StoreResult<Stock>;

    /// Fetch every stock in store-defined order. Empty when the table is.
    async fn fetch_all(&self) -> StoreResult<Vec<Stock>>;

    /// Insert a stock and return the id the store assigned
    async fn insert(&self, stock: &NewStock) -> StoreResult<StockId>;

    /// Replace all mutable fields of a stock.
    ///
    /// Returns the affected-count; an absent id yields 0, not an error.
    async fn update(&self, id: StockId, stock: &NewStock) -> StoreResult<u64>;

    /// Delete a stock. Returns the affected-count (0 when absent).
    async fn delete(&self, id: StockId) -> StoreResult<u64>;

    /// Check that the store is reachable
    async fn ping(&self) -> StoreResult<()>;

    /// Release held resources. Called once at shutdown.
    async fn close(&self) {}

    /// Short backend name for logs and health output
    fn kind(&self) -> &'static str;
}
