//! In-memory backend
//!
//! Used by tests and the `--in-memory` development mode. Ids start at 1
//! and are never reused; listings come back in ascending id order.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::stock::{NewStock, Stock, StockId};
use super::StockStore;

#[derive(Debug)]
struct Table {
    rows: BTreeMap<StockId, Stock>,
    next_id: StockId,
}

/// Stock store held in process memory
#[derive(Debug)]
pub struct MemoryStockStore {
    table: RwLock<Table>,
}

impl MemoryStockStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of rows currently held
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryStockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StockStore for MemoryStockStore {
    async fn fetch(&self, id: StockId) -> StoreResult<Stock> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn fetch_all(&self) -> StoreResult<Vec<Stock>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn insert(&self, stock: &NewStock) -> StoreResult<StockId> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;
        table.rows.insert(id, Stock::from_new(id, stock.clone()));
        Ok(id)
    }

    async fn update(&self, id: StockId, stock: &NewStock) -> StoreResult<u64> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = Stock::from_new(id, stock.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: StockId) -> StoreResult<u64> {
        let removed = self.table.write().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
