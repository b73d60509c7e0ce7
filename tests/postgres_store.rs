//! PostgreSQL Store Tests
//!
//! Runs against a live database named by `STOCKS_TEST_DATABASE_URL`;
//! without it every test returns early. The `stocks` table is created if
//! absent and emptied first, so point this at a scratch database only.
//!
//! The checks share one table and run inside a single test so they
//! cannot interleave.

use std::time::Duration;

use stocks_api::store::{NewStock, PgStockStore, StockStore, StoreConfig, StoreError};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS stocks (
    stockid SERIAL PRIMARY KEY,
    name TEXT,
    price NUMERIC,
    company TEXT
)";

async fn connect() -> Option<PgStockStore> {
    let url = std::env::var("STOCKS_TEST_DATABASE_URL").ok()?;

    let config = StoreConfig {
        database_url: url,
        max_connections: 2,
        acquire_timeout: Duration::from_secs(5),
    };
    let store = PgStockStore::connect(&config).await.unwrap();

    let pool = sqlx::PgPool::connect(&config.database_url).await.unwrap();
    sqlx::query(CREATE_TABLE).execute(&pool).await.unwrap();
    sqlx::query("DELETE FROM stocks").execute(&pool).await.unwrap();
    pool.close().await;

    Some(store)
}

#[tokio::test]
async fn test_postgres_store_contract() {
    let Some(store) = connect().await else {
        return;
    };

    store.ping().await.unwrap();

    // Empty table lists as empty
    assert!(store.fetch_all().await.unwrap().is_empty());

    // Insert then fetch round trip
    let id = store
        .insert(&NewStock::new("ACME", 10.5, "Acme Corp"))
        .await
        .unwrap();
    let stock = store.fetch(id).await.unwrap();
    assert_eq!(stock.stockid, id);
    assert_eq!(stock.name, "ACME");
    assert_eq!(stock.price, 10.5);
    assert_eq!(stock.company, "Acme Corp");

    // Update replaces every mutable field
    let affected = store
        .update(id, &NewStock::new("ACME", 11.25, "Acme Holdings"))
        .await
        .unwrap();
    assert_eq!(affected, 1);
    let stock = store.fetch(id).await.unwrap();
    assert_eq!(stock.price, 11.25);
    assert_eq!(stock.company, "Acme Holdings");

    assert_eq!(store.fetch_all().await.unwrap().len(), 1);

    // Absent ids: zero affected, not errors
    let missing = id + 1000;
    assert_eq!(
        store
            .update(missing, &NewStock::new("X", 1.0, "Y"))
            .await
            .unwrap(),
        0
    );
    assert_eq!(store.delete(missing).await.unwrap(), 0);
    assert_eq!(store.fetch(missing).await, Err(StoreError::NotFound(missing)));

    // Delete removes the row
    assert_eq!(store.delete(id).await.unwrap(), 1);
    assert_eq!(store.fetch(id).await, Err(StoreError::NotFound(id)));

    store.close().await;
}

#[tokio::test]
async fn test_unreachable_database_is_unavailable() {
    if std::env::var("STOCKS_TEST_DATABASE_URL").is_err() {
        return;
    }

    let config = StoreConfig {
        database_url: "postgres://nobody@127.0.0.1:1/none".to_string(),
        max_connections: 1,
        acquire_timeout: Duration::from_secs(1),
    };

    let err = PgStockStore::connect(&config).await.unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
}
