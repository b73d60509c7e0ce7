//! CLI command implementations
//!
//! Each command loads configuration, boots a tokio runtime and runs to
//! completion. Errors are returned to `main`, which reports them and
//! exits non-zero.

use std::sync::Arc;

use serde_json::json;

use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::store::{MemoryStockStore, PgStockStore, StockStore};

use super::args::{Cli, Command, StoreArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            store,
            host,
            port,
            in_memory,
        } => serve(&store, host, port, in_memory),
        Command::Ping { store } => ping(&store),
    }
}

/// Run the HTTP server until a shutdown signal.
///
/// The pool is created before the listener binds and closed after the
/// server drains.
pub fn serve(
    args: &StoreArgs,
    host: Option<String>,
    port: Option<u16>,
    in_memory: bool,
) -> CliResult<()> {
    let config = serve_config(args, host, port, in_memory)?;

    init_logging(config.log_format).map_err(CliError::boot_failed)?;

    runtime()?.block_on(async {
        let store = open_store(&config, in_memory).await?;
        let server = HttpServer::new(config.http.clone(), store);

        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Connect to the database, run a trivial statement, and report
pub fn ping(args: &StoreArgs) -> CliResult<()> {
    let config = load_config(args)?;
    config.validate(true)?;

    runtime()?.block_on(async {
        let store = PgStockStore::connect(&config.store_config()?).await?;
        let pinged = store.ping().await;
        store.close().await;
        pinged.map_err(CliError::from)
    })?;

    write_response(json!({"connected": true, "store": "postgres"}))
}

/// Configuration for `serve`, with flag overrides applied and validated
fn serve_config(
    args: &StoreArgs,
    host: Option<String>,
    port: Option<u16>,
    in_memory: bool,
) -> CliResult<Config> {
    let mut config = load_config(args)?;

    if let Some(host) = host {
        config.http.host = host;
    }
    if let Some(port) = port {
        config.http.port = port;
    }

    config.validate(!in_memory)?;
    Ok(config)
}

fn load_config(args: &StoreArgs) -> CliResult<Config> {
    let mut config = Config::resolve(args.config.as_deref())?;

    if let Some(url) = &args.database_url {
        config.database_url = Some(url.clone());
    }

    Ok(config)
}

async fn open_store(config: &Config, in_memory: bool) -> CliResult<Arc<dyn StockStore>> {
    if in_memory {
        tracing::warn!("serving stocks from memory; data is lost on exit");
        return Ok(Arc::new(MemoryStockStore::new()));
    }

    let store = PgStockStore::connect(&config.store_config()?).await?;
    Ok(Arc::new(store))
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}
