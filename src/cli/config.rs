//! Service configuration
//!
//! Layered in increasing precedence: built-in defaults, an optional JSON
//! file, environment variables, then command-line flags.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;
use crate::store::StoreConfig;

use super::errors::{CliError, CliResult};

/// Environment variables checked for the connection string, first match wins
const DATABASE_URL_VARS: [&str; 3] = ["STOCKS_DATABASE_URL", "DATABASE_URL", "POSTGRES_URL"];

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// PostgreSQL connection string (required unless serving in memory)
    #[serde(default)]
    pub database_url: Option<String>,

    /// Listener and CORS settings
    #[serde(flatten)]
    pub http: HttpServerConfig,

    /// Pool size (optional, default 10)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection (optional, default 5)
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,

    /// Log output (optional, default "json")
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_max_connections() -> u32 {
    10
}
fn default_acquire_timeout_secs() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            http: HttpServerConfig::default(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Load from the file if one is given, otherwise start from defaults,
    /// then apply the process environment
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Override fields from environment variables looked up through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = DATABASE_URL_VARS.iter().find_map(|&key| lookup(key)) {
            self.database_url = Some(url);
        }
        if let Some(host) = lookup("STOCKS_HOST") {
            self.http.host = host;
        }
        if let Some(port) = lookup("STOCKS_PORT") {
            self.http.port = parse_env("STOCKS_PORT", &port)?;
        }
        if let Some(max) = lookup("STOCKS_MAX_CONNECTIONS") {
            self.max_connections = parse_env("STOCKS_MAX_CONNECTIONS", &max)?;
        }
        if let Some(secs) = lookup("STOCKS_ACQUIRE_TIMEOUT_SECS") {
            self.acquire_timeout_secs = parse_env("STOCKS_ACQUIRE_TIMEOUT_SECS", &secs)?;
        }
        if let Some(format) = lookup("STOCKS_LOG_FORMAT") {
            self.log_format = format.parse().map_err(CliError::config_error)?;
        }
        Ok(())
    }

    /// Validate settings. `require_database` is false for in-memory serving.
    pub fn validate(&self, require_database: bool) -> CliResult<()> {
        if self.http.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        if self.max_connections == 0 {
            return Err(CliError::config_error("max_connections must be > 0"));
        }

        if self.acquire_timeout_secs == 0 {
            return Err(CliError::config_error("acquire_timeout_secs must be > 0"));
        }

        if require_database && self.database_url.as_deref().map_or(true, str::is_empty) {
            return Err(CliError::config_error(format!(
                "database_url is required (set it in the config file, pass --database-url, or export one of {})",
                DATABASE_URL_VARS.join(", ")
            )));
        }

        Ok(())
    }

    /// Pool settings for the PostgreSQL store
    pub fn store_config(&self) -> CliResult<StoreConfig> {
        let url = self
            .database_url
            .clone()
            .ok_or_else(|| CliError::config_error("database_url is required"))?;

        Ok(StoreConfig {
            database_url: url,
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> CliResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::config_error(format!("Invalid value for {}: '{}'", key, value)))
}
