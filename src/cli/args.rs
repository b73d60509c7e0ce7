//! CLI argument definitions using clap
//!
//! Commands:
//! - stocks-api serve [--config <path>] [--database-url <url>] [--host <host>] [--port <port>] [--in-memory]
//! - stocks-api ping [--config <path>] [--database-url <url>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// stocks-api - JSON CRUD service for stock records
#[derive(Parser, Debug)]
#[command(name = "stocks-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command that talks to the store
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// PostgreSQL connection string (overrides file and environment)
    #[arg(long)]
    pub database_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        #[command(flatten)]
        store: StoreArgs,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// Keep stocks in process memory instead of PostgreSQL
        #[arg(long)]
        in_memory: bool,
    },

    /// Check that the database is reachable and exit
    Ping {
        #[command(flatten)]
        store: StoreArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from([
            "stocks-api",
            "serve",
            "--port",
            "9000",
            "--database-url",
            "postgres://localhost/stocks",
        ])
        .unwrap();

        match cli.command {
            Command::Serve {
                store,
                port,
                host,
                in_memory,
            } => {
                assert_eq!(port, Some(9000));
                assert_eq!(host, None);
                assert!(!in_memory);
                assert_eq!(
                    store.database_url.as_deref(),
                    Some("postgres://localhost/stocks")
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_ping_with_config() {
        let cli = Cli::try_parse_from(["stocks-api", "ping", "--config", "stocks.json"]).unwrap();

        match cli.command {
            Command::Ping { store } => {
                assert_eq!(store.config, Some(PathBuf::from("stocks.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_numeric_port() {
        assert!(Cli::try_parse_from(["stocks-api", "serve", "--port", "http"]).is_err());
    }
}
