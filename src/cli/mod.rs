//! CLI module for stocks-api
//!
//! Provides command-line interface for:
//! - serve: Run the HTTP server
//! - ping: Check database connectivity

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, StoreArgs};
pub use commands::{ping, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
