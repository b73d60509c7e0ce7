//! stocks-api - A JSON CRUD service for stock records
//!
//! Layers, leaf first:
//!
//! - [`store`] - one parameterized statement per operation over a pooled
//!   PostgreSQL connection (or an in-memory table)
//! - [`http_server`] - axum handlers and the router for `/api/stocks`
//! - [`cli`] - configuration loading and process lifecycle

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
