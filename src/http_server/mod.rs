//! # HTTP Server Module
//!
//! Axum server exposing the stock resource as JSON.
//!
//! # Endpoints
//!
//! - `GET /health` - Store reachability
//! - `GET /api/stocks` - List stocks
//! - `POST /api/stocks` - Create a stock
//! - `GET /api/stocks/{id}` - Fetch a stock
//! - `PUT /api/stocks/{id}` - Replace a stock
//! - `DELETE /api/stocks/{id}` - Delete a stock

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod response;
pub mod server;
pub mod stock_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use response::MessageResponse;
pub use server::HttpServer;
