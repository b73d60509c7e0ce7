//! Stock HTTP Routes
//!
//! CRUD endpoints for the `stocks` resource. Each handler parses its
//! inputs, makes exactly one store call and renders JSON.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::store::{NewStock, Stock, StockId, StockStore};

use super::errors::{ApiError, ApiResult};
use super::response::MessageResponse;

// ==================
// Shared State
// ==================

/// Stock state shared across handlers
pub struct StockState {
    pub store: Arc<dyn StockStore>,
}

impl StockState {
    pub fn new(store: Arc<dyn StockStore>) -> Self {
        Self { store }
    }
}

// ==================
// Stock Routes
// ==================

/// Create stock routes (nested under `/api`)
pub fn stock_routes(state: Arc<StockState>) -> Router {
    Router::new()
        .route("/stocks", get(get_all_stocks).post(create_stock))
        .route(
            "/stocks/{id}",
            get(get_stock).put(update_stock).delete(delete_stock),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn parse_id(path: Result<Path<String>, PathRejection>) -> ApiResult<StockId> {
    let Path(raw) = path.map_err(|rejection| ApiError::InvalidId(rejection.body_text()))?;
    raw.parse::<StockId>().map_err(|_| ApiError::InvalidId(raw))
}

/// Decode regardless of `Content-Type`; only the bytes decide validity
fn parse_body(body: &[u8]) -> ApiResult<NewStock> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

// ==================
// Handlers
// ==================

async fn get_stock(
    State(state): State<Arc<StockState>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Stock>> {
    let id = parse_id(path)?;
    let stock = state.store.fetch(id).await?;
    Ok(Json(stock))
}

async fn get_all_stocks(State(state): State<Arc<StockState>>) -> ApiResult<Json<Vec<Stock>>> {
    let stocks = state.store.fetch_all().await?;
    Ok(Json(stocks))
}

async fn create_stock(
    State(state): State<Arc<StockState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let stock = parse_body(&body)?;
    let id = state.store.insert(&stock).await?;

    tracing::info!(stockid = id, "stock created");
    Ok((StatusCode::CREATED, Json(MessageResponse::created(id))))
}

async fn update_stock(
    State(state): State<Arc<StockState>>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(path)?;
    let stock = parse_body(&body)?;

    let affected = state.store.update(id, &stock).await?;
    if affected == 0 {
        return Err(ApiError::NotFound(id));
    }

    tracing::info!(stockid = id, affected, "stock updated");
    Ok(Json(MessageResponse::updated(id, affected)))
}

async fn delete_stock(
    State(state): State<Arc<StockState>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(path)?;

    let affected = state.store.delete(id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound(id));
    }

    tracing::info!(stockid = id, affected, "stock deleted");
    Ok(Json(MessageResponse::deleted(id, affected)))
}
