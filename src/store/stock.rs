//! Stock record types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stock identifier, assigned by the store on insert
pub type StockId = i64;

/// A persisted stock row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Stock {
    pub stockid: StockId,
    pub name: String,
    pub price: f64,
    pub company: String,
}

impl Stock {
    /// Attach an identifier to a client payload
    pub fn from_new(stockid: StockId, new: NewStock) -> Self {
        Self {
            stockid,
            name: new.name,
            price: new.price,
            company: new.company,
        }
    }
}

/// Client-supplied stock fields for create and update.
///
/// Any `stockid` present in a request body is ignored; identifiers are
/// owned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStock {
    pub name: String,
    pub price: f64,
    pub company: String,
}

impl NewStock {
    pub fn new(name: impl Into<String>, price: f64, company: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            company: company.into(),
        }
    }
}
