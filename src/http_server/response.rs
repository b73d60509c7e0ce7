//! # Response Formatting
//!
//! Envelope returned by mutating stock endpoints.

use serde::{Deserialize, Serialize};

use crate::store::StockId;

/// `{id, message}` envelope for create, update and delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: StockId,
    pub message: String,
}

impl MessageResponse {
    pub fn created(id: StockId) -> Self {
        Self {
            id,
            message: "stock created successfully".to_string(),
        }
    }

    pub fn updated(id: StockId, affected: u64) -> Self {
        Self {
            id,
            message: format!(
                "stock updated successfully. Total rows/records affected {}",
                affected
            ),
        }
    }

    pub fn deleted(id: StockId, affected: u64) -> Self {
        Self {
            id,
            message: format!(
                "stock deleted successfully. Total rows/records affected {}",
                affected
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_serialization() {
        let json = serde_json::to_value(MessageResponse::created(4)).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["message"], "stock created successfully");
    }

    #[test]
    fn test_affected_count_in_message() {
        assert_eq!(
            MessageResponse::updated(2, 1).message,
            "stock updated successfully. Total rows/records affected 1"
        );
        assert_eq!(
            MessageResponse::deleted(2, 1).message,
            "stock deleted successfully. Total rows/records affected 1"
        );
    }
}
