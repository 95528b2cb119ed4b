//! Menu Domain Models
//!
//! Data structures exchanged with the menu/order backend.

use serde::{Deserialize, Serialize};

// =============================================================================
// Menu Domain Models
// =============================================================================

/// A single item on the coffee menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Stable identifier of the item
    pub id: String,

    /// Display name, matched case-insensitively when ordering
    pub name: String,

    /// Unit price
    pub price: f64,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// Outcome of an order submitted to the backend.
///
/// `order_id` is only present when `success` is true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl OrderResult {
    pub fn accepted(order_id: String, message: String) -> Self {
        Self {
            success: true,
            message,
            order_id: Some(order_id),
        }
    }

    pub fn rejected(message: String) -> Self {
        Self {
            success: false,
            message,
            order_id: None,
        }
    }
}
