//! The seam between the protocol layer and whatever serves the menu.

use async_trait::async_trait;

use super::models::{MenuItem, OrderResult};

/// Failures raised by a backend instead of a regular result.
///
/// A rejected order is *not* an error; it is an `OrderResult` with
/// `success == false`.
#[derive(thiserror::Error, Debug)]
pub enum BackendError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Operations the MCP dispatcher needs from the menu backend.
#[async_trait]
pub trait MenuBackend: Send + Sync {
    /// Returns the full menu.
    async fn list_items(&self) -> Result<Vec<MenuItem>, BackendError>;

    /// Attempts to order `quantity` units of `item_name`.
    async fn place_order(&self, item_name: &str, quantity: u32)
        -> Result<OrderResult, BackendError>;
}
