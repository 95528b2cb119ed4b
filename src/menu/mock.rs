//! In-memory stand-in for the coffee shop API.

use super::backend::{BackendError, MenuBackend};
use super::helpers::{find_item, format_order_confirmation, format_unavailable, generate_order_id};
use super::models::{MenuItem, OrderResult};
use async_trait::async_trait;
use std::time::Duration;

/// The fixed coffee menu served by [`MockMenu::new`].
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("1", "Espresso", 2.50),
        MenuItem::new("2", "Latte", 3.50),
        MenuItem::new("3", "Cappuccino", 3.50),
        MenuItem::new("4", "Americano", 3.00),
        MenuItem::new("5", "Mocha", 4.00),
    ]
}

/// Mock menu backend with optional simulated network delay.
///
/// Stateless per call: accepted orders are confirmed, never stored.
pub struct MockMenu {
    items: Vec<MenuItem>,

    /// Delay applied before every call; ordering waits twice as long.
    latency: Duration,
}

impl Default for MockMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMenu {
    pub fn new() -> Self {
        Self::with_items(default_menu())
    }

    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self, factor: u32) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency * factor).await;
        }
    }
}

#[async_trait]
impl MenuBackend for MockMenu {
    async fn list_items(&self) -> Result<Vec<MenuItem>, BackendError> {
        self.simulate_latency(1).await;
        tracing::debug!(count = self.items.len(), "mock backend: fetching menu items");
        Ok(self.items.clone())
    }

    async fn place_order(
        &self,
        item_name: &str,
        quantity: u32,
    ) -> Result<OrderResult, BackendError> {
        self.simulate_latency(2).await;
        tracing::debug!(item = item_name, quantity, "mock backend: attempting order");

        let Some(item) = find_item(&self.items, item_name) else {
            tracing::info!(item = item_name, "mock backend: item not on the menu");
            return Ok(OrderResult::rejected(format_unavailable(item_name)));
        };

        let order_id = generate_order_id();
        tracing::info!(
            order_id = %order_id,
            item = %item.name,
            quantity,
            "mock backend: order placed"
        );

        Ok(OrderResult::accepted(
            order_id,
            format_order_confirmation(quantity, item_name),
        ))
    }
}
