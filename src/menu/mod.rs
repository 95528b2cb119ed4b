//! Menu Domain Module
//!
//! The menu/order backend consumed by the MCP layer:
//! - Domain models (MenuItem, OrderResult)
//! - The `MenuBackend` trait and its in-memory mock
//! - Application state holding the backend

pub mod backend;
pub mod helpers;
pub mod mock;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use backend::{BackendError, MenuBackend};
pub use mock::MockMenu;
pub use state::{AppState, SharedState};
