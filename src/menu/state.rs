//! Application State
//!
//! Holds the menu backend shared by every request handler.

use super::backend::MenuBackend;
use super::mock::MockMenu;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state. Read-only after construction.
pub struct AppState {
    /// Collaborator serving menu listings and orders
    pub backend: Arc<dyn MenuBackend>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(MockMenu::new()))
    }
}

impl AppState {
    pub fn new(backend: Arc<dyn MenuBackend>) -> Self {
        Self { backend }
    }
}
