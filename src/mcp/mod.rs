//! Model Context Protocol (MCP) Module
//!
//! This module contains the protocol layer, including:
//! - Protocol models (Envelope, Violation, typed parameters, constants)
//! - Envelope and per-action parameter validation
//! - The static action registry and the dispatcher
//! - HTTP handlers for discovery and action invocation

pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod params;
pub mod registry;

// Re-export commonly used types and functions
pub use error::{McpError, McpResult};
pub use handlers::routes;
