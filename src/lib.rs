//! Terminal Shop MCP Library
//!
//! This library provides a minimal action protocol ("MCP") over HTTP:
//! clients discover the registered actions at `POST /mcp` and invoke each
//! one at `POST /mcp/actions/{name}` with a validated envelope.

// Domain modules
pub mod mcp;
pub mod menu;

// Infrastructure
pub mod config;
pub mod router;
