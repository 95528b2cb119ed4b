//! MCP route handlers
//!
//! `POST /mcp` describes the registered actions; `POST /mcp/actions/{name}`
//! runs one of them through the dispatcher.

use super::dispatcher::dispatch;
use super::error::{McpError, McpResult};
use super::models::{DiscoveryResponse, PROTOCOL, PROTOCOL_VERSION};
use super::registry::list_actions;
use crate::menu::SharedState;
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::Uri,
    routing::post,
    Json, Router,
};
use serde_json::Value;

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/mcp", post(handle_discovery))
        .route("/mcp/", post(handle_discovery)) // Trailing slash safety
        .route("/mcp/actions/:action", post(handle_action))
}

/// Endpoint: POST /mcp
/// The request body, if any, is ignored.
async fn handle_discovery() -> Json<DiscoveryResponse> {
    Json(discovery())
}

/// Builds the discovery document from the action registry.
pub fn discovery() -> DiscoveryResponse {
    DiscoveryResponse {
        protocol: PROTOCOL.to_string(),
        version: PROTOCOL_VERSION.to_string(),
        available_actions: list_actions(),
    }
}

/// Endpoint: POST /mcp/actions/{action}
async fn handle_action(
    State(state): State<SharedState>,
    uri: Uri,
    action: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> McpResult<Json<Value>> {
    // A segment that does not decode to UTF-8 cannot name a registered action.
    let Path(action) = action.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "undecodable action segment");
        McpError::ActionNotFound {
            name: raw_action_segment(&uri).to_string(),
        }
    })?;
    tracing::debug!(action = %action, bytes = body.len(), "MCP action call");
    dispatch(state.backend.as_ref(), &action, &body)
        .await
        .map(Json)
}

/// Last path segment as received, still percent-encoded.
fn raw_action_segment(uri: &Uri) -> &str {
    uri.path().rsplit('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_segment_keeps_percent_encoding() {
        let uri: Uri = "/mcp/actions/%FF?x=1".parse().unwrap();
        assert_eq!(raw_action_segment(&uri), "%FF");
    }

    #[test]
    fn discovery_lists_every_action() {
        let document = discovery();
        assert_eq!(document.protocol, "mcp");
        assert_eq!(document.available_actions, list_actions());
    }
}
