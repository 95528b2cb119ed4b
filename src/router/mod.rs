//! Routing module for the MCP coffee shop server

use crate::mcp::helpers::error_body;
use crate::menu::SharedState;
use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::IntoResponse,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        tracing::info!(%method, %uri, "request");
        let res = next.run(req).await;
        if !res.status().is_success() {
            tracing::warn!(%method, %uri, status = %res.status(), "request failed");
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(crate::mcp::routes())
        .fallback(handle_unmatched)
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}

/// Keeps unmatched routes on the JSON error contract.
async fn handle_unmatched() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(error_body("Not Found", &[])))
}
