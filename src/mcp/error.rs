//! Error taxonomy of the action endpoints and its HTTP translation.
//!
//! Validation and dispatch code returns `McpResult`; only `IntoResponse`
//! turns an error into a status code and JSON body.

use super::helpers::{error_body, failure_body};
use super::models::Violation;
use super::registry::{action_names, ActionKind};
use crate::menu::BackendError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Why a backend call did not produce a result.
#[derive(thiserror::Error, Debug)]
pub enum InternalFailure {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("backend panicked: {0}")]
    Panicked(String),
}

/// All errors an action request can end in.
#[derive(thiserror::Error, Debug)]
pub enum McpError {
    #[error("Invalid MCP Request")]
    InvalidEnvelope(Vec<Violation>),

    #[error("Unknown action: {name}")]
    ActionNotFound { name: String },

    #[error("Invalid Parameters for {action}")]
    InvalidParams {
        action: &'static str,
        violations: Vec<Violation>,
    },

    /// Business rejection, e.g. an item that is not on the menu.
    #[error("{0}")]
    ResourceNotFound(String),

    /// Displays only the generic per-action message; the cause stays in `source`.
    #[error("{}", .action.failure_message())]
    Internal {
        action: ActionKind,
        #[source]
        source: InternalFailure,
    },
}

impl McpError {
    pub fn status(&self) -> StatusCode {
        match self {
            McpError::InvalidEnvelope(_) | McpError::InvalidParams { .. } => {
                StatusCode::BAD_REQUEST
            }
            McpError::ActionNotFound { .. } | McpError::ResourceNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            McpError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for McpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        let body = match &self {
            McpError::InvalidEnvelope(violations) | McpError::InvalidParams { violations, .. } => {
                tracing::warn!(%status, violations = violations.len(), "{}", message);
                error_body(message, violations)
            }
            McpError::ActionNotFound { .. } => {
                tracing::warn!(%status, "{}", message);
                let mut body = error_body(message, &[]);
                body["available_actions"] = json!(action_names());
                body
            }
            McpError::ResourceNotFound(_) => {
                tracing::info!(%status, "{}", message);
                failure_body(message)
            }
            McpError::Internal { source, .. } => {
                tracing::error!(%status, error = %source, "{}", message);
                error_body(message, &[])
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type McpResult<T> = Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::models::ViolationCode;

    #[test]
    fn statuses_follow_the_taxonomy() {
        let violation = Violation::new(ViolationCode::TooSmall, &["quantity"], "x");
        let cases = [
            (McpError::InvalidEnvelope(vec![]), StatusCode::BAD_REQUEST),
            (
                McpError::InvalidParams {
                    action: "placeOrder",
                    violations: vec![violation],
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                McpError::ActionNotFound { name: "x".into() },
                StatusCode::NOT_FOUND,
            ),
            (
                McpError::ResourceNotFound("gone".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                McpError::Internal {
                    action: ActionKind::ListMenu,
                    source: InternalFailure::Panicked("boom".into()),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.status(), status, "{error:?}");
        }
    }

    #[test]
    fn internal_errors_hide_their_cause() {
        let error = McpError::Internal {
            action: ActionKind::PlaceOrder,
            source: BackendError::Unavailable("db password rejected".into()).into(),
        };
        assert_eq!(error.to_string(), "Failed to place order");
    }
}
