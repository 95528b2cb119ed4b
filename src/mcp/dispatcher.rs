//! Request dispatch for the action endpoints.
//!
//! Stages run in order and stop at the first failing one:
//! envelope validation, action resolution, parameter validation, backend
//! call, response shaping. Nothing is shared between requests.

use super::envelope::{parse_body, validate_envelope};
use super::error::{InternalFailure, McpError, McpResult};
use super::helpers::success_data;
use super::models::ActionParams;
use super::registry::{self, ActionKind};
use crate::menu::{BackendError, MenuBackend};
use futures_util::FutureExt;
use serde_json::{json, Value};
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

/// Handles one request to `/mcp/actions/{action}` with the raw body bytes.
pub async fn dispatch(backend: &dyn MenuBackend, action: &str, body: &[u8]) -> McpResult<Value> {
    let raw = parse_body(body).map_err(|violation| McpError::InvalidEnvelope(vec![violation]))?;
    let envelope = validate_envelope(&raw).map_err(McpError::InvalidEnvelope)?;

    let descriptor = registry::resolve(action)?;

    // The route selects the action; `action_name` is informational.
    if envelope.action_name != descriptor.name {
        tracing::debug!(
            action = descriptor.name,
            action_name = %envelope.action_name,
            "envelope action_name differs from endpoint"
        );
    }

    let params = descriptor
        .validate_params(envelope.parameters.as_ref())
        .map_err(|violations| McpError::InvalidParams {
            action: descriptor.name,
            violations,
        })?;

    tracing::info!(
        action = descriptor.name,
        version = %envelope.version,
        context_id = ?envelope.context_id,
        "dispatching action"
    );

    invoke(backend, params).await
}

/// Calls the backend operation bound to the action and shapes its result.
pub async fn invoke(backend: &dyn MenuBackend, params: ActionParams) -> McpResult<Value> {
    match params {
        ActionParams::ListMenu(_) => {
            let items = guarded(ActionKind::ListMenu, backend.list_items()).await?;
            Ok(success_data(&items))
        }
        ActionParams::PlaceOrder(order) => {
            tracing::info!(
                item = %order.item_name,
                quantity = order.quantity,
                "placing order"
            );
            let result = guarded(
                ActionKind::PlaceOrder,
                backend.place_order(&order.item_name, order.quantity),
            )
            .await?;

            if result.success {
                Ok(json!({
                    "success": true,
                    "message": result.message,
                    "orderId": result.order_id,
                }))
            } else {
                Err(McpError::ResourceNotFound(result.message))
            }
        }
    }
}

/// Awaits a backend call, turning errors and panics into `McpError::Internal`.
async fn guarded<T, F>(action: ActionKind, call: F) -> McpResult<T>
where
    F: Future<Output = Result<T, BackendError>>,
{
    match AssertUnwindSafe(call).catch_unwind().await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => Err(McpError::Internal {
            action,
            source: error.into(),
        }),
        Err(panic) => Err(McpError::Internal {
            action,
            source: InternalFailure::Panicked(panic_message(panic.as_ref())),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MockMenu;

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[tokio::test]
    async fn list_menu_wraps_items() {
        let backend = MockMenu::new();
        let response = dispatch(
            &backend,
            "listMenu",
            &body(json!({ "protocol": "mcp", "action_name": "listMenu" })),
        )
        .await
        .unwrap();

        assert_eq!(response["success"], true);
        assert_eq!(response["data"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn envelope_is_checked_before_the_action_is_resolved() {
        let backend = MockMenu::new();
        let error = dispatch(&backend, "brewTea", b"{\"protocol\":\"bad\"}")
            .await
            .unwrap_err();
        assert!(matches!(error, McpError::InvalidEnvelope(_)));

        let error = dispatch(
            &backend,
            "brewTea",
            &body(json!({ "protocol": "mcp", "action_name": "brewTea" })),
        )
        .await
        .unwrap_err();
        assert!(matches!(error, McpError::ActionNotFound { ref name } if name == "brewTea"));
    }

    #[tokio::test]
    async fn route_decides_the_action_not_action_name() {
        let backend = MockMenu::new();
        let response = dispatch(
            &backend,
            "placeOrder",
            &body(json!({
                "protocol": "mcp",
                "action_name": "order",
                "parameters": { "itemName": "Latte", "quantity": 2 }
            })),
        )
        .await
        .unwrap();
        assert_eq!(response["success"], true);
        assert!(response["orderId"].is_string());
    }

    #[tokio::test]
    async fn rejected_orders_are_resource_not_found() {
        let backend = MockMenu::new();
        let error = dispatch(
            &backend,
            "placeOrder",
            &body(json!({
                "protocol": "mcp",
                "action_name": "placeOrder",
                "parameters": { "itemName": "Unicorn Brew", "quantity": 1 }
            })),
        )
        .await
        .unwrap_err();
        assert!(matches!(error, McpError::ResourceNotFound(ref m) if m.contains("not available")));
    }

    #[test]
    fn panic_messages_are_extracted() {
        assert_eq!(panic_message(&"static"), "static");
        assert_eq!(panic_message(&String::from("owned")), "owned");
        assert_eq!(panic_message(&42u8), "unknown panic payload");
    }
}
