//! Action registration and lookup.
//!
//! The set of actions is closed: adding one means adding an `ActionKind`
//! variant and a row to [`ACTIONS`]. Discovery output is derived from the
//! same table, so the two cannot drift apart.

use super::error::{McpError, McpResult};
use super::models::{
    ActionParams, ActionSummary, Violation, LIST_MENU_ACTION, PLACE_ORDER_ACTION,
};
use super::params::{list_menu_schema, place_order_schema, validate_list_menu, validate_place_order};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    ListMenu,
    PlaceOrder,
}

impl ActionKind {
    /// Generic message returned to clients when the backend call fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            ActionKind::ListMenu => "Failed to retrieve menu",
            ActionKind::PlaceOrder => "Failed to place order",
        }
    }
}

/// Static record describing one action
#[derive(Debug)]
pub struct ActionDescriptor {
    pub kind: ActionKind,
    pub name: &'static str,
    pub description: &'static str,
    /// Route at which the action is invoked
    pub path: &'static str,
}

/// Every registered action. Names are unique.
pub static ACTIONS: [ActionDescriptor; 2] = [
    ActionDescriptor {
        kind: ActionKind::ListMenu,
        name: LIST_MENU_ACTION,
        description: "Lists the available coffee items on the menu.",
        path: "/mcp/actions/listMenu",
    },
    ActionDescriptor {
        kind: ActionKind::PlaceOrder,
        name: PLACE_ORDER_ACTION,
        description: "Places an order for a specific coffee item.",
        path: "/mcp/actions/placeOrder",
    },
];

impl ActionDescriptor {
    /// JSON Schema of the `parameters` object this action accepts.
    pub fn parameters_schema(&self) -> Value {
        match self.kind {
            ActionKind::ListMenu => list_menu_schema(),
            ActionKind::PlaceOrder => place_order_schema(),
        }
    }

    /// Validates the envelope's `parameters`; absence counts as `{}`.
    pub fn validate_params(
        &self,
        raw: Option<&Map<String, Value>>,
    ) -> Result<ActionParams, Vec<Violation>> {
        let empty = Map::new();
        let raw = raw.unwrap_or(&empty);
        match self.kind {
            ActionKind::ListMenu => validate_list_menu(raw).map(ActionParams::ListMenu),
            ActionKind::PlaceOrder => validate_place_order(raw).map(ActionParams::PlaceOrder),
        }
    }

    pub fn summary(&self) -> ActionSummary {
        ActionSummary {
            name: self.name.to_string(),
            description: self.description.to_string(),
            parameters_schema: self.parameters_schema(),
            endpoint: self.path.to_string(),
        }
    }
}

/// Exact, case-sensitive lookup.
pub fn resolve(name: &str) -> McpResult<&'static ActionDescriptor> {
    ACTIONS
        .iter()
        .find(|descriptor| descriptor.name == name)
        .ok_or_else(|| McpError::ActionNotFound {
            name: name.to_string(),
        })
}

pub fn action_names() -> Vec<&'static str> {
    ACTIONS.iter().map(|descriptor| descriptor.name).collect()
}

/// Summaries for the discovery endpoint, in registry order.
pub fn list_actions() -> Vec<ActionSummary> {
    ACTIONS.iter().map(ActionDescriptor::summary).collect()
}
