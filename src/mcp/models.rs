//! MCP Protocol Models and Constants
//!
//! This module contains the data structures and constants shared by the
//! envelope validator, the action registry and the dispatcher.

use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

// =============================================================================
// MCP Constants
// =============================================================================

/// Literal every envelope must carry in its `protocol` field
pub const PROTOCOL: &str = "mcp";
/// Version assumed when an envelope omits `version`
pub const DEFAULT_VERSION: &str = "1.0";
/// Version advertised by the discovery endpoint
pub const PROTOCOL_VERSION: &str = "1.0";
/// Name of the menu listing action
pub const LIST_MENU_ACTION: &str = "listMenu";
/// Name of the order placement action
pub const PLACE_ORDER_ACTION: &str = "placeOrder";

// =============================================================================
// Envelope
// =============================================================================

/// A validated MCP request envelope.
///
/// Holding one says nothing about whether `action_name` is registered.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub version: String,
    pub protocol: String,
    /// Reserved conversation handle; accepted but carries no session state
    pub context_id: Option<Uuid>,
    pub action_name: String,
    /// Unchecked until the action is resolved
    pub parameters: Option<Map<String, Value>>,
}

// =============================================================================
// Violations
// =============================================================================

/// Category of a single validation failure
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    InvalidJson,
    InvalidType,
    InvalidLiteral,
    InvalidString,
    TooSmall,
    TooBig,
}

/// One violated field, reported in the `details` list of a 400 response
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Violation {
    pub code: ViolationCode,
    /// Field path; empty when the whole document is at fault
    pub path: Vec<String>,
    pub message: String,
}

impl Violation {
    pub fn new(code: ViolationCode, path: &[&str], message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.iter().map(|segment| segment.to_string()).collect(),
            message: message.into(),
        }
    }

    /// A mandatory field is absent.
    pub fn required(field: &str) -> Self {
        Self::new(ViolationCode::InvalidType, &[field], "Required")
    }

    /// `actual` has the wrong JSON type; `expected` names the wanted one.
    pub fn invalid_type(path: &[&str], expected: &str, actual: &Value) -> Self {
        Self::new(
            ViolationCode::InvalidType,
            path,
            format!(
                "Expected {}, received {}",
                expected,
                super::helpers::json_type_name(actual)
            ),
        )
    }
}

// =============================================================================
// Action Parameters
// =============================================================================

/// Parameters of `listMenu`; extra keys are ignored
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListMenuParams {}

/// Parameters of `placeOrder`
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceOrderParams {
    /// Never empty
    pub item_name: String,
    /// Always > 0
    pub quantity: u32,
}

/// Typed parameters produced once an action's schema accepted them
#[derive(Debug, Clone, PartialEq)]
pub enum ActionParams {
    ListMenu(ListMenuParams),
    PlaceOrder(PlaceOrderParams),
}

// =============================================================================
// Discovery
// =============================================================================

/// Public description of one registered action
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActionSummary {
    pub name: String,
    pub description: String,
    pub parameters_schema: Value,
    pub endpoint: String,
}

/// Body returned by `POST /mcp`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiscoveryResponse {
    pub protocol: String,
    pub version: String,
    pub available_actions: Vec<ActionSummary>,
}
