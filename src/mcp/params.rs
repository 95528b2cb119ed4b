//! Per-action parameter schemas.
//!
//! Each validator takes the envelope's `parameters` mapping (empty when the
//! envelope had none) and either produces typed parameters or the full list
//! of violated fields.

use super::models::{ListMenuParams, PlaceOrderParams, Violation, ViolationCode};
use serde_json::{json, Map, Number, Value};

/// `listMenu` takes no parameters. Extra keys are ignored.
pub fn validate_list_menu(_raw: &Map<String, Value>) -> Result<ListMenuParams, Vec<Violation>> {
    Ok(ListMenuParams::default())
}

pub fn validate_place_order(raw: &Map<String, Value>) -> Result<PlaceOrderParams, Vec<Violation>> {
    let mut violations = Vec::new();

    let item_name = match raw.get("itemName") {
        None => {
            violations.push(Violation::required("itemName"));
            None
        }
        Some(Value::String(name)) if name.is_empty() => {
            violations.push(Violation::new(
                ViolationCode::TooSmall,
                &["itemName"],
                "Item name cannot be empty",
            ));
            None
        }
        Some(Value::String(name)) => Some(name.clone()),
        Some(other) => {
            violations.push(Violation::invalid_type(&["itemName"], "string", other));
            None
        }
    };

    let quantity = match raw.get("quantity") {
        None => {
            violations.push(Violation::required("quantity"));
            None
        }
        Some(Value::Number(n)) => match positive_quantity(n) {
            Ok(quantity) => Some(quantity),
            Err(violation) => {
                violations.push(violation);
                None
            }
        },
        Some(other) => {
            violations.push(Violation::invalid_type(&["quantity"], "number", other));
            None
        }
    };

    match (item_name, quantity) {
        (Some(item_name), Some(quantity)) => Ok(PlaceOrderParams {
            item_name,
            quantity,
        }),
        _ => Err(violations),
    }
}

/// Integral JSON numbers written as floats (`2.0`) are accepted.
fn positive_quantity(n: &Number) -> Result<u32, Violation> {
    let not_positive = || {
        Violation::new(
            ViolationCode::TooSmall,
            &["quantity"],
            "Quantity must be a positive integer",
        )
    };
    let too_large = || Violation::new(ViolationCode::TooBig, &["quantity"], "Quantity is too large");

    if let Some(q) = n.as_u64() {
        return match u32::try_from(q) {
            Ok(0) => Err(not_positive()),
            Ok(q) => Ok(q),
            Err(_) => Err(too_large()),
        };
    }
    if n.is_i64() {
        return Err(not_positive());
    }

    let f = n.as_f64().unwrap_or(f64::NAN);
    if !f.is_finite() || f.fract() != 0.0 {
        return Err(Violation::new(
            ViolationCode::InvalidType,
            &["quantity"],
            "Expected integer, received float",
        ));
    }
    if f <= 0.0 {
        Err(not_positive())
    } else if f > f64::from(u32::MAX) {
        Err(too_large())
    } else {
        Ok(f as u32)
    }
}

/// JSON Schema advertised for `listMenu`.
pub fn list_menu_schema() -> Value {
    json!({
        "type": "object",
        "properties": {},
        "additionalProperties": true
    })
}

/// JSON Schema advertised for `placeOrder`.
pub fn place_order_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "itemName": { "type": "string", "minLength": 1 },
            "quantity": { "type": "integer", "exclusiveMinimum": 0 }
        },
        "required": ["itemName", "quantity"]
    })
}
